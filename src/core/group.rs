//! Tab group records and the ordered collection they live in

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single group in the host's layout tree
///
/// Groups with no parent are top-level tabs and can be reordered; groups
/// with a parent are nested panes (e.g. splits inside a tab) and keep their
/// place. Fields the host attaches beyond `uid`/`parentUid` are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroup {
    /// Opaque identifier, stable for the lifetime of the tab
    pub uid: String,
    /// Enclosing group, or `None` for a top-level tab
    #[serde(default)]
    pub parent_uid: Option<String>,
    /// Host-owned fields, preserved as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TabGroup {
    /// Create a group with no extra host fields
    pub fn new(uid: impl Into<String>, parent_uid: Option<&str>) -> Self {
        Self {
            uid: uid.into(),
            parent_uid: parent_uid.map(str::to_string),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether this group is a directly reorderable tab
    pub fn is_top_level(&self) -> bool {
        self.parent_uid.is_none()
    }
}

/// Ordered `uid -> TabGroup` mapping owned by the host's state store
///
/// Insertion order is significant: it defines the display order of top-level
/// tabs and the order nested groups are re-emitted in.
pub type TabGroupCollection = IndexMap<String, TabGroup>;

/// Filter a collection down to its top-level tabs, in storage order
pub fn top_level_tabs(groups: &TabGroupCollection) -> Vec<&TabGroup> {
    groups.values().filter(|g| g.is_top_level()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_top_level() {
        assert!(TabGroup::new("a", None).is_top_level());
        assert!(!TabGroup::new("x", Some("a")).is_top_level());
    }

    #[test]
    fn test_top_level_tabs_filters_nested() {
        let mut groups = TabGroupCollection::new();
        groups.insert("a".to_string(), TabGroup::new("a", None));
        groups.insert("x".to_string(), TabGroup::new("x", Some("a")));
        groups.insert("b".to_string(), TabGroup::new("b", None));

        let tabs = top_level_tabs(&groups);
        let uids: Vec<_> = tabs.iter().map(|t| t.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "b"]);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"uid":"a","parentUid":null,"sessionUid":"s1","activeSessionUid":"s1"}"#;
        let group: TabGroup = serde_json::from_str(json).unwrap();

        assert_eq!(group.uid, "a");
        assert!(group.is_top_level());
        assert_eq!(group.extra["sessionUid"], "s1");

        let back = serde_json::to_value(&group).unwrap();
        assert_eq!(back["activeSessionUid"], "s1");
    }

    #[test]
    fn test_missing_parent_uid_is_top_level() {
        let group: TabGroup = serde_json::from_str(r#"{"uid":"a"}"#).unwrap();
        assert!(group.is_top_level());
    }
}
