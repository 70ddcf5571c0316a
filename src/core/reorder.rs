//! Reorder engine
//!
//! Moves one top-level tab to a new position while leaving every nested
//! group's relative order untouched.

use super::group::{TabGroup, TabGroupCollection};

/// Move the top-level tab at `from` to position `to`
///
/// `from` and `to` are zero-based indices into the top-level subsequence
/// only; nested groups are never addressed by them. Entries strictly between
/// the two positions shift one slot toward the vacated position.
///
/// The output is a rebuilt collection: reordered top-level entries first,
/// then the nested entries in their original relative order. The key/value
/// set is never changed, only its order.
///
/// Callers must pass indices valid for the top-level subsequence; they are
/// always derived from the same snapshot, so no validation happens here.
pub fn reorder(groups: &TabGroupCollection, from: usize, to: usize) -> TabGroupCollection {
    let (mut tabs, nested): (Vec<(&String, &TabGroup)>, Vec<(&String, &TabGroup)>) =
        groups.iter().partition(|(_, group)| group.is_top_level());

    let moved = tabs.remove(from);
    tabs.insert(to, moved);

    tabs.into_iter()
        .chain(nested)
        .map(|(uid, group)| (uid.clone(), group.clone()))
        .collect()
}
