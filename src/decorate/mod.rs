//! Decorated tab view-model
//!
//! The host wraps its own tab component around this: [`TabProps`] answers
//! the per-tab questions the wrapper needs (is this tab being dragged, does
//! it show a drop zone), and [`TabDecorator`] composes a host-supplied
//! renderer by delegation.

use crate::core::TabGroup;

/// Props a decorated tab bar renders from: the top-level tabs plus the
/// index currently being dragged, if any
///
/// The dragged tab is identified by position, not uid; [`TabProps::index_of`]
/// recomputes each tab's position per render since the underlying
/// collection can shift.
#[derive(Debug, Clone, Copy)]
pub struct TabProps<'a> {
    pub tabs: &'a [&'a TabGroup],
    pub dragging: Option<usize>,
}

impl<'a> TabProps<'a> {
    pub fn new(tabs: &'a [&'a TabGroup], dragging: Option<usize>) -> Self {
        Self { tabs, dragging }
    }

    /// Current position of `uid` among the top-level tabs
    pub fn index_of(&self, uid: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.uid == uid)
    }

    /// Whether `uid` is the tab currently being dragged
    pub fn is_dragging(&self, uid: &str) -> bool {
        self.dragging.is_some() && self.index_of(uid) == self.dragging
    }

    /// Whether `uid` should render a drop-target overlay
    ///
    /// Every tab offers a drop zone while a drag is active, except the
    /// dragged tab itself.
    pub fn offers_drop_zone(&self, uid: &str) -> bool {
        match (self.dragging, self.index_of(uid)) {
            (Some(dragging), Some(index)) => dragging != index,
            _ => false,
        }
    }
}

/// Capability the host's own tab renderer provides
pub trait RenderTab {
    type Output;

    /// Render the tab identified by `uid`
    fn render_tab(&self, props: &TabProps<'_>, uid: &str) -> Self::Output;
}

/// One tab's rendering plus the drag affordances layered on top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedTab<T> {
    /// The host's own rendering, untouched
    pub inner: T,
    /// Marks the tab being dragged
    pub dragging: bool,
    /// Renders a drop-target overlay
    pub drop_zone: bool,
}

/// Wraps a host tab renderer, adding drag affordances by delegation
pub struct TabDecorator<R> {
    inner: R,
}

impl<R: RenderTab> TabDecorator<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Render one tab through the wrapped renderer and decorate it
    pub fn render(&self, props: &TabProps<'_>, uid: &str) -> DecoratedTab<R::Output> {
        DecoratedTab {
            inner: self.inner.render_tab(props, uid),
            dragging: props.is_dragging(uid),
            drop_zone: props.offers_drop_zone(uid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label;

    impl RenderTab for Label {
        type Output = String;

        fn render_tab(&self, props: &TabProps<'_>, uid: &str) -> String {
            let index = props.index_of(uid).unwrap_or(usize::MAX);
            format!("[{index}:{uid}]")
        }
    }

    fn tabs() -> Vec<TabGroup> {
        ["a", "b", "c"]
            .iter()
            .map(|uid| TabGroup::new(*uid, None))
            .collect()
    }

    #[test]
    fn test_index_of_tracks_storage_order() {
        let owned = tabs();
        let refs: Vec<&TabGroup> = owned.iter().collect();
        let props = TabProps::new(&refs, None);

        assert_eq!(props.index_of("b"), Some(1));
        assert_eq!(props.index_of("nope"), None);
    }

    #[test]
    fn test_no_drop_zones_while_idle() {
        let owned = tabs();
        let refs: Vec<&TabGroup> = owned.iter().collect();
        let props = TabProps::new(&refs, None);

        assert!(!props.is_dragging("a"));
        assert!(!props.offers_drop_zone("a"));
    }

    #[test]
    fn test_dragged_tab_offers_no_drop_zone_on_itself() {
        let owned = tabs();
        let refs: Vec<&TabGroup> = owned.iter().collect();
        let props = TabProps::new(&refs, Some(1));

        assert!(props.is_dragging("b"));
        assert!(!props.offers_drop_zone("b"));
        assert!(props.offers_drop_zone("a"));
        assert!(props.offers_drop_zone("c"));
    }

    #[test]
    fn test_decorator_delegates_to_inner_renderer() {
        let owned = tabs();
        let refs: Vec<&TabGroup> = owned.iter().collect();
        let props = TabProps::new(&refs, Some(0));
        let decorator = TabDecorator::new(Label);

        let rendered = decorator.render(&props, "a");
        assert_eq!(rendered.inner, "[0:a]");
        assert!(rendered.dragging);
        assert!(!rendered.drop_zone);

        let rendered = decorator.render(&props, "c");
        assert_eq!(rendered.inner, "[2:c]");
        assert!(!rendered.dragging);
        assert!(rendered.drop_zone);
    }
}
