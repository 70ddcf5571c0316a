//! Drag state and the reducers that drive it
//!
//! The host owns both stores; this module only supplies pure
//! `(state, action) -> state` transitions over the snapshots it is handed.

use log::debug;

use super::group::TabGroupCollection;
use super::reorder::reorder;

/// Actions dispatched by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A drag gesture grabbed the top-level tab at this index
    StartDragTab(usize),
    /// The drag gesture ended (always fired, dropped or not)
    StopDragTab,
    /// Move the top-level tab at `from` to position `to`
    MoveTab { from: usize, to: usize },
}

/// Transient drag-gesture state, one per window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    dragging: Option<usize>,
}

impl DragState {
    /// The idle state: nothing is being dragged
    pub fn idle() -> Self {
        Self::default()
    }

    /// Index of the tab currently being dragged, if any
    ///
    /// Consumers compare this against each tab's current position among the
    /// top-level tabs, recomputed per render; the mapping is positional, not
    /// by uid.
    pub fn dragging_index(&self) -> Option<usize> {
        self.dragging
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}

/// Reducer for the drag-gesture state
///
/// `StartDragTab` wins from any state, `StopDragTab` always returns to idle,
/// everything else passes through.
pub fn reduce_ui(state: DragState, action: &Action) -> DragState {
    match action {
        Action::StartDragTab(index) => {
            debug!("drag started on tab {index}");
            DragState {
                dragging: Some(*index),
            }
        }
        Action::StopDragTab => DragState { dragging: None },
        _ => state,
    }
}

/// Reducer for the tab-group collection
///
/// `MoveTab` runs the reorder engine; everything else returns the snapshot
/// unchanged.
pub fn reduce_term_groups(groups: &TabGroupCollection, action: &Action) -> TabGroupCollection {
    match action {
        Action::MoveTab { from, to } => {
            debug!("moving tab {from} -> {to}");
            reorder(groups, *from, *to)
        }
        _ => groups.clone(),
    }
}
