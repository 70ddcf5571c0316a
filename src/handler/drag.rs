//! Drag-gesture dispatch glue
//!
//! Translates the host's gesture callbacks into actions for the reducers.
//! The drop path resolves `from` out of the current drag state, so a drop
//! without an active drag dispatches nothing.

use crate::core::{Action, DragState};

/// Action for a drag grabbing the tab at `index`
pub fn drag_start(index: usize) -> Action {
    Action::StartDragTab(index)
}

/// Action for the end of a drag gesture
///
/// The host fires this on every gesture end, dropped or not.
pub fn drag_end() -> Action {
    Action::StopDragTab
}

/// Action for dropping the dragged tab onto the tab at `target`
///
/// Returns `None` when no drag is active.
pub fn drop_on(state: &DragState, target: usize) -> Option<Action> {
    let from = state.dragging_index()?;
    Some(Action::MoveTab { from, to: target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reduce_ui;

    #[test]
    fn test_drag_start_and_end_actions() {
        assert_eq!(drag_start(3), Action::StartDragTab(3));
        assert_eq!(drag_end(), Action::StopDragTab);
    }

    #[test]
    fn test_drop_uses_tracked_index_as_from() {
        let state = reduce_ui(DragState::idle(), &drag_start(2));
        assert_eq!(drop_on(&state, 0), Some(Action::MoveTab { from: 2, to: 0 }));
    }

    #[test]
    fn test_drop_without_active_drag_is_noop() {
        assert_eq!(drop_on(&DragState::idle(), 1), None);
    }

    #[test]
    fn test_drop_after_drag_end_is_noop() {
        let state = reduce_ui(DragState::idle(), &drag_start(2));
        let state = reduce_ui(state, &drag_end());
        assert_eq!(drop_on(&state, 0), None);
    }
}
