//! Keyboard-triggered tab movement

use crate::core::{Action, TabGroup};

/// Direction of a keyboard-driven move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Actions that can result from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the active tab one slot left
    MoveTabLeft,
    /// Move the active tab one slot right
    MoveTabRight,
}

impl KeyAction {
    /// The move direction this action requests
    pub fn direction(self) -> Direction {
        match self {
            KeyAction::MoveTabLeft => Direction::Left,
            KeyAction::MoveTabRight => Direction::Right,
        }
    }
}

/// Compute the move action for shifting the active tab one slot
///
/// `tabs` is the top-level-only ordered sequence (see
/// [`crate::core::top_level_tabs`]); `active_uid` identifies the tab the
/// shortcut applies to. Returns `None` when the tab is already at the
/// boundary in that direction, or when `active_uid` is not a top-level tab.
pub fn move_active_tab(
    direction: Direction,
    tabs: &[&TabGroup],
    active_uid: &str,
) -> Option<Action> {
    let from = tabs.iter().position(|tab| tab.uid == active_uid)?;
    let last = tabs.len().saturating_sub(1);
    let to = match direction {
        Direction::Left => from.saturating_sub(1),
        Direction::Right => (from + 1).min(last),
    };

    if to == from {
        return None;
    }
    Some(Action::MoveTab { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reduce_term_groups, top_level_tabs, TabGroupCollection};

    fn three_tabs() -> TabGroupCollection {
        ["a", "b", "c"]
            .iter()
            .map(|uid| (uid.to_string(), TabGroup::new(*uid, None)))
            .collect()
    }

    #[test]
    fn test_left_at_first_tab_is_noop() {
        let groups = three_tabs();
        let tabs = top_level_tabs(&groups);
        assert_eq!(move_active_tab(Direction::Left, &tabs, "a"), None);
    }

    #[test]
    fn test_right_at_last_tab_is_noop() {
        let groups = three_tabs();
        let tabs = top_level_tabs(&groups);
        assert_eq!(move_active_tab(Direction::Right, &tabs, "c"), None);
    }

    #[test]
    fn test_interior_move_right() {
        let groups = three_tabs();
        let tabs = top_level_tabs(&groups);
        let action = move_active_tab(Direction::Right, &tabs, "b");
        assert_eq!(action, Some(Action::MoveTab { from: 1, to: 2 }));

        let moved = reduce_term_groups(&groups, &action.unwrap());
        let order: Vec<_> = moved.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_interior_move_left() {
        let groups = three_tabs();
        let tabs = top_level_tabs(&groups);
        let action = move_active_tab(Direction::Left, &tabs, "b");
        assert_eq!(action, Some(Action::MoveTab { from: 1, to: 0 }));
    }

    #[test]
    fn test_unknown_uid_is_noop() {
        let groups = three_tabs();
        let tabs = top_level_tabs(&groups);
        assert_eq!(move_active_tab(Direction::Right, &tabs, "nope"), None);
    }

    #[test]
    fn test_empty_tab_list_is_noop() {
        assert_eq!(move_active_tab(Direction::Left, &[], "a"), None);
    }

    #[test]
    fn test_key_action_direction() {
        assert_eq!(KeyAction::MoveTabLeft.direction(), Direction::Left);
        assert_eq!(KeyAction::MoveTabRight.direction(), Direction::Right);
    }
}
