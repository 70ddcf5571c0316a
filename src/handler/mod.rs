//! Handler module - gesture and keyboard dispatch

pub mod drag;
pub mod key;
pub mod keymap;

pub use drag::{drag_end, drag_start, drop_on};
pub use key::{move_active_tab, Direction, KeyAction};
pub use keymap::{decorate_keymaps, Binding, KeymapConfig};
