//! Core module - tab group model, reorder engine, and drag state

pub mod group;
pub mod reorder;
pub mod state;

pub use group::{top_level_tabs, TabGroup, TabGroupCollection};
pub use reorder::reorder;
pub use state::{reduce_term_groups, reduce_ui, Action, DragState};
