//! tabdrag - drag-and-drop tab reordering for terminal emulators
//!
//! This crate provides the state-side core of a tab drag-and-drop feature:
//! a pure reorder engine over the host's ordered tab-group collection, a
//! drag-state tracker driven by dispatched actions, keyboard-triggered
//! moves, and the keymap override that reserves the two move-tab shortcuts.
//! Rendering stays with the host; [`decorate`] only computes the view-model
//! a decorated tab component needs.

pub mod core;
pub mod decorate;
pub mod error;
pub mod handler;

pub use error::{Result, TabdragError};
