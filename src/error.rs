//! Unified error types for tabdrag
//!
//! Provides a consistent error handling approach across all modules.

/// Unified error type for tabdrag operations
#[derive(Debug, thiserror::Error)]
pub enum TabdragError {
    /// I/O errors (keymap file reads, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Key-combination errors
    #[error("Keymap error: {0}")]
    Keymap(String),
}

/// Convenience Result type using TabdragError
pub type Result<T> = std::result::Result<T, TabdragError>;

impl TabdragError {
    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Keymap error
    pub fn keymap(msg: impl Into<String>) -> Self {
        Self::Keymap(msg.into())
    }
}
