//! Runtime error types

use thiserror::Error;

/// Result type for runtime handle operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Sidebar runtime errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// The event loop has stopped
    #[error("Sidebar runtime is not running")]
    Closed,

    /// The event queue is full
    #[error("Sidebar event queue is full")]
    QueueFull,
}
