//! Kanban board error types

use thiserror::Error;

use super::board::{ColumnId, TaskId};

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Board operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KanbanError {
    /// No task with this id
    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),

    /// No column with this id
    #[error("Unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// Column destination index past the end of the board
    #[error("Column index {0} out of range (board has {1} columns)")]
    ColumnIndexOutOfRange(usize, usize),
}
