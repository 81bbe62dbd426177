//! Reorder engine seam
//!
//! The drag-and-drop engine is an external dependency; the board only
//! relies on "reorder items/columns, report what changed". [`ListReorder`]
//! is the plain in-memory implementation.

use serde::Serialize;

use super::board::{Column, ColumnId, TaskId};
use super::error::{KanbanError, Result};

/// Request to move a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    /// Task to move
    pub task: TaskId,
    /// Destination column
    pub to_column: ColumnId,
    /// Destination position (clamped to the column length)
    pub to_index: usize,
}

/// Request to move a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMove {
    /// Column to move
    pub column: ColumnId,
    /// Destination position
    pub to_index: usize,
}

/// A change applied to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardChange {
    /// A task changed position
    TaskMoved {
        /// Task moved
        task: TaskId,
        /// Source column
        from_column: ColumnId,
        /// Source position
        from_index: usize,
        /// Destination column
        to_column: ColumnId,
        /// Final position
        to_index: usize,
    },

    /// A column changed position
    ColumnMoved {
        /// Column moved
        column: ColumnId,
        /// Source position
        from_index: usize,
        /// Final position
        to_index: usize,
    },
}

/// Reorders tasks and columns in place
pub trait ReorderEngine: Send {
    /// Move a task, returning the applied change
    fn move_task(&mut self, columns: &mut Vec<Column>, mv: &TaskMove) -> Result<BoardChange>;

    /// Move a column, returning the applied change
    fn move_column(&mut self, columns: &mut Vec<Column>, mv: &ColumnMove) -> Result<BoardChange>;
}

/// Remove-then-insert reordering over the column vectors
#[derive(Debug, Clone, Copy, Default)]
pub struct ListReorder;

impl ReorderEngine for ListReorder {
    fn move_task(&mut self, columns: &mut Vec<Column>, mv: &TaskMove) -> Result<BoardChange> {
        let to = columns
            .iter()
            .position(|c| c.id == mv.to_column)
            .ok_or_else(|| KanbanError::UnknownColumn(mv.to_column.clone()))?;

        let (from, from_index) = columns
            .iter()
            .enumerate()
            .find_map(|(ci, c)| {
                c.tasks
                    .iter()
                    .position(|t| t.id == mv.task)
                    .map(|ti| (ci, ti))
            })
            .ok_or_else(|| KanbanError::UnknownTask(mv.task.clone()))?;

        let task = columns[from].tasks.remove(from_index);
        let to_index = mv.to_index.min(columns[to].tasks.len());
        columns[to].tasks.insert(to_index, task);

        Ok(BoardChange::TaskMoved {
            task: mv.task.clone(),
            from_column: columns[from].id.clone(),
            from_index,
            to_column: mv.to_column.clone(),
            to_index,
        })
    }

    fn move_column(&mut self, columns: &mut Vec<Column>, mv: &ColumnMove) -> Result<BoardChange> {
        let from_index = columns
            .iter()
            .position(|c| c.id == mv.column)
            .ok_or_else(|| KanbanError::UnknownColumn(mv.column.clone()))?;

        if mv.to_index >= columns.len() {
            return Err(KanbanError::ColumnIndexOutOfRange(mv.to_index, columns.len()));
        }

        let column = columns.remove(from_index);
        columns.insert(mv.to_index, column);

        Ok(BoardChange::ColumnMoved {
            column: mv.column.clone(),
            from_index,
            to_index: mv.to_index,
        })
    }
}
