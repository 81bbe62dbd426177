//! Demo kanban board
//!
//! Task and column model for the board widget shown on the portfolio.
//! Reordering is delegated to a [`ReorderEngine`] (in the browser, a
//! drag-and-drop library); the board applies the engine's result and
//! notifies [`BoardObserver`]s.
//!
//! ```
//! use portfolio_nav::kanban::{KanbanBoard, TaskMove};
//!
//! let mut board = KanbanBoard::demo();
//! board.move_task(TaskMove {
//!     task: "4".into(),
//!     to_column: "review".into(),
//!     to_index: 0,
//! })?;
//! assert_eq!(board.column(&"review".into()).unwrap().tasks.len(), 2);
//! # Ok::<(), portfolio_nav::kanban::KanbanError>(())
//! ```

mod board;
mod error;
mod reorder;

pub use board::{BoardObserver, Column, ColumnId, KanbanBoard, Priority, Task, TaskId};
pub use error::{KanbanError, Result};
pub use reorder::{BoardChange, ColumnMove, ListReorder, ReorderEngine, TaskMove};
