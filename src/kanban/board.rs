//! Board data model and the demo board

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::Result;
use super::reorder::{BoardChange, ColumnMove, ListReorder, ReorderEngine, TaskMove};

/// Task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Create a task id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Create a column id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Id
    pub id: TaskId,
    /// Title
    pub title: String,
    /// Priority badge
    pub priority: Priority,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Assignee display name
    #[serde(default)]
    pub assignee: Option<String>,
    /// Assignee avatar image
    #[serde(default)]
    pub assignee_avatar: Option<String>,
    /// Due date, display form
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    fn demo(id: &str, title: &str, priority: Priority, assignee: &str, due_date: &str) -> Self {
        Self {
            id: TaskId::from(id),
            title: title.to_string(),
            priority,
            description: None,
            assignee: Some(assignee.to_string()),
            assignee_avatar: Some("/madoka.png".to_string()),
            due_date: Some(due_date.to_string()),
        }
    }
}

/// A column of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Id
    pub id: ColumnId,
    /// Heading
    pub title: String,
    /// Tasks top to bottom
    pub tasks: Vec<Task>,
}

/// Receives every successful board change
#[cfg_attr(test, mockall::automock)]
pub trait BoardObserver: Send {
    /// Called after a change was applied
    fn on_change(&self, change: &BoardChange);
}

/// Kanban board: columns plus a pluggable reorder engine
pub struct KanbanBoard {
    columns: Vec<Column>,
    engine: Box<dyn ReorderEngine>,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl KanbanBoard {
    /// Create a board
    pub fn new(columns: Vec<Column>, engine: impl ReorderEngine + 'static) -> Self {
        Self {
            columns,
            engine: Box::new(engine),
            observers: Vec::new(),
        }
    }

    /// The demo board shown on the portfolio site
    pub fn demo() -> Self {
        use Priority::{High, Low, Medium};

        let columns = vec![
            Column {
                id: "backlog".into(),
                title: "Backlog".to_string(),
                tasks: vec![
                    Task::demo("1", "Add authentication", High, "Madoka", "Jan 10, 2025"),
                    Task::demo("2", "Create API endpoints", Medium, "Jemmdev", "Jan 15, 2025"),
                    Task::demo("3", "Write documentation", Low, "Senridev", "Jan 20, 2025"),
                ],
            },
            Column {
                id: "in_progress".into(),
                title: "In Progress".to_string(),
                tasks: vec![
                    Task::demo("4", "Design system updates", High, "Henrydev", "Jan 25, 2025"),
                    Task::demo("5", "Implement dark mode", Medium, "HenryM", "Jan 25, 2025"),
                ],
            },
            Column {
                id: "review".into(),
                title: "Review".to_string(),
                tasks: vec![Task::demo(
                    "6",
                    "Code review PR #123",
                    High,
                    "Henry Matthews",
                    "Jan 18, 2025",
                )],
            },
            Column {
                id: "done".into(),
                title: "Done".to_string(),
                tasks: vec![
                    Task::demo("7", "Setup project", High, "JosephM", "Jan 5, 2025"),
                    Task::demo("8", "Initial commit", Low, "Senridev", "Jan 1, 2025"),
                ],
            },
        ];

        Self::new(columns, ListReorder)
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a task and the column holding it
    pub fn find_task(&self, id: &TaskId) -> Option<(&Column, &Task)> {
        self.columns
            .iter()
            .find_map(|c| c.tasks.iter().find(|t| &t.id == id).map(|t| (c, t)))
    }

    /// Total number of tasks
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Register a change observer
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Move a task (within or across columns)
    pub fn move_task(&mut self, mv: TaskMove) -> Result<BoardChange> {
        let change = self.engine.move_task(&mut self.columns, &mv)?;
        self.notify(&change);
        Ok(change)
    }

    /// Move a column
    pub fn move_column(&mut self, mv: ColumnMove) -> Result<BoardChange> {
        let change = self.engine.move_column(&mut self.columns, &mv)?;
        self.notify(&change);
        Ok(change)
    }

    fn notify(&self, change: &BoardChange) {
        tracing::debug!("Board change: {:?}", change);
        for observer in &self.observers {
            observer.on_change(change);
        }
    }
}

impl fmt::Display for KanbanBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            writeln!(f, "{} ({})", column.title, column.tasks.len())?;
            for task in &column.tasks {
                write!(f, "  [{:<6}] {}", task.priority, task.title)?;
                if let Some(assignee) = &task.assignee {
                    write!(f, " - {}", assignee)?;
                }
                if let Some(due) = &task.due_date {
                    write!(f, " (due {})", due)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kanban::KanbanError;
    use mockall::predicate::always;

    #[test]
    fn test_demo_board() {
        let board = KanbanBoard::demo();
        let titles: Vec<&str> = board.columns().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Backlog", "In Progress", "Review", "Done"]);
        assert_eq!(board.task_count(), 8);

        let (column, task) = board.find_task(&"6".into()).unwrap();
        assert_eq!(column.id, ColumnId::from("review"));
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_move_task_notifies_observers() {
        let mut observer = MockBoardObserver::new();
        observer
            .expect_on_change()
            .withf(|change| {
                matches!(
                    change,
                    BoardChange::TaskMoved { to_column, to_index: 0, .. }
                        if to_column == &ColumnId::from("done")
                )
            })
            .times(1)
            .return_const(());

        let mut board = KanbanBoard::demo();
        board.subscribe(observer);

        board
            .move_task(TaskMove {
                task: "6".into(),
                to_column: "done".into(),
                to_index: 0,
            })
            .unwrap();

        assert!(board.column(&"review".into()).unwrap().tasks.is_empty());
        assert_eq!(board.column(&"done".into()).unwrap().tasks[0].id, TaskId::from("6"));
    }

    #[test]
    fn test_failed_move_does_not_notify() {
        let mut observer = MockBoardObserver::new();
        observer.expect_on_change().with(always()).times(0);

        let mut board = KanbanBoard::demo();
        board.subscribe(observer);

        let err = board
            .move_task(TaskMove {
                task: "42".into(),
                to_column: "done".into(),
                to_index: 0,
            })
            .unwrap_err();
        assert_eq!(err, KanbanError::UnknownTask("42".into()));
        assert_eq!(board.task_count(), 8);
    }

    #[test]
    fn test_display_lists_columns() {
        let text = KanbanBoard::demo().to_string();
        assert!(text.contains("Backlog (3)"));
        assert!(text.contains("Code review PR #123 - Henry Matthews (due Jan 18, 2025)"));
    }
}
