//! Task persistence.
//!
//! # Invariants
//! - Task ids are unique; `add_task` never overwrites.
//! - `status` and `priority` are stored as their GUI labels.

use super::{RepoError, RepoResult};
use crate::model::annual::{Priority, Task, TaskStatus};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENTITY: &str = "task";

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    status,
    score,
    priority,
    start_date,
    end_date
FROM tasks";

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    fn add_task(&self, task: &Task) -> RepoResult<()>;
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    fn delete_task(&self, id: &str) -> RepoResult<()>;
    fn get_task(&self, id: &str) -> RepoResult<Option<Task>>;
    /// Lists tasks in insertion order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn add_task(&self, task: &Task) -> RepoResult<()> {
        validate_task_id(&task.id)?;

        let inserted = self.conn.execute(
            "INSERT INTO tasks (
                id,
                title,
                description,
                status,
                score,
                priority,
                start_date,
                end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO NOTHING;",
            params![
                task.id.as_str(),
                task.title.as_str(),
                task.description.as_str(),
                task.status.as_str(),
                task.score,
                task.priority.as_str(),
                task.start_date.as_deref(),
                task.end_date.as_deref(),
            ],
        )?;

        if inserted == 0 {
            return Err(RepoError::AlreadyExists {
                entity: ENTITY,
                id: task.id.clone(),
            });
        }

        Ok(())
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        validate_task_id(&task.id)?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                description = ?2,
                status = ?3,
                score = ?4,
                priority = ?5,
                start_date = ?6,
                end_date = ?7,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?8;",
            params![
                task.title.as_str(),
                task.description.as_str(),
                task.status.as_str(),
                task.score,
                task.priority.as_str(),
                task.start_date.as_deref(),
                task.end_date.as_deref(),
                task.id.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ENTITY,
                id: task.id.clone(),
            });
        }

        Ok(())
    }

    fn delete_task(&self, id: &str) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            });
        }

        Ok(())
    }

    fn get_task(&self, id: &str) -> RepoResult<Option<Task>> {
        let row = self
            .conn
            .query_row(
                &format!("{TASK_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_task_columns,
            )
            .optional()?;

        row.map(parse_task_columns).transpose()
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_columns(read_task_columns(row)?)?);
        }

        Ok(tasks)
    }
}

/// Raw column values; label columns are decoded in `parse_task_columns`.
struct TaskColumns {
    task: Task,
    status: String,
    priority: String,
}

fn read_task_columns(row: &Row<'_>) -> rusqlite::Result<TaskColumns> {
    Ok(TaskColumns {
        task: Task {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            status: TaskStatus::default(),
            score: row.get("score")?,
            priority: Priority::default(),
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
        },
        status: row.get("status")?,
        priority: row.get("priority")?,
    })
}

fn parse_task_columns(columns: TaskColumns) -> RepoResult<Task> {
    let TaskColumns {
        mut task,
        status,
        priority,
    } = columns;

    task.status = TaskStatus::parse(&status).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task status `{status}` in tasks.status"))
    })?;
    task.priority = Priority::parse(&priority).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid task priority `{priority}` in tasks.priority"
        ))
    })?;

    Ok(task)
}

fn validate_task_id(id: &str) -> RepoResult<()> {
    if id.trim().is_empty() {
        return Err(RepoError::InvalidData("task id cannot be empty".to_string()));
    }
    Ok(())
}
