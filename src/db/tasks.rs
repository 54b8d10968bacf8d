//! Task CRUD and date-range reads.

use super::{now_ms, Database};
use crate::dates;
use crate::error::{Result, StoreError};
use crate::types::{Status, Task};
use chrono::NaiveDate;
use rusqlite::{params, Row};

pub(crate) fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    let id: i64 = row.get("id")?;
    let title: String = row.get("title")?;
    let description: Option<String> = row.get("description")?;
    let due_date: String = row.get("due_date")?;
    let status: String = row.get("status")?;
    let category: String = row.get("category")?;
    let created_at: i64 = row.get("created_at")?;

    let due_date = dates::parse_storage_date(&due_date).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let status = Status::from_storage(&status).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Task {
        id,
        title,
        description,
        due_date,
        status,
        category,
        created_at,
    })
}

impl Database {
    /// Insert a new task and return its assigned id.
    ///
    /// Status defaults to New. The due date is typed, so an unparsable date
    /// is rejected at the boundary (`dates::parse_display_date`) before this
    /// is ever reached; an empty title is rejected here, before any write.
    pub fn add_task(
        &self,
        title: &str,
        description: Option<&str>,
        due_date: NaiveDate,
        category: &str,
    ) -> Result<i64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let now = now_ms();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (title, description, due_date, status, category, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    title,
                    description,
                    dates::format_storage_date(due_date),
                    Status::New.as_str(),
                    category,
                    now,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Get a task by id.
    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT * FROM tasks WHERE id = ?1")?;

            let result = stmt.query_row(params![id], parse_task_row);

            match result {
                Ok(task) => Ok(Some(task)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    /// List tasks with optional filters, ordered by due date then id.
    ///
    /// `search_term` matches as a case-sensitive substring of the title or
    /// description (`instr`, not `LIKE` -- LIKE folds ASCII case); an empty
    /// term matches everything. `None` for status or category means no
    /// filter.
    pub fn list_tasks(
        &self,
        search_term: &str,
        status: Option<Status>,
        category: Option<&str>,
    ) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut sql = String::from("SELECT * FROM tasks WHERE 1=1");
            let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

            if !search_term.is_empty() {
                sql.push_str(
                    " AND (instr(title, ?) > 0 OR instr(COALESCE(description, ''), ?) > 0)",
                );
                params_vec.push(Box::new(search_term.to_string()));
                params_vec.push(Box::new(search_term.to_string()));
            }

            if let Some(s) = status {
                sql.push_str(" AND status = ?");
                params_vec.push(Box::new(s.as_str().to_string()));
            }

            if let Some(c) = category {
                sql.push_str(" AND category = ?");
                params_vec.push(Box::new(c.to_string()));
            }

            sql.push_str(" ORDER BY due_date, id");

            let params_refs: Vec<&dyn rusqlite::ToSql> =
                params_vec.iter().map(|b| b.as_ref()).collect();

            let mut stmt = conn.prepare(&sql)?;
            let tasks = stmt
                .query_map(params_refs.as_slice(), parse_task_row)?
                .filter_map(|r| r.ok())
                .collect();

            Ok(tasks)
        })
    }

    /// Tasks due on an exact date.
    pub fn tasks_by_date(&self, date: NaiveDate) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT * FROM tasks WHERE due_date = ?1 ORDER BY id")?;
            let tasks = stmt
                .query_map(params![dates::format_storage_date(date)], parse_task_row)?
                .filter_map(|r| r.ok())
                .collect();
            Ok(tasks)
        })
    }

    /// Tasks due within a month, as the half-open range
    /// `[year-month-01, next-month-01)`.
    pub fn tasks_by_month(&self, year: i32, month: u32) -> Result<Vec<Task>> {
        let (start, end) = dates::month_bounds(year, month)?;

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT * FROM tasks WHERE due_date >= ?1 AND due_date < ?2 ORDER BY due_date, id",
            )?;
            let tasks = stmt
                .query_map(
                    params![
                        dates::format_storage_date(start),
                        dates::format_storage_date(end)
                    ],
                    parse_task_row,
                )?
                .filter_map(|r| r.ok())
                .collect();
            Ok(tasks)
        })
    }

    /// Replace all mutable fields of a task.
    ///
    /// Fails with `TaskNotFound` if the id has vanished; the single UPDATE
    /// means there is never a partial write.
    pub fn update_task(
        &self,
        id: i64,
        title: &str,
        description: Option<&str>,
        due_date: NaiveDate,
        status: Status,
        category: &str,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE tasks
                 SET title = ?1, description = ?2, due_date = ?3, status = ?4, category = ?5
                 WHERE id = ?6",
                params![
                    title,
                    description,
                    dates::format_storage_date(due_date),
                    status.as_str(),
                    category,
                    id,
                ],
            )?;

            if updated == 0 {
                return Err(StoreError::TaskNotFound(id));
            }
            Ok(())
        })
    }

    /// Set a task's status to Done, leaving every other field untouched.
    /// A missing id is a no-op, not an error.
    pub fn mark_done(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE tasks SET status = ?1 WHERE id = ?2",
                params![Status::Done.as_str(), id],
            )?;
            Ok(())
        })
    }

    /// Remove a task permanently. A missing id is a no-op.
    pub fn delete_task(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
            Ok(())
        })
    }
}
