//! SQLite persistence for todos
//!
//! Plain repository functions over a single connection handle; no ORM,
//! no global state. The schema is applied at open time and every
//! operation is one statement (or one lookup plus one statement).

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::types::{NewTodo, Todo, TodoId, TodoPatch, TodoStatus};

/// Todo repository backed by SQLite.
///
/// The connection is guarded by an async mutex, so statements execute one
/// at a time; each statement is its own implicit transaction.
#[derive(Debug)]
pub struct TodoStore {
    conn: Mutex<Connection>,
}

impl TodoStore {
    /// Open (or create) a database file and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database. Used by the test suite.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Fetch all todos, oldest first.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, title, status, created_at, updated_at FROM todos ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_todo)?;

        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?);
        }
        Ok(todos)
    }

    /// Number of stored todos.
    pub async fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Fetch one todo by id.
    pub async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let conn = self.conn.lock().await;
        fetch(&conn, id)
    }

    /// Insert a new todo and return it with its generated id.
    pub async fn insert(&self, new: NewTodo) -> Result<Todo> {
        let conn = self.conn.lock().await;
        let now = Utc::now();
        conn.execute(
            "INSERT INTO todos (title, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![new.title, new.status.as_str(), now, now],
        )?;

        Ok(Todo {
            id: conn.last_insert_rowid(),
            title: new.title,
            status: new.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update; fields absent from the patch keep their
    /// stored value. Fails with [`Error::NotFound`] if the id is absent.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let conn = self.conn.lock().await;
        let mut todo = fetch(&conn, id)?.ok_or(Error::NotFound)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(status) = patch.status {
            todo.status = status;
        }
        todo.updated_at = Utc::now();

        conn.execute(
            "UPDATE todos SET title = ?1, status = ?2, updated_at = ?3 WHERE id = ?4",
            params![todo.title, todo.status.as_str(), todo.updated_at, todo.id],
        )?;
        Ok(todo)
    }

    /// Force the status of an existing todo, regardless of its current
    /// value. Fails with [`Error::NotFound`] if the id is absent.
    pub async fn set_status(&self, id: TodoId, status: TodoStatus) -> Result<Todo> {
        let conn = self.conn.lock().await;
        let mut todo = fetch(&conn, id)?.ok_or(Error::NotFound)?;

        todo.status = status;
        todo.updated_at = Utc::now();

        conn.execute(
            "UPDATE todos SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![todo.status.as_str(), todo.updated_at, todo.id],
        )?;
        Ok(todo)
    }

    /// Remove a todo. Fails with [`Error::NotFound`] if the id is absent.
    pub async fn delete(&self, id: TodoId) -> Result<()> {
        let conn = self.conn.lock().await;
        let affected = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;

        CREATE TABLE IF NOT EXISTS todos (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          title TEXT NOT NULL,
          status TEXT NOT NULL DEFAULT 'todo'
            CHECK (status IN ('todo', 'in-progress', 'done')),
          created_at TEXT NOT NULL,
          updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn fetch(conn: &Connection, id: TodoId) -> Result<Option<Todo>> {
    let todo = conn
        .query_row(
            "SELECT id, title, status, created_at, updated_at FROM todos WHERE id = ?1",
            params![id],
            row_to_todo,
        )
        .optional()?;
    Ok(todo)
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    let status: String = row.get(2)?;
    let status = TodoStatus::parse(&status).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            format!("unknown status: {status}").into(),
        )
    })?;

    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        status,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
