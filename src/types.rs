//! Core types for tasklite

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo ID type (SQLite rowid, always positive once assigned)
pub type TodoId = i64;

/// Lifecycle status of a todo
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TodoStatus {
    /// All accepted wire values, in declaration order.
    pub const VALUES: [&'static str; 3] = ["todo", "in-progress", "done"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Done => "done",
        }
    }

    /// Parse a wire value; returns `None` for anything outside the fixed set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "todo" => Some(TodoStatus::Todo),
            "in-progress" => Some(TodoStatus::InProgress),
            "done" => Some(TodoStatus::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Todo represents a single tracked task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a todo
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub status: TodoStatus,
}

/// Validated partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub status: Option<TodoStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for raw in TodoStatus::VALUES {
            let status = TodoStatus::parse(raw).unwrap();
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert_eq!(TodoStatus::parse("invalid-status"), None);
        assert_eq!(TodoStatus::parse("TODO"), None);
        assert_eq!(TodoStatus::parse(""), None);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
