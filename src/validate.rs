//! Request validation
//!
//! Every handler runs these checks before touching the store. Violations
//! are collected into field-level errors and the operation is never
//! attempted; messages match the public API contract exactly.

use crate::error::{Error, FieldError, Result};
use crate::types::{NewTodo, TodoId, TodoPatch, TodoStatus};

pub const TITLE_MESSAGE: &str = "Title should be between 1 and 255 characters";
pub const STATUS_MESSAGE: &str = "Invalid status";
pub const ID_MESSAGE: &str = "ID must be a positive integer";

const TITLE_MAX_CHARS: usize = 255;

/// Parse the raw `:id` path segment.
///
/// Parsed here rather than by the router so that a malformed id surfaces
/// in the structured error body like any other validation failure.
pub fn parse_id(raw: &str) -> Result<TodoId> {
    match raw.parse::<TodoId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::invalid_field("id", ID_MESSAGE)),
    }
}

/// Validate a create payload: `title` required, `status` optional
/// (defaults to `todo`).
pub fn create_payload(title: Option<String>, status: Option<String>) -> Result<NewTodo> {
    let mut errors = Vec::new();

    let title = match title {
        Some(title) => {
            if let Some(err) = check_title(&title) {
                errors.push(err);
            }
            title
        }
        None => {
            errors.push(FieldError::new("title", TITLE_MESSAGE));
            String::new()
        }
    };

    let status = match status {
        Some(raw) => check_status(&raw).unwrap_or_else(|err| {
            errors.push(err);
            TodoStatus::default()
        }),
        None => TodoStatus::default(),
    };

    if errors.is_empty() {
        Ok(NewTodo { title, status })
    } else {
        Err(Error::validation(errors))
    }
}

/// Validate an update payload: both fields optional, but any supplied
/// field must pass the same checks as on create.
pub fn update_payload(title: Option<String>, status: Option<String>) -> Result<TodoPatch> {
    let mut errors = Vec::new();

    let title = match title {
        Some(title) => {
            if let Some(err) = check_title(&title) {
                errors.push(err);
            }
            Some(title)
        }
        None => None,
    };

    let status = match status {
        Some(raw) => match check_status(&raw) {
            Ok(status) => Some(status),
            Err(err) => {
                errors.push(err);
                None
            }
        },
        None => None,
    };

    if errors.is_empty() {
        Ok(TodoPatch { title, status })
    } else {
        Err(Error::validation(errors))
    }
}

fn check_title(title: &str) -> Option<FieldError> {
    let chars = title.chars().count();
    if chars == 0 || chars > TITLE_MAX_CHARS {
        Some(FieldError::new("title", TITLE_MESSAGE))
    } else {
        None
    }
}

fn check_status(raw: &str) -> std::result::Result<TodoStatus, FieldError> {
    TodoStatus::parse(raw).ok_or_else(|| FieldError::new("status", STATUS_MESSAGE))
}
