//! Error types for tasklite

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Todo not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Error::Validation(errors)
    }

    /// Shorthand for a single-field validation failure.
    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Validation(vec![FieldError::new(field, msg)])
    }
}

/// A single entry in the wire-level `errors` array.
///
/// Validation failures carry the offending field; other failures (such as
/// a missing todo) carry only the message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            field: Some(field.into()),
        }
    }

    pub fn bare(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            field: None,
        }
    }
}
