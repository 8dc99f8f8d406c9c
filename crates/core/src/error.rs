// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hd-core operations.

use thiserror::Error;

use crate::ticket::Status;
use crate::validate::FieldErrors;

/// All possible errors that can occur in hd-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("ticket not found: #{0}")]
    TicketNotFound(i64),

    #[error("comment not found: #{0}")]
    CommentNotFound(i64),

    #[error(
        "cannot move ticket from '{}' to '{}'\n  hint: valid destinations: {}",
        current.display_name(),
        target.display_name(),
        format_destinations(valid)
    )]
    InvalidTransition {
        current: Status,
        target: Status,
        valid: Vec<Status>,
    },

    #[error("ticket #{id} changed concurrently: expected status '{expected}'")]
    StatusConflict { id: i64, expected: Status },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: new, in_progress, resolved, closed")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high")]
    InvalidPriority(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// Coarse classification used by request handlers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input was rejected; nothing was written.
    Validation,
    /// The referenced ticket or comment does not exist.
    NotFound,
    /// The requested status change is not allowed from the current status.
    InvalidTransition,
    /// Store or transaction failure; all writes of the unit were rolled back.
    Failure,
}

impl Error {
    /// Classify this error for response mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) | Error::InvalidStatus(_) | Error::InvalidPriority(_) => {
                ErrorKind::Validation
            }
            Error::TicketNotFound(_) | Error::CommentNotFound(_) => ErrorKind::NotFound,
            Error::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Error::StatusConflict { .. }
            | Error::Database(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::CorruptedData(_) => ErrorKind::Failure,
        }
    }

    /// Per-field messages when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Error::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

fn format_destinations(valid: &[Status]) -> String {
    if valid.is_empty() {
        return "none (closed is a final state)".to_string();
    }
    valid
        .iter()
        .map(|s| s.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A specialized Result type for hd-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
