// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::ErrorKind;
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_OK: i32 = 0;
/// Exit code for store failures and anything unclassified.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for rejected input, including disallowed transitions.
pub const EXIT_INVALID: i32 = 2;
/// Exit code for a missing ticket or comment.
pub const EXIT_NOT_FOUND: i32 = 3;

/// All possible errors that can occur in the hdrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'hd init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("workspace not found: {0}\n  hint: the workspace directory must exist before it can hold the database")]
    WorkspaceNotFound(String),

    #[error(transparent)]
    Core(#[from] hd_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Core(e) => match e.kind() {
                ErrorKind::Validation | ErrorKind::InvalidTransition => EXIT_INVALID,
                ErrorKind::NotFound => EXIT_NOT_FOUND,
                ErrorKind::Failure => EXIT_FAILURE,
            },
            Error::NotInitialized
            | Error::AlreadyInitialized(_)
            | Error::WorkspaceNotFound(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::Config(_) => EXIT_FAILURE,
        }
    }

    /// Structured form written to stderr when JSON output was requested.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Error::Core(e) => match (e.kind(), e.field_errors()) {
                (_, Some(fields)) => serde_json::json!({
                    "error": "validation",
                    "fields": fields,
                }),
                (ErrorKind::Validation, None) => serde_json::json!({
                    "error": "validation",
                    "message": e.to_string(),
                }),
                (ErrorKind::NotFound, _) => serde_json::json!({
                    "error": "not_found",
                    "message": e.to_string(),
                }),
                (ErrorKind::InvalidTransition, _) => match e {
                    hd_core::Error::InvalidTransition {
                        current,
                        target,
                        valid,
                    } => serde_json::json!({
                        "error": "invalid_transition",
                        "message": e.to_string(),
                        "current": current,
                        "target": target,
                        "valid_destinations": valid,
                    }),
                    _ => serde_json::json!({
                        "error": "invalid_transition",
                        "message": e.to_string(),
                    }),
                },
                (ErrorKind::Failure, _) => serde_json::json!({
                    "error": "failure",
                    "message": e.to_string(),
                }),
            },
            other => serde_json::json!({
                "error": "failure",
                "message": other.to_string(),
            }),
        }
    }

    /// Human readable report, one field problem per line for validation errors.
    pub fn report(&self) -> String {
        match self {
            Error::Core(e) => match e.field_errors() {
                Some(fields) => {
                    let mut out = String::from("invalid input:");
                    for (field, messages) in fields.iter() {
                        for message in messages {
                            out.push_str(&format!("\n  {field}: {message}"));
                        }
                    }
                    out
                }
                None => e.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// A specialized Result type for hdrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
