// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field-level normalization and validation of caller input.
//!
//! Every rule runs before anything is persisted. Failures are collected per
//! field instead of stopping at the first one, so a caller can show all
//! problems at once.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::identity::is_system;
use crate::ticket::{Priority, TicketInput, TicketUpdate, SYSTEM_AUTHOR};

pub const MIN_TITLE_LENGTH: usize = 5;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MIN_REQUESTER_LENGTH: usize = 2;
pub const MAX_REQUESTER_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MIN_COMMENT_LENGTH: usize = 3;
pub const MAX_AUTHOR_LENGTH: usize = 100;

/// Key used for problems that belong to no single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

// Hard-coded pattern, exercised by the validation tests.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one problem.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Error::Validation`.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(Error::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Ticket fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTicket {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub requester: String,
    pub email: Option<String>,
}

/// Edits that passed validation. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub requester: Option<String>,
    /// `Some(None)` clears the address.
    pub email: Option<Option<String>>,
}

impl ValidUpdate {
    /// Names of the fields this update touches, in display order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if self.requester.is_some() {
            fields.push("requester");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        fields
    }
}

/// Comment fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub author: String,
    pub content: String,
}

/// Trim `value` and check its length, recording problems under `field`.
fn check_text(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> String {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if trimmed.is_empty() {
        errors.add(field, format!("{label} cannot be empty."));
    } else if len < min {
        errors.add(field, format!("{label} must be at least {min} characters."));
    } else if let Some(max) = max.filter(|max| len > *max) {
        errors.add(field, format!("{label} must be at most {max} characters."));
    }
    trimmed.to_string()
}

fn check_title(errors: &mut FieldErrors, value: &str) -> String {
    check_text(
        errors,
        "title",
        "Title",
        value,
        MIN_TITLE_LENGTH,
        Some(MAX_TITLE_LENGTH),
    )
}

fn check_description(errors: &mut FieldErrors, value: &str) -> String {
    check_text(
        errors,
        "description",
        "Description",
        value,
        MIN_DESCRIPTION_LENGTH,
        None,
    )
}

fn check_requester(errors: &mut FieldErrors, value: &str) -> String {
    check_text(
        errors,
        "requester",
        "Requester name",
        value,
        MIN_REQUESTER_LENGTH,
        Some(MAX_REQUESTER_LENGTH),
    )
}

fn check_priority(errors: &mut FieldErrors, value: Option<&str>) -> Priority {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Priority::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            errors.add(
                "priority",
                format!("'{raw}' is not a valid priority. Choose low, medium or high."),
            );
            Priority::default()
        }),
    }
}

/// Blank input means "no address".
fn check_email(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;
    if !is_valid_email(trimmed) {
        errors.add("email", "Enter a valid email address.");
    }
    Some(trimmed.to_string())
}

/// Syntactic email check: one `@`, a sane local part, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_RE.is_match(email) {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, _)) => {
            !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
        }
        None => false,
    }
}

/// Validate and normalize ticket creation input.
///
/// Any caller-supplied status is ignored here; it never reaches the store.
pub fn validate_ticket(input: &TicketInput) -> Result<ValidTicket> {
    let mut errors = FieldErrors::new();
    let ticket = ValidTicket {
        title: check_title(&mut errors, &input.title),
        description: check_description(&mut errors, &input.description),
        priority: check_priority(&mut errors, input.priority.as_deref()),
        requester: check_requester(&mut errors, &input.requester),
        email: check_email(&mut errors, input.email.as_deref()),
    };
    errors.into_result(ticket)
}

/// Validate and normalize a partial edit. Only present fields are checked.
pub fn validate_update(update: &TicketUpdate) -> Result<ValidUpdate> {
    let mut errors = FieldErrors::new();
    if update.is_empty() {
        errors.add(NON_FIELD_ERRORS, "Provide at least one field to update.");
        return errors.into_result(ValidUpdate::default());
    }
    let valid = ValidUpdate {
        title: update.title.as_deref().map(|v| check_title(&mut errors, v)),
        description: update
            .description
            .as_deref()
            .map(|v| check_description(&mut errors, v)),
        priority: update
            .priority
            .as_deref()
            .map(|v| check_priority(&mut errors, Some(v))),
        requester: update
            .requester
            .as_deref()
            .map(|v| check_requester(&mut errors, v)),
        email: update
            .email
            .as_deref()
            .map(|v| check_email(&mut errors, Some(v))),
    };
    errors.into_result(valid)
}

/// Validate and normalize a human-authored comment.
///
/// The audit identity is refused as an author.
pub fn validate_comment(author: &str, content: &str) -> Result<ValidComment> {
    let mut errors = FieldErrors::new();
    let author = check_text(
        &mut errors,
        "author",
        "Author",
        author,
        1,
        Some(MAX_AUTHOR_LENGTH),
    );
    if is_system(&author) {
        errors.add(
            "author",
            format!("Author '{SYSTEM_AUTHOR}' is reserved for audit comments."),
        );
    }
    let content = check_text(
        &mut errors,
        "content",
        "Comment",
        content,
        MIN_COMMENT_LENGTH,
        None,
    );
    errors.into_result(ValidComment { author, content })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
