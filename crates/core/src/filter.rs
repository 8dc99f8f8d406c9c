// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket list filtering.
//!
//! A [`TicketFilter`] compiles to one SQL predicate that both the list view
//! and the statistics view query against, so the two always agree on the
//! base set of tickets.

use rusqlite::types::Value;

use crate::ticket::Status;

/// Columns searched by the free-text filter.
const SEARCH_COLUMNS: [&str; 3] = ["title", "description", "requester"];

/// Optional constraints on the ticket list. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Exact status match.
    pub status: Option<Status>,
    /// Case-insensitive substring matched against title, description or requester.
    pub search: Option<String>,
    /// Return at most this many tickets.
    pub limit: Option<usize>,
}

/// A SQL `WHERE` fragment with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Empty when the filter matches everything.
    pub sql: String,
    pub params: Vec<Value>,
}

impl Predicate {
    /// The fragment prefixed with `WHERE`, or an empty string.
    pub fn where_clause(&self) -> String {
        if self.sql.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.sql)
        }
    }
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to tickets whose text contains `text`.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The search term, or `None` when absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Build the predicate: status equality AND (title OR description OR requester contains term).
    ///
    /// Both sides are lowercased with Unicode rules, so `dañada` finds
    /// `IMPRESORA DAÑADA`. The term is matched literally; `%` and `_` are not wildcards.
    pub fn predicate(&self) -> Predicate {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(status) = self.status {
            conditions.push("status = ?".to_string());
            params.push(Value::Text(status.as_str().to_string()));
        }

        if let Some(term) = self.search_term() {
            let needle = term.to_lowercase();
            let ors = SEARCH_COLUMNS
                .iter()
                .map(|col| format!("instr(casefold({col}), ?) > 0"))
                .collect::<Vec<_>>()
                .join(" OR ");
            conditions.push(format!("({ors})"));
            for _ in SEARCH_COLUMNS {
                params.push(Value::Text(needle.clone()));
            }
        }

        Predicate {
            sql: conditions.join(" AND "),
            params,
        }
    }

    /// Returns true if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.search_term().is_none()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
