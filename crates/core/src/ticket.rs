// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core ticket types for the helpdesk tracker.
//!
//! This module contains the fundamental data types: Ticket, Comment, Status
//! and Priority, plus the raw caller input used to create or edit tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Author name used for comments the system writes on its own.
pub const SYSTEM_AUTHOR: &str = "System";

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Status {
    /// Reported, nobody has picked it up yet. Initial state.
    New,
    /// Someone is working on it.
    InProgress,
    /// A fix or answer was delivered.
    Resolved,
    /// Final state; no further transitions.
    Closed,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 4] = [
        Status::New,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
        }
    }

    /// Human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }

    /// Presentation colour.
    pub fn color(&self) -> &'static str {
        match self {
            Status::New => "blue",
            Status::InProgress => "orange",
            Status::Resolved => "green",
            Status::Closed => "gray",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" | "nuevo" => Ok(Status::New),
            "in_progress" | "in-progress" | "en_proceso" => Ok(Status::InProgress),
            "resolved" | "resuelto" => Ok(Status::Resolved),
            "closed" | "cerrado" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of a ticket.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Presentation colour.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Low => "green",
            Priority::Medium => "orange",
            Priority::High => "red",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baja" => Ok(Priority::Low),
            "medium" | "media" => Ok(Priority::Medium),
            "high" | "alta" => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A trackable support request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned identifier (0 until inserted).
    pub id: i64,
    /// Short summary of the problem.
    pub title: String,
    /// Full description of the problem.
    pub description: String,
    pub priority: Priority,
    /// Name of the person who reported the problem.
    pub requester: String,
    /// Contact address of the requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Current lifecycle state. Changed only through the transition engine.
    pub status: Status,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new, not yet persisted ticket in the initial status.
    pub fn new(
        title: String,
        description: String,
        priority: Priority,
        requester: String,
        email: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id: 0,
            title,
            description,
            priority,
            requester,
            email,
            status: Status::New,
            created_at,
            updated_at: created_at,
        }
    }

    /// Refresh `updated_at`, never moving it before `created_at`.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at.max(self.created_at);
    }
}

/// A timestamped note attached to a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Comment {
    /// Store-assigned identifier (0 until inserted).
    pub id: i64,
    /// The ticket that owns this comment.
    pub ticket_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new, not yet persisted comment.
    pub fn new(ticket_id: i64, author: String, content: String, created_at: DateTime<Utc>) -> Self {
        Comment {
            id: 0,
            ticket_id,
            author,
            content,
            created_at,
        }
    }

    /// Creates an audit comment authored by the system identity.
    pub fn system(ticket_id: i64, content: String, created_at: DateTime<Utc>) -> Self {
        Comment::new(ticket_id, SYSTEM_AUTHOR.to_string(), content, created_at)
    }

    /// Returns true if the system wrote this comment.
    pub fn is_system(&self) -> bool {
        self.author == SYSTEM_AUTHOR
    }
}

/// Raw caller input for creating a ticket, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Option<String>,
    pub requester: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Ignored: new tickets always start in [`Status::New`].
    #[serde(default)]
    pub status: Option<String>,
}

/// Raw caller input for editing ticket fields. Absent fields are left alone.
///
/// Status is not editable here; it only changes through transitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub requester: Option<String>,
    /// `Some("")` clears the address.
    #[serde(default)]
    pub email: Option<String>,
}

impl TicketUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.requester.is_none()
            && self.email.is_none()
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
