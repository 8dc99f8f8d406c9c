// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Response projections returned by the ticket service.
//!
//! These are the shapes callers see: enum values alongside their display
//! names and presentation colours, comments in order, and the statuses a
//! ticket may move to next.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ticket::{Comment, Priority, Status, Ticket};
use crate::transition::valid_destinations;

/// A comment as shown inside a ticket detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CommentView {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        CommentView {
            id: comment.id,
            author: comment.author.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// A status a ticket can move to next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Destination {
    pub status: Status,
    pub display_name: String,
}

impl From<Status> for Destination {
    fn from(status: Status) -> Self {
        Destination {
            status,
            display_name: status.display_name().to_string(),
        }
    }
}

/// Full ticket projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TicketDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub priority_display: String,
    pub requester: String,
    pub email: Option<String>,
    pub status: Status,
    pub status_display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentView>,
    pub valid_destinations: Vec<Destination>,
    pub priority_color: String,
    pub status_color: String,
}

impl TicketDetail {
    pub fn new(ticket: &Ticket, comments: &[Comment]) -> Self {
        TicketDetail {
            id: ticket.id,
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority,
            priority_display: ticket.priority.display_name().to_string(),
            requester: ticket.requester.clone(),
            email: ticket.email.clone(),
            status: ticket.status,
            status_display: ticket.status.display_name().to_string(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            comments: comments.iter().map(CommentView::from).collect(),
            valid_destinations: valid_destinations(ticket.status)
                .iter()
                .copied()
                .map(Destination::from)
                .collect(),
            priority_color: ticket.priority.color().to_string(),
            status_color: ticket.status.color().to_string(),
        }
    }
}

/// List projection: a ticket without its comments, plus how many it has.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TicketSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub priority_display: String,
    pub requester: String,
    pub email: Option<String>,
    pub status: Status,
    pub status_display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: usize,
    pub priority_color: String,
    pub status_color: String,
}

impl TicketSummary {
    pub fn new(ticket: &Ticket, comment_count: usize) -> Self {
        TicketSummary {
            id: ticket.id,
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority,
            priority_display: ticket.priority.display_name().to_string(),
            requester: ticket.requester.clone(),
            email: ticket.email.clone(),
            status: ticket.status,
            status_display: ticket.status.display_name().to_string(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            comment_count,
            priority_color: ticket.priority.color().to_string(),
            status_color: ticket.status.color().to_string(),
        }
    }
}

/// One row of a statistics breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Bucket<T> {
    pub value: T,
    pub display_name: String,
    pub count: usize,
}

/// Ticket counts per status and per priority.
///
/// Every status and priority appears, zero-filled, in lifecycle and
/// urgency order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Stats {
    pub total: usize,
    pub by_status: Vec<Bucket<Status>>,
    pub by_priority: Vec<Bucket<Priority>>,
}

impl Stats {
    /// Build zero-filled buckets from the counts the store reported.
    pub fn from_counts(
        total: usize,
        statuses: &[(Status, usize)],
        priorities: &[(Priority, usize)],
    ) -> Self {
        Stats {
            total,
            by_status: Status::ALL
                .iter()
                .map(|s| Bucket {
                    value: *s,
                    display_name: s.display_name().to_string(),
                    count: statuses
                        .iter()
                        .find(|(v, _)| v == s)
                        .map_or(0, |(_, n)| *n),
                })
                .collect(),
            by_priority: Priority::ALL
                .iter()
                .map(|p| Bucket {
                    value: *p,
                    display_name: p.display_name().to_string(),
                    count: priorities
                        .iter()
                        .find(|(v, _)| v == p)
                        .map_or(0, |(_, n)| *n),
                })
                .collect(),
        }
    }

    /// Count for one status.
    pub fn status_count(&self, status: Status) -> usize {
        self.by_status
            .iter()
            .find(|b| b.value == status)
            .map_or(0, |b| b.count)
    }

    /// Count for one priority.
    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority
            .iter()
            .find(|b| b.value == priority)
            .map_or(0, |b| b.count)
    }
}

/// Result of a successful status change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Transition {
    /// Human readable confirmation, e.g. `Ticket transitioned to Resolved`.
    pub message: String,
    pub previous_status: Status,
    pub ticket: TicketDetail,
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
