// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket service: the only writer of tickets and comments.
//!
//! Each mutating operation runs as one write transaction scoped to
//! read → validate → write. Audit comments are inserted inside the same
//! transaction as the change they record, so a failure anywhere leaves the
//! store exactly as it was.

use chrono::{DateTime, SubsecRound, Utc};

use crate::clock::{Clock, SystemClock};
use crate::db::Database;
use crate::error::{Error, Result};
use crate::filter::TicketFilter;
use crate::ticket::{Comment, Status, Ticket, TicketInput, TicketUpdate};
use crate::transition::apply_transition;
use crate::validate::{validate_comment, validate_ticket, validate_update};
use crate::view::{Stats, TicketDetail, TicketSummary, Transition};

/// Audit text recorded when a ticket is opened.
pub fn created_message(requester: &str) -> String {
    format!("Ticket created by {requester}")
}

/// Audit text recorded when a ticket changes status.
pub fn status_changed_message(status: Status) -> String {
    format!("Status changed to '{}'", status.display_name())
}

/// Audit text recorded when ticket fields are edited.
pub fn updated_message(fields: &[&str]) -> String {
    format!("Ticket updated: {}", fields.join(", "))
}

/// Ticket operations over a [`Database`].
pub struct TicketService<C: Clock = SystemClock> {
    db: Database,
    clock: C,
}

impl TicketService<SystemClock> {
    pub fn new(db: Database) -> Self {
        TicketService {
            db,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TicketService<C> {
    /// Create a service stamping records with `clock`.
    pub fn with_clock(db: Database, clock: C) -> Self {
        TicketService { db, clock }
    }

    /// The underlying store, for read-only inspection.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// The clock stamping new records.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current time at storage precision.
    fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(6)
    }

    /// Validate `input` and persist a new ticket with its creation audit comment.
    ///
    /// The ticket always starts as [`Status::New`].
    pub fn create_ticket(&self, input: &TicketInput) -> Result<TicketDetail> {
        let valid = validate_ticket(input)?;
        if let Some(status) = &input.status {
            tracing::debug!(status = %status, "ignoring caller-supplied status on create");
        }

        let now = self.now();
        let mut ticket = Ticket::new(
            valid.title,
            valid.description,
            valid.priority,
            valid.requester,
            valid.email,
            now,
        );

        let tx = self.db.begin_write()?;
        ticket.id = self.db.insert_ticket(&ticket)?;
        let mut audit = Comment::system(ticket.id, created_message(&ticket.requester), now);
        audit.id = self.db.insert_comment(&audit)?;
        tx.commit()?;

        tracing::info!(id = ticket.id, priority = %ticket.priority, "created ticket");
        Ok(TicketDetail::new(&ticket, &[audit]))
    }

    /// Full detail of one ticket.
    pub fn get_ticket(&self, id: i64) -> Result<TicketDetail> {
        tracing::debug!(id, "get ticket");
        let ticket = self.db.get_ticket(id)?;
        let comments = self.db.get_comments(id)?;
        Ok(TicketDetail::new(&ticket, &comments))
    }

    /// Tickets matching `filter`, newest first.
    pub fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<TicketSummary>> {
        tracing::debug!(?filter, "list tickets");
        let rows = self.db.list_tickets(filter)?;
        Ok(rows
            .iter()
            .map(|(ticket, count)| TicketSummary::new(ticket, *count))
            .collect())
    }

    /// Move a ticket to `target`, recording the change as an audit comment.
    ///
    /// A non-blank `note` is stored verbatim as a second system comment.
    /// The status update and both comments commit together or not at all.
    pub fn transition_ticket(
        &self,
        id: i64,
        target: Status,
        note: Option<&str>,
    ) -> Result<Transition> {
        let tx = self.db.begin_write()?;
        let mut ticket = self.db.get_ticket(id)?;

        let now = self.now();
        let previous = match apply_transition(&mut ticket, target, now) {
            Ok(previous) => previous,
            Err(e) => {
                tracing::warn!(id, from = %ticket.status, to = %target, "rejected transition");
                return Err(e);
            }
        };

        self.db
            .update_ticket_status(id, previous, ticket.status, ticket.updated_at)?;
        self.db
            .insert_comment(&Comment::system(id, status_changed_message(target), now))?;
        if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
            self.db
                .insert_comment(&Comment::system(id, note.to_string(), now))?;
        }
        let comments = self.db.get_comments(id)?;
        tx.commit()?;

        tracing::info!(id, from = %previous, to = %target, "transitioned ticket");
        Ok(Transition {
            message: format!("Ticket transitioned to {}", target.display_name()),
            previous_status: previous,
            ticket: TicketDetail::new(&ticket, &comments),
        })
    }

    /// Append a human comment. Status and `updated_at` are left alone.
    pub fn add_comment(&self, ticket_id: i64, author: &str, content: &str) -> Result<Comment> {
        let tx = self.db.begin_write()?;
        if !self.db.ticket_exists(ticket_id)? {
            return Err(Error::TicketNotFound(ticket_id));
        }
        let valid = validate_comment(author, content)?;

        let mut comment = Comment::new(ticket_id, valid.author, valid.content, self.now());
        comment.id = self.db.insert_comment(&comment)?;
        tx.commit()?;

        tracing::info!(ticket_id, id = comment.id, "added comment");
        Ok(comment)
    }

    /// A ticket's comments, oldest first.
    pub fn list_comments(&self, ticket_id: i64) -> Result<Vec<Comment>> {
        if !self.db.ticket_exists(ticket_id)? {
            return Err(Error::TicketNotFound(ticket_id));
        }
        self.db.get_comments(ticket_id)
    }

    /// One comment by id.
    pub fn get_comment(&self, id: i64) -> Result<Comment> {
        self.db.get_comment(id)
    }

    /// Comments across every ticket, or only `ticket`'s when given.
    ///
    /// Unlike [`TicketService::list_comments`], an unknown ticket yields an
    /// empty list.
    pub fn all_comments(&self, ticket: Option<i64>) -> Result<Vec<Comment>> {
        self.db.list_comments(ticket)
    }

    /// Counts per status and priority over the same tickets `list_tickets` returns.
    ///
    /// The filter's limit does not apply.
    pub fn stats(&self, filter: &TicketFilter) -> Result<Stats> {
        let tx = self.db.begin_read()?;
        let total = self.db.count_tickets(filter)?;
        let statuses = self.db.count_by_status(filter)?;
        let priorities = self.db.count_by_priority(filter)?;
        tx.commit()?;
        Ok(Stats::from_counts(total, &statuses, &priorities))
    }

    /// Edit ticket fields other than status, recording which ones changed.
    pub fn update_ticket(&self, id: i64, update: &TicketUpdate) -> Result<TicketDetail> {
        let valid = validate_update(update)?;

        let tx = self.db.begin_write()?;
        let mut ticket = self.db.get_ticket(id)?;
        let fields = valid.changed_fields();
        if let Some(title) = valid.title {
            ticket.title = title;
        }
        if let Some(description) = valid.description {
            ticket.description = description;
        }
        if let Some(priority) = valid.priority {
            ticket.priority = priority;
        }
        if let Some(requester) = valid.requester {
            ticket.requester = requester;
        }
        if let Some(email) = valid.email {
            ticket.email = email;
        }

        let now = self.now();
        ticket.touch(now);
        self.db.update_ticket_fields(&ticket)?;
        self.db
            .insert_comment(&Comment::system(id, updated_message(&fields), now))?;
        let comments = self.db.get_comments(id)?;
        tx.commit()?;

        tracing::info!(id, fields = ?fields, "updated ticket");
        Ok(TicketDetail::new(&ticket, &comments))
    }

    /// Delete a ticket and all of its comments. Returns how many comments went with it.
    pub fn delete_ticket(&self, id: i64) -> Result<usize> {
        let tx = self.db.begin_write()?;
        let removed = self.db.delete_ticket(id)?;
        tx.commit()?;

        tracing::info!(id, comments = removed, "deleted ticket");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
