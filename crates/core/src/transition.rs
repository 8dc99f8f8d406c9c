// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket lifecycle state machine.
//!
//! The allowed moves are a fixed data table:
//!
//! ```text
//! new ──▶ in_progress ──▶ resolved ──▶ closed
//!  ▲           │
//!  └───────────┘  (rework)
//! ```
//!
//! There is no way back once a ticket is resolved, and `closed` is final.
//! No status lists itself, so moving a ticket to its current status is rejected.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::ticket::{Status, Ticket};

/// Permitted destinations for each status.
const TRANSITIONS: [(Status, &[Status]); 4] = [
    (Status::New, &[Status::InProgress]),
    (Status::InProgress, &[Status::Resolved, Status::New]),
    (Status::Resolved, &[Status::Closed]),
    (Status::Closed, &[]),
];

/// Returns the statuses reachable in one transition from `current`.
pub fn valid_destinations(current: Status) -> &'static [Status] {
    TRANSITIONS
        .iter()
        .find(|(from, _)| *from == current)
        .map_or(&[], |(_, targets)| *targets)
}

/// Returns true iff `target` is a permitted destination from `current`.
pub fn can_transition(current: Status, target: Status) -> bool {
    valid_destinations(current).contains(&target)
}

/// Returns true if no transition leaves `status`.
pub fn is_terminal(status: Status) -> bool {
    valid_destinations(status).is_empty()
}

/// Move `ticket` to `target`, refreshing `updated_at`.
///
/// This is the only code path that changes a ticket's status. Returns the
/// status the ticket had before the move.
pub fn apply_transition(ticket: &mut Ticket, target: Status, at: DateTime<Utc>) -> Result<Status> {
    let current = ticket.status;
    if !can_transition(current, target) {
        return Err(Error::InvalidTransition {
            current,
            target,
            valid: valid_destinations(current).to_vec(),
        });
    }
    ticket.status = target;
    ticket.touch(at);
    Ok(current)
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
