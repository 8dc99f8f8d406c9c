// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hd-core: Shared library for the hd helpdesk tracker
//!
//! This crate provides the ticket data model, the lifecycle state machine,
//! input validation, the SQLite store, and the service that ties them
//! together into atomic operations.

pub mod clock;
pub mod db;
pub mod error;
pub mod filter;
pub mod identity;
pub mod service;
pub mod ticket;
pub mod transition;
pub mod validate;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use db::Database;
pub use error::{Error, ErrorKind, Result};
pub use filter::TicketFilter;
pub use service::TicketService;
pub use ticket::{Comment, Priority, Status, Ticket, TicketInput, TicketUpdate, SYSTEM_AUTHOR};
pub use transition::{apply_transition, can_transition, valid_destinations};
pub use validate::FieldErrors;
pub use view::{Bucket, CommentView, Destination, Stats, TicketDetail, TicketSummary, Transition};
