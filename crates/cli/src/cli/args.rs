// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! Used with `#[command(flatten)]` so `list` and `stats` select tickets the
//! same way.

use clap::Args;

/// Ticket selection arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Only tickets with this status (new, in_progress, resolved, closed)
    #[arg(long, short)]
    pub status: Option<String>,

    /// Only tickets whose title, description or requester contains TEXT (case-insensitive)
    #[arg(long = "query", short = 'q', value_name = "TEXT")]
    pub query: Option<String>,
}
