// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod comment;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod schema;
pub mod show;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod transition;

use std::path::PathBuf;

use hd_core::{Database, Status, TicketFilter, TicketService};

use crate::cli::FilterArgs;
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Helper to open the ticket service from the current context.
pub fn open_service() -> Result<(TicketService, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((TicketService::new(db), config, work_dir))
}

/// Build the ticket filter selected by `--status` and `--query`.
///
/// An unknown status name is rejected before any query runs.
pub(crate) fn build_filter(args: &FilterArgs, limit: Option<usize>) -> Result<TicketFilter> {
    let mut filter = TicketFilter::new();
    if let Some(status) = &args.status {
        filter = filter.with_status(status.parse::<Status>()?);
    }
    if let Some(query) = &args.query {
        filter = filter.with_search(query.as_str());
    }
    if let Some(limit) = limit {
        filter = filter.with_limit(limit);
    }
    Ok(filter)
}
