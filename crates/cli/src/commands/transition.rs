// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, Status, TicketService};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::open_service;

pub fn run(id: i64, status: &str, note: Option<String>, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, id, status, note.as_deref(), output)
}

/// Internal implementation that accepts the service for testing.
///
/// The target name is parsed before the ticket is read, so an unknown
/// status never reaches the lifecycle check.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    id: i64,
    status: &str,
    note: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let target: Status = status.parse()?;
    let transition = service.transition_ticket(id, target, note)?;

    match output {
        OutputFormat::Text => println!(
            "#{}: {} (was {})",
            id,
            transition.message,
            transition.previous_status.display_name()
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string(&transition)?),
        OutputFormat::Id => println!("{id}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
