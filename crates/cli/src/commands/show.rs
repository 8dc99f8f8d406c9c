// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, TicketService};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_ticket_details;
use crate::error::Result;

use super::open_service;

pub fn run(id: i64, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, id, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    id: i64,
    output: OutputFormat,
) -> Result<()> {
    let detail = service.get_ticket(id)?;

    match output {
        OutputFormat::Text => println!(
            "{}",
            format_ticket_details(&detail, colors::should_colorize())
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string(&detail)?),
        OutputFormat::Id => println!("{}", detail.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
