// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, TicketService, TicketSummary};
use schemars::JsonSchema;
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat};
use crate::colors;
use crate::display::format_ticket_line;
use crate::error::Result;

use super::{build_filter, open_service};

/// JSON output structure for the list command.
#[derive(Serialize, JsonSchema)]
pub(crate) struct ListOutputJson {
    /// Tickets matching the filters, newest first.
    pub tickets: Vec<TicketSummary>,
    /// Status filter that was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Search text that was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Maximum number of results requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

pub fn run(filter: FilterArgs, limit: Option<usize>, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, &filter, limit, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    args: &FilterArgs,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let filter = build_filter(args, limit)?;
    let tickets = service.list_tickets(&filter)?;

    match output {
        OutputFormat::Text => {
            if tickets.is_empty() {
                println!("No tickets found");
            }
            let color = colors::should_colorize();
            for ticket in &tickets {
                println!("{}", format_ticket_line(ticket, color));
            }
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                tickets,
                status: filter.status.map(|s| s.to_string()),
                query: filter.search_term().map(String::from),
                limit: filter.limit,
            };
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Id => {
            for ticket in &tickets {
                println!("{}", ticket.id);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
