// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, TicketInput, TicketService};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::open_service;

pub fn run(input: TicketInput, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, &input, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    input: &TicketInput,
    output: OutputFormat,
) -> Result<()> {
    let detail = service.create_ticket(input)?;

    match output {
        OutputFormat::Text => println!("Created #{}: {}", detail.id, detail.title),
        OutputFormat::Json => println!("{}", serde_json::to_string(&detail)?),
        OutputFormat::Id => println!("{}", detail.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
