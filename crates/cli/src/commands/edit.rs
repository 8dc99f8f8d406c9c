// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, TicketService, TicketUpdate};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::open_service;

pub fn run(id: i64, update: TicketUpdate, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, id, &update, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    id: i64,
    update: &TicketUpdate,
    output: OutputFormat,
) -> Result<()> {
    let detail = service.update_ticket(id, update)?;

    match output {
        OutputFormat::Text => {
            // The audit comment just written names the changed fields.
            match detail.comments.last() {
                Some(comment) => println!("#{}: {}", detail.id, comment.content),
                None => println!("Updated #{}", detail.id),
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&detail)?),
        OutputFormat::Id => println!("{}", detail.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
