// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, TicketService};

use crate::error::Result;

use super::open_service;

pub fn run(id: i64) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, id)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(service: &TicketService<C>, id: i64) -> Result<()> {
    let removed = service.delete_ticket(id)?;
    match removed {
        1 => println!("Deleted #{id} and 1 comment"),
        n => println!("Deleted #{id} and {n} comments"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
