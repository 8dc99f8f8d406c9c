// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{Clock, TicketService};

use crate::cli::{FilterArgs, OutputFormat};
use crate::display::format_stats;
use crate::error::Result;

use super::{build_filter, open_service};

pub fn run(filter: FilterArgs, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, &filter, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    args: &FilterArgs,
    output: OutputFormat,
) -> Result<()> {
    let stats = service.stats(&build_filter(args, None)?)?;

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&stats)?),
        OutputFormat::Text | OutputFormat::Id => println!("{}", format_stats(&stats)),
    }
    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
