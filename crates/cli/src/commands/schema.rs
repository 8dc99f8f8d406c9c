// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use hd_core::{Stats, TicketDetail, Transition};
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;

use super::comment::CommentsOutputJson;
use super::list::ListOutputJson;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{json}");
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> schemars::schema::RootSchema {
    match cmd {
        SchemaCommand::Show => schema_for!(TicketDetail),
        SchemaCommand::List => schema_for!(ListOutputJson),
        SchemaCommand::Transition => schema_for!(Transition),
        SchemaCommand::Comments => schema_for!(CommentsOutputJson),
        SchemaCommand::Stats => schema_for!(Stats),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
