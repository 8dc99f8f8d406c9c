// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hdrs - A support ticket tracker library.
//!
//! This crate provides the command line front end for the `hd` tool: argument
//! parsing, project configuration, text and JSON rendering, and the mapping
//! from ticket service errors to exit codes. Ticket storage and lifecycle
//! rules live in `hd-core`.
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.helpdesk/` directory, then open the service:
//!
//! ```rust,ignore
//! use hdrs::{find_work_dir, get_db_path, init_work_dir, Config};
//! use hd_core::{Database, TicketService};
//!
//! // Initialize a new project
//! let work_dir = init_work_dir(Path::new("."), None)?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let service = TicketService::new(Database::open(&get_db_path(&work_dir, &config))?);
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, OutputFormat, SchemaCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use hd_core::{TicketInput, TicketUpdate};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path, workspace } => commands::init::run(path, workspace),
        Command::New {
            title,
            description,
            requester,
            priority,
            email,
            output,
        } => commands::new::run(
            TicketInput {
                title,
                description,
                priority,
                requester,
                email,
                status: None,
            },
            output,
        ),
        Command::Show { id, output } => commands::show::run(id, output),
        Command::List {
            filter,
            limit,
            output,
        } => commands::list::run(filter, limit, output),
        Command::Transition {
            id,
            status,
            note,
            output,
        } => commands::transition::run(id, &status, note, output),
        Command::Comment {
            id,
            content,
            author,
            output,
        } => commands::comment::run(id, &content, author, output),
        Command::Comments { id, output } => commands::comment::run_list(id, output),
        Command::Edit {
            id,
            title,
            description,
            priority,
            requester,
            email,
            output,
        } => commands::edit::run(
            id,
            TicketUpdate {
                title,
                description,
                priority,
                requester,
                email,
            },
            output,
        ),
        Command::Delete { id } => commands::delete::run(id),
        Command::Stats { filter, output } => commands::stats::run(filter, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hd", &mut std::io::stdout());
            Ok(())
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
