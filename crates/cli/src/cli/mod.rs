// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::FilterArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "hd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A support ticket tracker with a fixed lifecycle and an audit trail")]
#[command(
    long_about = "A support ticket tracker with a fixed lifecycle and an audit trail.\n\n\
    Tickets move new -> in_progress -> resolved -> closed (with in_progress -> new for rework).\n\
    Every creation and status change is recorded as a System comment."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if hd was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Tickets
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a new ticket
    #[command(after_help = colors::examples("\
Examples:
  hd new \"Printer not working\" -d \"Jams on floor 2\" -r Ana       Open a ticket
  hd new \"VPN drops\" -d \"Every 10 minutes\" -r Luis -p high     Open a high priority ticket
  hd new \"Laptop slow\" -d \"Since the update\" -r Marta -o id    Print only the new ID"))]
    New {
        /// Short summary (at least 5 characters)
        title: String,

        /// Full description of the problem (at least 10 characters)
        #[arg(long, short)]
        description: String,

        /// Name of the person reporting the problem
        #[arg(long, short)]
        requester: String,

        /// Priority: low, medium (default) or high
        #[arg(long, short)]
        priority: Option<String>,

        /// Contact email of the requester
        #[arg(long, short)]
        email: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a ticket with its comments and next possible statuses
    Show {
        /// Ticket ID
        id: i64,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List tickets, newest first
    #[command(after_help = colors::examples("\
Examples:
  hd list                      All tickets
  hd list -s new -q printer    New tickets mentioning printer
  hd list -n 10 -o json        Latest ten tickets as JSON"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Maximum number of tickets
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Move a ticket to another status
    #[command(
        visible_alias = "mv",
        after_help = colors::examples("\
Examples:
  hd transition 4 in_progress -m \"Assigned to Bob\"    Start work with a note
  hd transition 4 resolved                            Mark as resolved
  hd mv 4 closed                                      Close a resolved ticket

Statuses:
  Flow: new -> in_progress -> resolved -> closed
  Rework: in_progress -> new")
    )]
    Transition {
        /// Ticket ID
        id: i64,

        /// Target status
        status: String,

        /// Note recorded as a separate comment
        #[arg(long = "note", short = 'm')]
        note: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a comment to a ticket
    Comment {
        /// Ticket ID
        id: i64,

        /// Comment text (at least 3 characters)
        content: String,

        /// Comment author (defaults to HD_AUTHOR, the configured author, then your user name)
        #[arg(long, short)]
        author: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List comments of one ticket, or of all tickets
    Comments {
        /// Ticket ID (all tickets when omitted)
        id: Option<i64>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit ticket fields (status only changes through transition)
    #[command(after_help = colors::examples("\
Examples:
  hd edit 4 --priority high                  Raise priority
  hd edit 4 --title \"Printer jams on 2F\"     Rename
  hd edit 4 --email \"\"                       Clear the email"))]
    Edit {
        /// Ticket ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// New requester name
        #[arg(long)]
        requester: Option<String>,

        /// New email (empty to clear)
        #[arg(long)]
        email: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete a ticket and all of its comments
    Delete {
        /// Ticket ID
        id: i64,
    },

    /// Count tickets per status and priority
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize the ticket tracker in the current directory (or specified path)
    Init {
        /// Path to initialize (defaults to current directory)
        path: Option<String>,

        /// Store the database in this existing directory instead of .helpdesk/
        #[arg(long)]
        workspace: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  hd schema show     Output schema for 'hd show <id> -o json'
  hd schema stats    Output schema for 'hd stats -o json'")
    )]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'hd show' JSON output
    Show,
    /// Output JSON Schema for 'hd list' JSON output
    List,
    /// Output JSON Schema for 'hd transition' JSON output
    Transition,
    /// Output JSON Schema for 'hd comments' JSON output
    Comments,
    /// Output JSON Schema for 'hd stats' JSON output
    Stats,
}

impl Command {
    /// Output format requested by this command, for error rendering.
    pub fn output(&self) -> OutputFormat {
        match self {
            Command::New { output, .. }
            | Command::Show { output, .. }
            | Command::List { output, .. }
            | Command::Transition { output, .. }
            | Command::Comment { output, .. }
            | Command::Comments { output, .. }
            | Command::Edit { output, .. }
            | Command::Stats { output, .. } => *output,
            Command::Delete { .. }
            | Command::Init { .. }
            | Command::Completion { .. }
            | Command::Schema(_) => OutputFormat::Text,
        }
    }
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
