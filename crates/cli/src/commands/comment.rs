// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::identity::default_author;
use hd_core::{Clock, Comment, TicketService};
use schemars::JsonSchema;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_comment_entry;
use crate::env;
use crate::error::Result;

use super::open_service;

/// JSON output structure for the comments command.
#[derive(Serialize, JsonSchema)]
pub(crate) struct CommentsOutputJson {
    /// Ticket the comments belong to, absent when listing every ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    /// Comments, oldest first.
    pub comments: Vec<Comment>,
}

/// Pick the author for a human comment.
///
/// Resolution order: `--author`, `HD_AUTHOR`, the configured author, then
/// the detected user name.
pub(crate) fn resolve_author(flag: Option<String>, config: &Config) -> String {
    flag.or_else(env::author)
        .unwrap_or_else(|| default_author(config.author.as_deref()))
}

pub fn run(id: i64, content: &str, author: Option<String>, output: OutputFormat) -> Result<()> {
    let (service, config, _) = open_service()?;
    let author = resolve_author(author, &config);
    run_impl(&service, id, &author, content, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<C: Clock>(
    service: &TicketService<C>,
    id: i64,
    author: &str,
    content: &str,
    output: OutputFormat,
) -> Result<()> {
    let comment = service.add_comment(id, author, content)?;

    match output {
        OutputFormat::Text => println!("Added comment to #{} as {}", id, comment.author),
        OutputFormat::Json => println!("{}", serde_json::to_string(&comment)?),
        OutputFormat::Id => println!("{}", comment.id),
    }
    Ok(())
}

pub fn run_list(id: Option<i64>, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    list_impl(&service, id, output)
}

/// List one ticket's comments (the ticket must exist) or every comment.
pub(crate) fn list_impl<C: Clock>(
    service: &TicketService<C>,
    id: Option<i64>,
    output: OutputFormat,
) -> Result<()> {
    let comments = match id {
        Some(id) => service.list_comments(id)?,
        None => service.all_comments(None)?,
    };

    match output {
        OutputFormat::Text => {
            for (i, comment) in comments.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                for line in format_comment_entry(comment) {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            let json = CommentsOutputJson {
                ticket_id: id,
                comments,
            };
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Id => {
            for comment in &comments {
                println!("{}", comment.id);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
