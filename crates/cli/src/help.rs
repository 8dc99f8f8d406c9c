// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(color(colors::codes::HEADER))
        .usage(color(colors::codes::HEADER))
        .literal(color(colors::codes::LITERAL))
        .placeholder(color(colors::codes::CONTEXT))
        .valid(color(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let color = colors::should_colorize();
    let header = |text: &str| if color { colors::header(text) } else { text.to_string() };
    let row = |name: &str, about: &str| {
        let pad = " ".repeat(13usize.saturating_sub(name.len()));
        let name = if color { colors::literal(name) } else { name.to_string() };
        format!("  {name}{pad}{about}")
    };
    [
        header("Tickets:"),
        row("new", "Open a new ticket"),
        row("show", "Show a ticket with its comments"),
        row("list", "List tickets, newest first"),
        row("transition", "Move a ticket to another status (alias: mv)"),
        row("comment", "Add a comment to a ticket"),
        row("comments", "List comments"),
        row("edit", "Edit ticket fields"),
        row("delete", "Delete a ticket and its comments"),
        row("stats", "Count tickets per status and priority"),
        String::new(),
        header("Setup:"),
        row("init", "Initialize ticket tracker"),
        row("schema", "Output JSON Schema for commands"),
        row("completion", "Generate shell completions"),
    ]
    .join("\n")
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  hd init                                          Initialize tracker
  hd new \"Printer jam\" -d \"Jams on 2F\" -r Ana     Open a ticket
  hd list                                          List tickets
  hd transition <id> in_progress                   Start working on a ticket
  hd comment <id> \"Ordered toner\"                  Add a comment",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
