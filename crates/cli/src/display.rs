// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use hd_core::{Comment, CommentView, Stats, TicketDetail, TicketSummary};

use crate::colors::paint;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Wrap text at word boundaries if it's a single line.
///
/// Multi-line content is returned as-is to preserve user formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Format a single comment with metadata line and indented content.
///
/// ```text
///   2024-01-10 10:30  Ana
///     Content goes here.
/// ```
pub fn format_comment(comment: &CommentView) -> Vec<String> {
    let mut lines = vec![format!(
        "  {}  {}",
        timestamp(comment.created_at),
        comment.author
    )];
    for line in wrap_text(&comment.content, WRAP_WIDTH).lines() {
        lines.push(format!("    {line}"));
    }
    lines
}

/// Format a comment for `hd comments` listings, prefixed by its ticket.
pub fn format_comment_entry(comment: &Comment) -> Vec<String> {
    let mut lines = vec![format!(
        "#{} {}  {}",
        comment.ticket_id,
        timestamp(comment.created_at),
        comment.author
    )];
    for line in wrap_text(&comment.content, WRAP_WIDTH).lines() {
        lines.push(format!("    {line}"));
    }
    lines
}

/// Format a single ticket line for list output.
pub fn format_ticket_line(ticket: &TicketSummary, color: bool) -> String {
    let comments = match ticket.comment_count {
        1 => "1 comment".to_string(),
        n => format!("{n} comments"),
    };
    format!(
        "- #{} ({}) [{}] {} ({}, {})",
        ticket.id,
        paint(&ticket.status_display, &ticket.status_color, color),
        paint(&ticket.priority_display, &ticket.priority_color, color),
        ticket.title,
        ticket.requester,
        comments
    )
}

/// Format ticket details for the show command.
pub fn format_ticket_details(ticket: &TicketDetail, color: bool) -> String {
    let mut output = vec![
        format!("#{} {}", ticket.id, ticket.title),
        format!(
            "Status: {}",
            paint(&ticket.status_display, &ticket.status_color, color)
        ),
        format!(
            "Priority: {}",
            paint(&ticket.priority_display, &ticket.priority_color, color)
        ),
    ];
    match &ticket.email {
        Some(email) => output.push(format!("Requester: {} <{}>", ticket.requester, email)),
        None => output.push(format!("Requester: {}", ticket.requester)),
    }
    output.push(format!("Created: {}", timestamp(ticket.created_at)));
    output.push(format!("Updated: {}", timestamp(ticket.updated_at)));

    output.push(String::new());
    output.push("Description:".to_string());
    for line in wrap_text(&ticket.description, WRAP_WIDTH).lines() {
        output.push(format!("    {line}"));
    }

    if !ticket.comments.is_empty() {
        output.push(String::new());
        output.push("Comments:".to_string());
        for (i, comment) in ticket.comments.iter().enumerate() {
            if i > 0 {
                output.push(String::new());
            }
            output.extend(format_comment(comment));
        }
    }

    output.push(String::new());
    if ticket.valid_destinations.is_empty() {
        output.push("Next: none (closed is a final state)".to_string());
    } else {
        let next: Vec<String> = ticket
            .valid_destinations
            .iter()
            .map(|d| format!("{} ({})", d.status, d.display_name))
            .collect();
        output.push(format!("Next: {}", next.join(", ")));
    }

    output.join("\n")
}

/// Format the statistics breakdown.
pub fn format_stats(stats: &Stats) -> String {
    let width = stats
        .by_status
        .iter()
        .map(|b| b.display_name.len())
        .chain(stats.by_priority.iter().map(|b| b.display_name.len()))
        .max()
        .unwrap_or(0);

    let mut output = vec![format!("Total: {}", stats.total), String::new()];
    output.push("By status:".to_string());
    for bucket in &stats.by_status {
        output.push(format!(
            "  {:<width$}  {}",
            bucket.display_name, bucket.count
        ));
    }
    output.push(String::new());
    output.push("By priority:".to_string());
    for bucket in &stats.by_priority {
        output.push(format!(
            "  {:<width$}  {}",
            bucket.display_name, bucket.count
        ));
    }
    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
