// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and ticket output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    // Presentation colours for priorities and statuses
    pub const BLUE: u8 = 33;
    pub const GREEN: u8 = 35;
    pub const ORANGE: u8 = 208;
    pub const RED: u8 = 160;
    pub const GRAY: u8 = 244;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn wrap(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    wrap(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    wrap(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    wrap(codes::CONTEXT, text)
}

/// 256-color code for a named presentation colour.
pub fn named_code(name: &str) -> Option<u8> {
    match name {
        "blue" => Some(codes::BLUE),
        "green" => Some(codes::GREEN),
        "orange" | "yellow" => Some(codes::ORANGE),
        "red" => Some(codes::RED),
        "gray" | "grey" => Some(codes::GRAY),
        _ => None,
    }
}

/// Paint `text` in the named colour when `enabled`. Unknown names leave it plain.
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    match named_code(color) {
        Some(code) if enabled => wrap(code, text),
        _ => text.to_string(),
    }
}

/// Colorize an examples help block.
///
/// Lines ending with `:` become headers; in `  hd cmd args    Description`
/// lines the command part is highlighted as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => format!(
                    "{indent}{}{}",
                    literal(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
