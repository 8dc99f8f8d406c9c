// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default author detection for human comments.

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use std::process::Command;

use crate::ticket::SYSTEM_AUTHOR;

/// Name used when nothing better can be found.
pub const FALLBACK_AUTHOR: &str = "Support";

/// Returns the author to record on a human comment.
///
/// Resolution order:
/// 1. The configured author, if non-blank
/// 2. Git config user.name
/// 3. Unix username from USER or LOGNAME (if not a service account)
/// 4. [`FALLBACK_AUTHOR`]
///
/// A detected name that collides with [`SYSTEM_AUTHOR`] is skipped so human
/// comments never look like audit entries.
pub fn default_author(configured: Option<&str>) -> String {
    if let Some(name) = configured
        .map(str::trim)
        .filter(|name| !name.is_empty() && !is_system(name))
    {
        return name.to_string();
    }

    git_user_name()
        .filter(|name| !is_system(name))
        .or_else(|| unix_username().filter(|name| !is_service_account(name)))
        .unwrap_or_else(|| FALLBACK_AUTHOR.to_string())
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn unix_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|s| !s.is_empty())
}

/// True if `name` is the identity reserved for audit comments.
pub(crate) fn is_system(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(SYSTEM_AUTHOR)
}

fn is_service_account(name: &str) -> bool {
    is_system(name)
        || matches!(
            name.to_lowercase().as_str(),
            "root" | "administrator" | "admin" | "daemon" | "nobody"
        )
}
