// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `hd` binary with colors off and a fixed comment author.
pub fn hd() -> Command {
    let mut cmd = cargo_bin_cmd!("hd");
    cmd.env("NO_COLOR", "1")
        .env("HD_AUTHOR", "Agent Smith")
        .env_remove("HD_LOG");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    hd().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Helper to create a ticket and return its ID
pub fn create_ticket(temp: &TempDir, title: &str) -> String {
    create_ticket_with(temp, title, &[])
}

/// Helper to create a ticket with extra flags and return its ID
pub fn create_ticket_with(temp: &TempDir, title: &str, extra: &[&str]) -> String {
    let output = hd()
        .args(["new", title, "-d", "Something is broken on floor two", "-r", "Ana"])
        .args(extra)
        .args(["-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {output:?}");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Run `hd show ID -o json` and parse the result
pub fn show_json(temp: &TempDir, id: &str) -> serde_json::Value {
    let output = hd()
        .args(["show", id, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "show failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Move a ticket, asserting success
pub fn transition(temp: &TempDir, id: &str, status: &str) {
    hd().args(["transition", id, status])
        .current_dir(temp.path())
        .assert()
        .success();
}
