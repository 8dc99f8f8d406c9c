// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the ticket lifecycle: every (from, to) pair of statuses is
//! tried through the binary and checked against the allowed graph.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn hd() -> Command {
    let mut cmd = cargo_bin_cmd!("hd");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    hd().arg("init").current_dir(temp.path()).assert().success();
    temp
}

fn create_ticket(temp: &TempDir) -> String {
    let output = hd()
        .args(["new", "Printer jam", "-d", "Jams on every page", "-r", "Ana", "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Shortest path from `new` to each status.
fn path_to(status: &str) -> &'static [&'static str] {
    match status {
        "new" => &[],
        "in_progress" => &["in_progress"],
        "resolved" => &["in_progress", "resolved"],
        "closed" => &["in_progress", "resolved", "closed"],
        other => panic!("unknown status {other}"),
    }
}

fn ticket_at(temp: &TempDir, status: &str) -> String {
    let id = create_ticket(temp);
    for step in path_to(status) {
        hd().args(["transition", &id, step])
            .current_dir(temp.path())
            .assert()
            .success();
    }
    id
}

fn show(temp: &TempDir, id: &str) -> serde_json::Value {
    let output = hd()
        .args(["show", id, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[parameterized(
    new_to_in_progress = { "new", "in_progress" },
    in_progress_to_resolved = { "in_progress", "resolved" },
    in_progress_to_new = { "in_progress", "new" },
    resolved_to_closed = { "resolved", "closed" },
)]
fn allowed_transition_updates_status_and_appends_one_comment(from: &str, to: &str) {
    let temp = init_temp();
    let id = ticket_at(&temp, from);
    let before = show(&temp, &id);

    hd().args(["transition", &id, to])
        .current_dir(temp.path())
        .assert()
        .success();

    let after = show(&temp, &id);
    assert_eq!(after["status"], to);
    let before_len = before["comments"].as_array().unwrap().len();
    let comments = after["comments"].as_array().unwrap();
    assert_eq!(comments.len(), before_len + 1);
    assert_eq!(comments.last().unwrap()["author"], "System");
    assert!(after["updated_at"].as_str().unwrap() >= before["updated_at"].as_str().unwrap());
}

#[parameterized(
    new_to_new = { "new", "new" },
    new_to_resolved = { "new", "resolved" },
    new_to_closed = { "new", "closed" },
    in_progress_to_in_progress = { "in_progress", "in_progress" },
    in_progress_to_closed = { "in_progress", "closed" },
    resolved_to_new = { "resolved", "new" },
    resolved_to_in_progress = { "resolved", "in_progress" },
    resolved_to_resolved = { "resolved", "resolved" },
    closed_to_new = { "closed", "new" },
    closed_to_in_progress = { "closed", "in_progress" },
    closed_to_resolved = { "closed", "resolved" },
    closed_to_closed = { "closed", "closed" },
)]
fn disallowed_transition_leaves_ticket_unchanged(from: &str, to: &str) {
    let temp = init_temp();
    let id = ticket_at(&temp, from);
    let before = show(&temp, &id);

    hd().args(["transition", &id, to, "-m", "should not be stored"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("valid destinations"));

    assert_eq!(show(&temp, &id), before);
}

#[test]
fn note_is_stored_verbatim() {
    let temp = init_temp();
    let id = create_ticket(&temp);

    hd().args(["transition", &id, "in_progress", "-m", "  Assigned to Bob  "])
        .current_dir(temp.path())
        .assert()
        .success();

    let comments = show(&temp, &id)["comments"].clone();
    assert_eq!(comments[2]["content"], "  Assigned to Bob  ");
    assert_eq!(comments[2]["author"], "System");
}
