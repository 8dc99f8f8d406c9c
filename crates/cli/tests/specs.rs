// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust-based integration specs for the hd CLI.
//!
//! Run with: cargo test --test specs
//!
//! Each test walks one end-to-end support desk scenario through the binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "specs_prelude.rs"]
mod prelude;

use prelude::*;

const PRINTER: &[&str] = &[
    "Printer not working",
    "-d",
    "The office printer on floor 2 jams repeatedly",
    "-p",
    "alta",
    "-r",
    "Ana",
];

fn contents(ticket: &serde_json::Value) -> Vec<String> {
    ticket["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn smoke_test_hd_version() {
    Hd::new()
        .arg("--version")
        .output()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn smoke_test_hd_help() {
    Hd::new()
        .arg("--help")
        .output()
        .success()
        .stdout(predicates::str::contains("Usage:"))
        .stdout(predicates::str::contains("transition"));
}

#[test]
fn show_text_matches_layout() {
    let project = Project::new();
    let id = project.create_ticket(PRINTER);

    let output = project.hd().args(["show", &id]).run();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let head: Vec<&str> = stdout.lines().take(4).collect();
    similar_asserts::assert_eq!(
        head.join("\n"),
        format!("#{id} Printer not working\nStatus: New\nPriority: High\nRequester: Ana")
    );
}

#[test]
fn create_records_single_audit_comment() {
    let project = Project::new();
    let id = project.create_ticket(PRINTER);

    let ticket = project.json(&["show", &id]);
    assert_eq!(ticket["status"], "new");
    assert_eq!(ticket["priority"], "high");
    assert_eq!(ticket["priority_display"], "High");
    assert_eq!(ticket["priority_color"], "red");
    assert_eq!(contents(&ticket), vec!["Ticket created by Ana"]);
}

#[test]
fn skipping_ahead_lists_valid_destination() {
    let project = Project::new();
    let id = project.create_ticket(PRINTER);

    let (code, err) = project.json_error(&["transition", &id, "resuelto"]);
    assert_eq!(code, 2);
    assert_eq!(err["error"], "invalid_transition");
    assert_eq!(err["valid_destinations"], serde_json::json!(["in_progress"]));
    assert_eq!(project.json(&["show", &id])["status"], "new");
}

#[test]
fn transition_with_note_appends_two_comments() {
    let project = Project::new();
    let id = project.create_ticket(PRINTER);

    let result = project.json(&["transition", &id, "en_proceso", "-m", "Assigned to Bob"]);
    assert_eq!(result["ticket"]["status"], "in_progress");

    let ticket = project.json(&["show", &id]);
    let comments = contents(&ticket);
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[1], "Status changed to 'In Progress'");
    assert_eq!(comments[2], "Assigned to Bob");
}

#[test]
fn closed_is_final() {
    let project = Project::new();
    let id = project.create_ticket(PRINTER);
    for status in ["en_proceso", "resuelto", "cerrado"] {
        project.hd().args(["transition", &id, status]).output().success();
    }

    let ticket = project.json(&["show", &id]);
    assert_eq!(ticket["status"], "closed");
    assert_eq!(ticket["valid_destinations"], serde_json::json!([]));

    for status in ["new", "in_progress", "resolved", "closed"] {
        let (code, err) = project.json_error(&["transition", &id, status]);
        assert_eq!(code, 2);
        assert_eq!(err["valid_destinations"], serde_json::json!([]));
    }
}

#[test]
fn status_and_text_filters_combine() {
    let project = Project::new();
    let printer = project.create_ticket(PRINTER);
    let started = project.create_ticket(&[
        "Second printer down",
        "-d",
        "Paper tray is broken",
        "-r",
        "Luis",
    ]);
    project.create_ticket(&["VPN drops", "-d", "Disconnects every hour", "-r", "Marta"]);
    let by_requester = project.create_ticket(&[
        "Scanner broken",
        "-d",
        "Needs a new driver",
        "-r",
        "Printer Team",
    ]);
    project
        .hd()
        .args(["transition", &started, "in_progress"])
        .output()
        .success();

    let listed = project.json(&["list", "-s", "nuevo", "-q", "printer"]);
    let ids: Vec<String> = listed["tickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].to_string())
        .collect();
    assert_eq!(ids, vec![by_requester, printer]);
}
