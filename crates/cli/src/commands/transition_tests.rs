// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::run_impl;
use crate::cli::OutputFormat;
use crate::commands::testing::TestContext;
use hd_core::Status;
use yare::parameterized;

fn contents(ctx: &TestContext, id: i64) -> Vec<String> {
    ctx.service
        .list_comments(id)
        .unwrap()
        .into_iter()
        .map(|c| c.content)
        .collect()
}

#[test]
fn walks_full_lifecycle() {
    let ctx = TestContext::new();
    let id = ctx.create_ticket("Printer jam");

    for status in ["in_progress", "resolved", "closed"] {
        run_impl(&ctx.service, id, status, None, OutputFormat::Text).unwrap();
        ctx.tick();
    }

    assert_eq!(ctx.status_of(id), Status::Closed);
    assert_eq!(
        contents(&ctx, id),
        vec![
            "Ticket created by Ana",
            "Status changed to 'In Progress'",
            "Status changed to 'Resolved'",
            "Status changed to 'Closed'",
        ]
    );
}

#[test]
fn note_is_recorded_after_status_comment() {
    let ctx = TestContext::new();
    let id = ctx.create_ticket("Printer jam");

    run_impl(
        &ctx.service,
        id,
        "en_proceso",
        Some("Assigned to Bob"),
        OutputFormat::Json,
    )
    .unwrap();

    assert_eq!(
        contents(&ctx, id),
        vec![
            "Ticket created by Ana",
            "Status changed to 'In Progress'",
            "Assigned to Bob",
        ]
    );
}

#[test]
fn blank_note_is_skipped() {
    let ctx = TestContext::new();
    let id = ctx.create_ticket("Printer jam");

    run_impl(&ctx.service, id, "in_progress", Some("   "), OutputFormat::Id).unwrap();

    assert_eq!(contents(&ctx, id).len(), 2);
}

#[test]
fn rework_path_returns_to_new() {
    let ctx = TestContext::new();
    let id = ctx.create_ticket("Printer jam");
    ctx.move_to(id, Status::InProgress);

    run_impl(&ctx.service, id, "new", None, OutputFormat::Text).unwrap();

    assert_eq!(ctx.status_of(id), Status::New);
}

#[parameterized(
    skip_ahead = { Status::New, "resolved" },
    same_status = { Status::New, "new" },
    back_from_resolved = { Status::Resolved, "in_progress" },
    from_closed = { Status::Closed, "new" },
)]
fn disallowed_transition_changes_nothing(start: Status, target: &str) {
    let ctx = TestContext::new();
    let id = ctx.create_ticket("Printer jam");
    ctx.move_to(id, start);
    let before = ctx.service.get_ticket(id).unwrap();

    let err = run_impl(&ctx.service, id, target, Some("note"), OutputFormat::Text).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().starts_with("cannot move ticket from"));
    assert_eq!(ctx.service.get_ticket(id).unwrap(), before);
}

#[test]
fn unknown_status_is_validation_error() {
    let ctx = TestContext::new();
    let id = ctx.create_ticket("Printer jam");

    let err = run_impl(&ctx.service, id, "done", None, OutputFormat::Text).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert_eq!(ctx.status_of(id), Status::New);
}

#[test]
fn missing_ticket_is_not_found() {
    let ctx = TestContext::new();

    let err = run_impl(&ctx.service, 99, "in_progress", None, OutputFormat::Text).unwrap_err();

    assert_eq!(err.exit_code(), 3);
}
