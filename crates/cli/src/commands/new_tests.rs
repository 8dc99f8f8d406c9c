// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::run_impl;
use crate::cli::OutputFormat;
use crate::commands::testing::TestContext;
use crate::error::Error;
use hd_core::{Priority, Status, TicketFilter, TicketInput};
use yare::parameterized;

fn input(title: &str) -> TicketInput {
    TicketInput {
        title: title.to_string(),
        description: "The office printer jams on every page".to_string(),
        requester: "Ana".to_string(),
        ..TicketInput::default()
    }
}

fn only_ticket(ctx: &TestContext) -> hd_core::TicketSummary {
    let mut tickets = ctx.service.list_tickets(&TicketFilter::new()).unwrap();
    assert_eq!(tickets.len(), 1);
    tickets.remove(0)
}

#[parameterized(
    text = { OutputFormat::Text },
    json = { OutputFormat::Json },
    id = { OutputFormat::Id },
)]
fn creates_ticket_in_any_format(output: OutputFormat) {
    let ctx = TestContext::new();
    run_impl(&ctx.service, &input("Printer not working"), output).unwrap();

    let ticket = only_ticket(&ctx);
    assert_eq!(ticket.title, "Printer not working");
    assert_eq!(ticket.status, Status::New);
    assert_eq!(ticket.priority, Priority::Medium);
    assert_eq!(ticket.comment_count, 1);
}

#[test]
fn accepts_priority_alias() {
    let ctx = TestContext::new();
    let mut input = input("Printer not working");
    input.priority = Some("alta".to_string());
    run_impl(&ctx.service, &input, OutputFormat::Id).unwrap();

    assert_eq!(only_ticket(&ctx).priority, Priority::High);
}

#[test]
fn records_creation_comment() {
    let ctx = TestContext::new();
    run_impl(&ctx.service, &input("Printer not working"), OutputFormat::Text).unwrap();

    let id = only_ticket(&ctx).id;
    let comments = ctx.service.list_comments(id).unwrap();
    assert_eq!(comments[0].author, "System");
    assert_eq!(comments[0].content, "Ticket created by Ana");
}

#[test]
fn invalid_input_creates_nothing() {
    let ctx = TestContext::new();
    let mut input = input("Hey");
    input.email = Some("not-an-email".to_string());

    let err = run_impl(&ctx.service, &input, OutputFormat::Text).unwrap_err();
    let Error::Core(core) = &err else {
        unreachable!("expected core error, got {err:?}");
    };
    let fields = core.field_errors().unwrap();
    assert!(fields.contains("title"));
    assert!(fields.contains("email"));
    assert_eq!(err.exit_code(), 2);
    assert!(ctx.service.list_tickets(&TicketFilter::new()).unwrap().is_empty());
}
