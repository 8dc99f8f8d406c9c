// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `hd list` and `hd stats` selecting the same tickets.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
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

fn json(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = hd()
        .args(args)
        .args(["-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{args:?} failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Four tickets: two printer tickets (one in progress), a VPN ticket, and a
/// ticket that only mentions "percent" literally.
fn seeded() -> TempDir {
    let temp = init_temp();
    let tickets: [[&str; 5]; 4] = [
        ["Printer jam", "-d", "Jams on every page", "-r", "Ana"],
        ["Printer toner", "-d", "Toner is almost empty", "-r", "Luis"],
        ["VPN drops", "-d", "Disconnects every hour", "-r", "Marta"],
        ["Quota at 100%", "-d", "Mailbox is 100% full", "-r", "Bob"],
    ];
    for fields in tickets {
        hd().arg("new")
            .args(fields)
            .current_dir(temp.path())
            .assert()
            .success();
    }
    let listed = json(&temp, &["list", "-q", "toner"]);
    let toner = listed["tickets"][0]["id"].to_string();
    hd().args(["transition", &toner, "in_progress"])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

#[parameterized(
    everything = { &[], 4 },
    status_only = { &["-s", "new"], 3 },
    status_alias = { &["-s", "en_proceso"], 1 },
    query_only = { &["-q", "printer"], 2 },
    query_case_insensitive = { &["-q", "PrInTeR"], 2 },
    query_matches_description = { &["-q", "mailbox"], 1 },
    query_matches_requester = { &["-q", "marta"], 1 },
    both = { &["-s", "new", "-q", "printer"], 1 },
    percent_is_literal = { &["-q", "100%"], 1 },
    underscore_is_literal = { &["-q", "_"], 0 },
    blank_query_ignored = { &["-q", "   "], 4 },
)]
fn stats_total_equals_list_length(filters: &[&str], expected: usize) {
    let temp = seeded();

    let mut list_args = vec!["list"];
    list_args.extend_from_slice(filters);
    let mut stats_args = vec!["stats"];
    stats_args.extend_from_slice(filters);

    let listed = json(&temp, &list_args);
    let stats = json(&temp, &stats_args);

    assert_eq!(listed["tickets"].as_array().unwrap().len(), expected);
    assert_eq!(stats["total"], expected);
    let status_sum: u64 = stats["by_status"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .sum();
    assert_eq!(status_sum as usize, expected);
}

#[test]
fn list_is_newest_first() {
    let temp = seeded();
    let listed = json(&temp, &["list"]);
    let titles: Vec<&str> = listed["tickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();

    assert_eq!(
        titles,
        vec!["Quota at 100%", "VPN drops", "Printer toner", "Printer jam"]
    );
}

#[test]
fn stats_buckets_are_complete_and_ordered() {
    let temp = seeded();
    let stats = json(&temp, &["stats"]);

    let statuses: Vec<&str> = stats["by_status"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["value"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["new", "in_progress", "resolved", "closed"]);
    let priorities: Vec<&str> = stats["by_priority"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["display_name"].as_str().unwrap())
        .collect();
    assert_eq!(priorities, vec!["Low", "Medium", "High"]);
    assert_eq!(stats["by_priority"][1]["count"], 4);
}
