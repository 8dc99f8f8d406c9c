// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `hd completion`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn hd() -> Command {
    cargo_bin_cmd!("hd")
}

#[yare::parameterized(
    bash = { "bash", "complete" },
    zsh = { "zsh", "#compdef hd" },
    fish = { "fish", "complete -c hd" },
)]
fn completion_generates_shell_script(shell: &str, marker: &str) {
    let output = hd().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(marker), "{shell} script lacks {marker:?}");
}

#[test]
fn completion_mentions_subcommands() {
    let output = hd().args(["completion", "bash"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in ["new", "show", "list", "transition", "comment", "stats"] {
        assert!(stdout.contains(name), "bash completion lacks {name}");
    }
}

#[test]
fn completion_needs_no_work_dir() {
    let temp = tempfile::TempDir::new().unwrap();
    hd().args(["completion", "zsh"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn completion_without_shell_fails() {
    hd().arg("completion").assert().failure();
}

#[test]
fn completion_invalid_shell_fails() {
    hd().args(["completion", "invalid_shell"]).assert().failure();
}
