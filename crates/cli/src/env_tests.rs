// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::Mutex;

// Serializes tests that touch process environment
pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn vars_constants() {
    assert_eq!(vars::HD_LOG, "HD_LOG");
    assert_eq!(vars::HD_AUTHOR, "HD_AUTHOR");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn log_filter_ignores_blank() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("HD_LOG", "  ");
    assert_eq!(log_filter(), None);
    std::env::set_var("HD_LOG", "hd_core=debug");
    assert_eq!(log_filter().as_deref(), Some("hd_core=debug"));
    std::env::remove_var("HD_LOG");
    assert_eq!(log_filter(), None);
}

#[test]
fn author_is_trimmed() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("HD_AUTHOR", " Bob ");
    assert_eq!(author().as_deref(), Some("Bob"));
    std::env::set_var("HD_AUTHOR", "");
    assert_eq!(author(), None);
    std::env::remove_var("HD_AUTHOR");
}

#[test]
fn no_color_only_for_one() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());
    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());
    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn force_color_only_for_one() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::remove_var("COLOR");
    assert!(!force_color());
    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}
