// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");
}

fn disable_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    disable_color();
    assert_eq!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    force_color();
    assert_ne!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn header_produces_ansi_when_color_forced() {
    force_color();
    let result = header("nightly");
    assert!(result.starts_with("\x1b[38;5;74m"), "expected ANSI header color");
    assert!(result.ends_with("\x1b[0m"), "expected ANSI reset");
    assert!(result.contains("nightly"));
}

#[test]
#[serial]
fn muted_and_context_use_their_codes() {
    force_color();
    assert!(muted("x").contains("\x1b[38;5;240m"));
    assert!(context("x").contains("\x1b[38;5;245m"));
}

#[test]
#[serial]
fn no_color_leaves_text_plain() {
    disable_color();
    assert_eq!(header("nightly"), "nightly");
    assert_eq!(muted("/jobs"), "/jobs");
    assert_eq!(context("status:"), "status:");
}
