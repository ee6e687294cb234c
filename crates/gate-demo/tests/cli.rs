//! Runs the `gate-demo` binary and checks what it prints and how it exits.
//!
//! The binary and these tests share one build of `gate`, so `gate::is_enabled` says whether the
//! binary's gates are on.

use std::process::{Command, Output};

fn demo(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_gate-demo")).args(args).output().unwrap()
}

fn stdout(out: &Output) -> String {
  String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
  String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn unknown_arg() {
  let out = demo(&["--bogus"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(stderr(&out).contains("unused arguments"));
}

#[test]
fn no_demo() {
  let out = demo(&[]);
  assert!(out.status.success());
  let got = stdout(&out);
  assert!(got.contains("No demo selected."));
  assert!(got.contains("usage:"));
}

#[test]
fn help() {
  let out = demo(&["--help"]);
  assert!(out.status.success());
  assert!(stdout(&out).starts_with("usage:"));
}

#[test]
fn enabled_banner() {
  let out = demo(&["--silent"]);
  let got = stdout(&out);
  assert_eq!(got.contains("The asserts will be running"), gate::is_enabled());
  assert_eq!(got.contains("The asserts are disabled"), !gate::is_enabled());
}

/// Tests that only mean something when the gates are off.
///
/// With the gates on, each of these returns at once and passes without checking anything.
mod disabled {
  use super::{demo, stderr, stdout};

  #[test]
  fn exiting_demos_finish() {
    if gate::is_enabled() {
      return;
    }
    for flag in ["--log-exit", "--exit"] {
      let out = demo(&[flag]);
      assert!(out.status.success());
      assert!(!stderr(&out).contains("assertion failure"));
    }
    let out = demo(&["--log-exit"]);
    assert!(stdout(&out).contains("summed to -2"));
  }

  #[test]
  fn silent_has_no_messages() {
    if gate::is_enabled() {
      return;
    }
    let out = demo(&["--silent"]);
    assert!(out.status.success());
    assert!(!stdout(&out).contains("overflows"));
  }
}

/// Tests that only mean something when the gates are on.
///
/// With the gates off, each of these returns at once and passes without checking anything.
mod enabled {
  use super::{demo, stderr, stdout};

  #[test]
  fn log_continues() {
    if !gate::is_enabled() {
      return;
    }
    let out = demo(&["--log"]);
    assert!(out.status.success());
    let err = stderr(&out);
    assert_eq!(err.matches("assertion failure").count(), 3);
    assert!(err.contains("assertion failure: found disallowed negative base -2"));
    assert!(err.contains("assertion failure: found disallowed negative exponent -4"));
    assert!(err.contains("assertion failure: 2^1024 overflows to inf"));
    assert_eq!(stdout(&out).matches("exponential value to").count(), 5);
  }

  #[test]
  fn silent_prints_overflow() {
    if !gate::is_enabled() {
      return;
    }
    let out = demo(&["--silent"]);
    assert!(out.status.success());
    let got = stdout(&out);
    assert!(got.contains(&format!("{} * 2 overflows to -2", i64::MAX)));
    assert!(got.contains(&format!("{} * 2 overflows to 2", -i64::MAX)));
    assert!(!stderr(&out).contains("assertion failure"));
  }

  #[test]
  fn log_exit_reports_and_exits() {
    if !gate::is_enabled() {
      return;
    }
    let out = demo(&["--log-exit"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains(&format!("assertion failure: {0} + {0} overflows to -2", i64::MAX)));
    assert!(err.contains("stack backtrace:"));
    assert!(!stdout(&out).contains("summed to -2"));
  }

  #[test]
  fn exit_prints_and_exits() {
    if !gate::is_enabled() {
      return;
    }
    let out = demo(&["--exit"]);
    assert!(!out.status.success());
    let got = stdout(&out);
    assert!(got.contains(&format!("{} - {} overflows to -2", i64::MAX, -i64::MAX)));
    assert!(!got.contains("subtracted to -2"));
    assert!(!stderr(&out).contains("assertion failure"));
  }
}
