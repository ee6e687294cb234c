//! Runtime assertions that only run when the `asserts` feature is enabled.
//!
//! Each gate takes a closure. With the feature off (the default) the closure is never called and
//! the gate compiles to nothing. With it on, the closure runs and a reported failure is handled
//! according to the gate:
//!
//! - [`run`]: run the action, nothing more.
//! - [`run_or_exit`]: exit the process on failure, silently.
//! - [`run_or_log`]: write the failure and a backtrace to stderr, then continue.
//! - [`run_or_log_exit`]: write the failure and a backtrace to stderr, then exit.
//!
//! Downstream crates usually forward the switch with a feature of their own:
//!
//! ```toml
//! [features]
//! asserts = ["gate/asserts"]
//! ```

mod outcome;


pub use outcome::{Failure, Outcome};

use std::backtrace::Backtrace;
use std::io::{self, Write};

/// Whether the gates call their closures. Decided when this crate is compiled.
pub const ENABLED: bool = cfg!(feature = "asserts");

/// The exit code used by [`run_or_exit`] and [`run_or_log_exit`].
pub const EXIT_CODE: i32 = -1;

/// Returns whether the gates call their closures.
///
/// Useful to skip setup that only an assertion needs.
#[inline]
#[must_use]
pub const fn is_enabled() -> bool {
  ENABLED
}

/// Calls `action` if assertions are enabled.
///
/// Reporting a problem is up to `action`.
///
/// ```
/// let (x, y) = (10, -10);
/// gate::run(|| {
///   assert!(x >= 0, "x is negative {x}");
///   assert!(y <= 0, "y is positive {y}");
/// });
/// assert_eq!(x + y, 0);
/// ```
#[inline]
pub fn run<F>(action: F)
where
  F: FnOnce(),
{
  if ENABLED {
    action();
  }
}

/// Calls `check` if assertions are enabled, and exits with [`EXIT_CODE`] if it reports a failure.
///
/// Nothing is written before exiting.
///
/// ```
/// let x = 3u8;
/// gate::run_or_exit(|| x.checked_add(1).is_some());
/// ```
#[inline]
pub fn run_or_exit<F, O>(check: F)
where
  F: FnOnce() -> O,
  O: Outcome,
{
  if ENABLED && check().into_failure().is_some() {
    std::process::exit(EXIT_CODE);
  }
}

/// Calls `check` if assertions are enabled, and writes any failure with a backtrace to stderr.
///
/// Execution continues after a failure.
///
/// ```
/// let (x, y) = (2.0f64, 4.0f64);
/// gate::run_or_log(|| {
///   if y < 0.0 {
///     return Err(format!("negative exponent {y}"));
///   }
///   Ok(())
/// });
/// assert_eq!(x.powf(y), 16.0);
/// ```
#[inline]
pub fn run_or_log<F, O>(check: F)
where
  F: FnOnce() -> O,
  O: Outcome,
{
  if ENABLED {
    if let Some(failure) = check().into_failure() {
      report(&failure);
    }
  }
}

/// Calls `check` if assertions are enabled. On failure, writes it with a backtrace to stderr and
/// exits with [`EXIT_CODE`].
///
/// ```
/// let (x, y) = (1i64, 2i64);
/// gate::run_or_log_exit(|| (x.checked_add(y).is_some(), format!("{x} + {y} overflows")));
/// ```
#[inline]
pub fn run_or_log_exit<F, O>(check: F)
where
  F: FnOnce() -> O,
  O: Outcome,
{
  if ENABLED {
    if let Some(failure) = check().into_failure() {
      report(&failure);
      std::process::exit(EXIT_CODE);
    }
  }
}

#[cold]
#[inline(never)]
fn report(failure: &Failure) {
  let backtrace = Backtrace::force_capture();
  log::error!("assertion failure: {failure}");
  // write errors are dropped.
  let _ = write_report(&mut io::stderr().lock(), failure, &backtrace);
}

fn write_report<W>(w: &mut W, failure: &Failure, backtrace: &Backtrace) -> io::Result<()>
where
  W: Write,
{
  writeln!(w, "assertion failure: {failure}")?;
  writeln!(w, "stack backtrace:")?;
  writeln!(w, "{backtrace}")?;
  w.flush()
}
