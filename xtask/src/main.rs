//! A task runner using the [xtask spec][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{anyhow, bail, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, pushd};

/// The feature that turns the gates on.
const ASSERTS: &str = "gate/asserts";

/// The flags of `gate-demo` that run a demo to completion, even with asserts on.
const CONTINUING_DEMOS: [&str; 2] = ["--log", "--silent"];

#[inline]
fn show_help() {
  print!("{}", include_str!("help.txt"));
}

fn finish_args(args: Arguments) -> Result<()> {
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {:?}", args);
  }
  Ok(())
}

/// Builds, lints and tests, once without and once with asserts.
fn ci() -> Result<()> {
  cmd!("cargo test --no-run").run()?;
  cmd!("cargo fmt -- --check").run()?;
  for features in [&[][..], &["--features", ASSERTS][..]] {
    cmd!("cargo clippy {features...}").run()?;
    cmd!("cargo test {features...}").run()?;
  }
  Ok(())
}

/// Runs the demos that don't exit, with asserts on if `asserts`.
fn demo(asserts: bool) -> Result<()> {
  let features: &[&str] = if asserts { &["--features", ASSERTS] } else { &[] };
  for flag in CONTINUING_DEMOS {
    cmd!("cargo run --quiet --package gate-demo {features...} -- {flag}").run()?;
  }
  Ok(())
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let Some(subcommand) = args.subcommand()? else {
    show_help();
    return Ok(());
  };
  let root = Path::new(env!("CARGO_MANIFEST_DIR"))
    .parent()
    .ok_or_else(|| anyhow!("xtask has no parent directory"))?;
  let _d = pushd(root)?;
  match subcommand.as_str() {
    "ci" => {
      finish_args(args)?;
      ci()?;
    }
    "demo" => {
      let asserts = args.contains("--asserts");
      finish_args(args)?;
      demo(asserts)?;
    }
    s => bail!("unknown subcommand: {}", s),
  }
  Ok(())
}

fn main() {
  match run() {
    Ok(()) => {}
    Err(e) => {
      eprintln!("{e}");
      std::process::exit(1);
    }
  }
}
