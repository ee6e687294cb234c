//! Demonstrates each assertion gate on arithmetic that can go out of range.
//!
//! Build with `--features asserts` to see the gates fire.

mod checks;


use anyhow::{bail, Result};
use pico_args::Arguments;

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

/// A demo, one per gate.
#[derive(Debug, Clone, Copy)]
enum Demo {
  LogExit,
  Log,
  Exit,
  Silent,
}

const FLAGS: [(&str, Demo); 4] = [
  ("--log-exit", Demo::LogExit),
  ("--log", Demo::Log),
  ("--exit", Demo::Exit),
  ("--silent", Demo::Silent),
];

impl Demo {
  fn run(self) {
    match self {
      Demo::LogExit => demonstrate_log_exit(),
      Demo::Log => demonstrate_log(),
      Demo::Exit => demonstrate_exit(),
      Demo::Silent => demonstrate_silent(),
    }
  }
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let demos: Vec<Demo> =
    FLAGS.iter().filter(|&&(flag, _)| args.contains(flag)).map(|&(_, demo)| demo).collect();
  finish_args(args)?;
  if gate::is_enabled() {
    println!("The asserts will be running in this example");
  } else {
    println!("The asserts are disabled and will not run.");
    println!("Build with `--features asserts` to enable them.");
  }
  println!();
  if demos.is_empty() {
    println!("No demo selected.");
    println!();
    show_help();
    return Ok(());
  }
  for demo in demos {
    demo.run();
  }
  Ok(())
}

fn demonstrate_log_exit() {
  println!("summed to {}", sum(1, 2));
  println!("summed to {}", sum(i64::MAX, -i64::MAX));
  // exits here when asserts are enabled.
  println!("summed to {}", sum(i64::MAX, i64::MAX));
}

fn demonstrate_log() {
  println!("exponential value to {}", positive_pow(1.0, 2.0));
  println!("exponential value to {}", positive_pow(2.0, 4.0));
  // each of these is reported when asserts are enabled.
  println!("exponential value to {}", positive_pow(-2.0, 3.0));
  println!("exponential value to {}", positive_pow(2.0, -4.0));
  println!("exponential value to {}", positive_pow(2.0, 1024.0));
}

fn demonstrate_exit() {
  println!("subtracted to {}", subtract(1, 2));
  println!("subtracted to {}", subtract(-1, i64::MAX));
  // exits here when asserts are enabled.
  println!("subtracted to {}", subtract(i64::MAX, -i64::MAX));
}

fn demonstrate_silent() {
  println!("multiplied to {}", multiply(1, 2));
  println!("multiplied to {}", multiply(10, 20));
  // each of these prints a message when asserts are enabled.
  println!("multiplied to {}", multiply(i64::MAX, 2));
  println!("multiplied to {}", multiply(-i64::MAX, 2));
}

/// Adds, exiting with a report if it overflows.
fn sum(x: i64, y: i64) -> i64 {
  gate::run_or_log_exit(|| checks::sum(x, y));
  x.wrapping_add(y)
}

/// Raises `x` to `y`, reporting disallowed or infinite results.
fn positive_pow(x: f64, y: f64) -> f64 {
  gate::run_or_log(|| checks::positive_pow(x, y));
  x.powf(y)
}

/// Subtracts, exiting if it overflows. The check prints its own message first.
fn subtract(x: i64, y: i64) -> i64 {
  gate::run_or_exit(|| {
    let ret = checks::subtract(x, y);
    if let Err(e) = &ret {
      println!("{e}");
    }
    ret
  });
  x.wrapping_sub(y)
}

/// Multiplies, printing a message if it overflows.
fn multiply(x: i64, y: i64) -> i64 {
  gate::run(|| {
    if let Err(e) = checks::multiply(x, y) {
      println!("{e}");
    }
  });
  x.wrapping_mul(y)
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
