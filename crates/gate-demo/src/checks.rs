//! Checks for arithmetic going out of range.

use std::fmt;

/// An integer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  /// `+`
  Add,
  /// `-`
  Sub,
  /// `*`
  Mul,
}

impl fmt::Display for Op {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Op::Add => f.write_str("+"),
      Op::Sub => f.write_str("-"),
      Op::Mul => f.write_str("*"),
    }
  }
}

/// A way arithmetic went wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
  /// The result was too big and wrapped.
  Overflow { op: Op, x: i64, y: i64, wrapped: i64 },
  /// The result was too small and wrapped.
  Underflow { op: Op, x: i64, y: i64, wrapped: i64 },
  /// The exponent was below zero.
  NegativeExponent(f64),
  /// The base was below zero.
  NegativeBase(f64),
  /// The power was too big for an `f64`.
  PowOverflow { x: f64, y: f64 },
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Violation::Overflow { op, x, y, wrapped } => {
        write!(f, "{x} {op} {y} overflows to {wrapped}")
      }
      Violation::Underflow { op, x, y, wrapped } => {
        write!(f, "{x} {op} {y} underflows to {wrapped}")
      }
      Violation::NegativeExponent(y) => write!(f, "found disallowed negative exponent {y}"),
      Violation::NegativeBase(x) => write!(f, "found disallowed negative base {x}"),
      Violation::PowOverflow { x, y } => write!(f, "{x}^{y} overflows to inf"),
    }
  }
}

impl std::error::Error for Violation {}

/// Checks `x + y` stays in range.
pub fn sum(x: i64, y: i64) -> Result<(), Violation> {
  if x.checked_add(y).is_some() {
    return Ok(());
  }
  let wrapped = x.wrapping_add(y);
  Err(if x > 0 {
    Violation::Overflow { op: Op::Add, x, y, wrapped }
  } else {
    Violation::Underflow { op: Op::Add, x, y, wrapped }
  })
}

/// Checks `x - y` stays in range.
pub fn subtract(x: i64, y: i64) -> Result<(), Violation> {
  if x.checked_sub(y).is_some() {
    return Ok(());
  }
  let wrapped = x.wrapping_sub(y);
  Err(if y > 0 {
    Violation::Underflow { op: Op::Sub, x, y, wrapped }
  } else {
    Violation::Overflow { op: Op::Sub, x, y, wrapped }
  })
}

/// Checks `x * y` stays in range.
pub fn multiply(x: i64, y: i64) -> Result<(), Violation> {
  match x.checked_mul(y) {
    Some(_) => Ok(()),
    None => Err(Violation::Overflow { op: Op::Mul, x, y, wrapped: x.wrapping_mul(y) }),
  }
}

/// Checks `x` to the power `y` is allowed and finite. Only non-negative bases and exponents are
/// allowed, except that exponents in `[0, 1)` always pass.
pub fn positive_pow(x: f64, y: f64) -> Result<(), Violation> {
  if (0.0..1.0).contains(&y) {
    return Ok(());
  }
  if y < 0.0 {
    return Err(Violation::NegativeExponent(y));
  }
  if x < 0.0 {
    return Err(Violation::NegativeBase(x));
  }
  if x.powf(y).is_infinite() {
    return Err(Violation::PowOverflow { x, y });
  }
  Ok(())
}
