//! What a predicate returns, and the failure it may report.

use std::fmt;

/// A value returned by a predicate that says whether it passed.
pub trait Outcome {
  /// Returns the failure this reports, or `None` if it passed.
  fn into_failure(self) -> Option<Failure>;
}

/// `false` is a failure without a message.
impl Outcome for bool {
  fn into_failure(self) -> Option<Failure> {
    (!self).then(Failure::unexplained)
  }
}

/// `Err(e)` is a failure with the message `e`.
impl<T, E> Outcome for Result<T, E>
where
  E: fmt::Display,
{
  fn into_failure(self) -> Option<Failure> {
    self.err().map(|e| Failure::new(e.to_string()))
  }
}

/// `(false, msg)` is a failure with the message `msg`. The message is ignored on success.
impl<M> Outcome for (bool, M)
where
  M: fmt::Display,
{
  fn into_failure(self) -> Option<Failure> {
    let (ok, msg) = self;
    (!ok).then(|| Failure::new(msg.to_string()))
  }
}

impl Outcome for Option<Failure> {
  fn into_failure(self) -> Option<Failure> {
    self
  }
}

/// A failed assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
  message: Option<String>,
}

impl Failure {
  /// Returns a new `Failure` with this message.
  #[must_use]
  pub fn new<M>(message: M) -> Self
  where
    M: Into<String>,
  {
    Self { message: Some(message.into()) }
  }

  /// Returns a new `Failure` with no message.
  #[must_use]
  pub fn unexplained() -> Self {
    Self { message: None }
  }

  /// Returns the message, if there is one.
  #[must_use]
  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }
}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.message {
      Some(msg) => f.write_str(msg),
      None => f.write_str("predicate reported failure"),
    }
  }
}

impl std::error::Error for Failure {}
