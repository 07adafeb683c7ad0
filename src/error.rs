//! The crate's ready-made failure type.
//!
//! Operators are generic over their error type, so nothing forces a stream to
//! use [`Failure`]. It exists for the common case where a stream needs to
//! carry "whatever went wrong", be it an upstream fault or a misbehaving
//! callback.
//!
//! ```
//! use rxchain::error::Failure;
//!
//! let failure = Failure::msg("predicate exploded");
//! assert_eq!(failure.to_string(), "predicate exploded");
//! ```

use std::error::Error;

/// An opaque failure carrying its cause. It has no identity beyond that cause.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct Failure {
  #[source]
  cause: Box<dyn Error + Send + Sync>,
}

/// Cause used by [`Failure::msg`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

impl Failure {
  /// Wrap any error as a failure.
  pub fn new(cause: impl Error + Send + Sync + 'static) -> Self {
    Self { cause: Box::new(cause) }
  }

  /// A failure whose cause is a plain message.
  pub fn msg(message: impl Into<String>) -> Self { Self::new(Message(message.into())) }

  pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) { &*self.cause }

  /// Attempt to downcast the cause to a concrete error type.
  pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> { self.cause.downcast_ref::<E>() }
}

impl PartialEq for Failure {
  fn eq(&self, other: &Self) -> bool { self.to_string() == other.to_string() }
}
