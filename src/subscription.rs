//! Subscription handles returned by `Observable::actual_subscribe`.
//!
//! The cancellation tree itself lives outside this crate; what is here is the
//! handle contract a chain needs: release the upstream resource, and tell
//! whether it has been released already.

/// Subscription returned from `Observable::actual_subscribe` to allow
/// unsubscribing.
pub trait Subscription {
  /// Release whatever the subscribed source holds for this subscription.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;
}

/// A source that finished synchronously has nothing left to release.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

/// Runs a teardown closure on unsubscribe.
///
/// ```
/// use rxchain::prelude::*;
/// use std::{cell::Cell, rc::Rc};
///
/// let released = Rc::new(Cell::new(false));
/// let flag = released.clone();
/// let subscription = ClosureSubscription::new(move || flag.set(true));
/// subscription.unsubscribe();
/// assert!(released.get());
/// ```
///
/// `unsubscribe` consumes the handle, so a handle that still exists has not
/// run its teardown and is never closed.
pub struct ClosureSubscription<F> {
  teardown: F,
}

impl<F: FnOnce()> ClosureSubscription<F> {
  pub fn new(teardown: F) -> Self { ClosureSubscription { teardown } }
}

impl<F: FnOnce()> Subscription for ClosureSubscription<F> {
  #[inline]
  fn unsubscribe(self) { (self.teardown)() }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

impl<S: Subscription> Subscription for Option<S> {
  fn unsubscribe(self) {
    if let Some(inner) = self {
      inner.unsubscribe();
    }
  }

  fn is_closed(&self) -> bool { self.as_ref().map_or(true, Subscription::is_closed) }
}
