//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of signals in a chain. It provides
//! three methods: next (for values), error (for failures), and complete (for
//! stream completion).

use std::convert::Infallible;

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: the consumer of signals in a chain.
///
/// `error` and `complete` take the observer by value. Whoever holds an
/// observer can therefore terminate it at most once; after that there is
/// nothing left to call.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);

  /// Returns `true` once the observer will not accept more values.
  ///
  /// Sources (like `from_iter`) check it to stop emitting early.
  fn is_finished(&self) -> bool;
}

// ============================================================================
// Emitter Trait
// ============================================================================

/// A trait for emitting signals to an Observer via mutable reference.
///
/// Unlike `Observer`, which consumes `self` for `error` and `complete`,
/// `Emitter` takes `&mut self` for all methods so that a producer can be
/// handed a `&mut dyn Emitter` without knowing which concrete observer sits at
/// the head of the chain. Implementations guard against signals after
/// termination; see [`Subscriber`](crate::subscriber::Subscriber).
pub trait Emitter<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);
  fn is_finished(&self) -> bool;
}

// ============================================================================
// FnMutObserver - Closure adapter
// ============================================================================

/// Closure adapter for infallible streams.
///
/// This enables `observable.subscribe(|v| println!("{}", v))`. The closure
/// becomes the `next` handler; completion is ignored.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item> Observer<Item, Infallible> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(self, err: Infallible) { match err {} }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { false }
}

/// Observer built from three closures, one per signal.
#[derive(Clone)]
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value); }

  #[inline]
  fn error(self, err: Err) { (self.error)(err); }

  #[inline]
  fn complete(self) { (self.complete)(); }

  #[inline]
  fn is_finished(&self) -> bool { false }
}

// ============================================================================
// Option observer
// ============================================================================

/// `None` ignores every signal and reports itself finished; `Some` delegates.
///
/// Operators that may terminate their downstream from inside `next` keep it in
/// an `Option`: `Some` is the active state and `take()` is the one-shot
/// transition to terminated.
impl<O, Item, Err> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(inner) = self {
      inner.next(value);
    }
  }

  fn error(self, err: Err) {
    if let Some(inner) = self {
      inner.error(err);
    }
  }

  fn complete(self) {
    if let Some(inner) = self {
      inner.complete();
    }
  }

  fn is_finished(&self) -> bool {
    self
      .as_ref()
      .map_or(true, |o| Observer::<Item, Err>::is_finished(o))
  }
}

// ============================================================================
// Tests
// ============================================================================
