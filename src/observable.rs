//! Observables: things an observer can be subscribed to.
//!
//! [`Observable`] is the subscription contract; [`ObservableExt`] carries the
//! operator methods. Every operator method is a thin wrapper around
//! [`ObservableExt::lift`]: nothing is built until `actual_subscribe` is
//! called, at which point the operator is applied to the subscriber and the
//! source is subscribed with the result.

use crate::{
  observer::{FnMutObserver, Observer, ObserverAll},
  operator::Operator,
  ops::{
    filter::{DropDiscarded, FallibleFilter, Filter, FilterOp, PlainFilter},
    tap::{Inspect, OnComplete, OnError, OnNext, Tap, TapOp},
  },
  subscription::Subscription,
};

mod create;
mod from_iter;
mod lift;
mod trivial;

pub use create::*;
pub use from_iter::*;
pub use lift::*;
pub use trivial::*;

/// A source of `Item` values and `Err` failures that can push them into an
/// observer of type `O`.
pub trait Observable<Item, Err, O>
where
  O: Observer<Item, Err>,
{
  type Unsub: Subscription;

  /// Subscribe `observer`, building whatever chain this observable stands
  /// for in front of it.
  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

/// Operator and subscription methods shared by every observable.
pub trait ObservableExt<Item, Err>: Sized {
  /// Apply `operator` to whatever subscribes to the returned observable.
  #[inline]
  fn lift<Op>(self, operator: Op) -> LiftOp<Self, Op, Item, Err>
  where
    Op: Operator<Item, Err>,
  {
    LiftOp::new(self, operator)
  }

  /// Emit only those items that pass a predicate test.
  ///
  /// ```
  /// use rxchain::prelude::*;
  ///
  /// let mut evens = vec![];
  /// observable::from_iter(0..10)
  ///   .filter(|v| v % 2 == 0)
  ///   .subscribe(|v| evens.push(v));
  ///
  /// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
  /// ```
  #[inline]
  fn filter<F>(self, predicate: F) -> FilterOp<Self, PlainFilter<F>, Item, Err>
  where
    F: FnMut(&Item) -> bool,
  {
    self.lift(Filter::new(PlainFilter(predicate), DropDiscarded))
  }

  /// Like [`filter`](ObservableExt::filter), but the predicate may fail. A
  /// failure terminates the stream with that error.
  #[inline]
  fn filter_with_err<F>(self, predicate: F) -> FilterOp<Self, FallibleFilter<F>, Item, Err>
  where
    F: FnMut(&Item) -> Result<bool, Err>,
  {
    self.lift(Filter::new(FallibleFilter(predicate), DropDiscarded))
  }

  /// Run side effects on every signal without changing it.
  #[inline]
  fn tap<I>(self, inspector: I) -> TapOp<Self, I, Item, Err>
  where
    I: Inspect<Item, Err>,
  {
    self.lift(Tap::new(inspector))
  }

  /// Tap only the values.
  #[inline]
  fn tap_next<F>(self, f: F) -> TapOp<Self, OnNext<F>, Item, Err>
  where
    F: FnMut(&Item) -> Result<(), Err>,
  {
    self.tap(OnNext(f))
  }

  /// Tap only the failure.
  #[inline]
  fn tap_error<F>(self, f: F) -> TapOp<Self, OnError<F>, Item, Err>
  where
    F: FnMut(&Err) -> Result<(), Err>,
  {
    self.tap(OnError(f))
  }

  /// Tap only the completion.
  #[inline]
  fn tap_complete<F>(self, f: F) -> TapOp<Self, OnComplete<F>, Item, Err>
  where
    F: FnMut() -> Result<(), Err>,
  {
    self.tap(OnComplete(f))
  }

  /// Subscribe an infallible stream with a `next` handler.
  #[inline]
  fn subscribe<N>(self, next: N) -> <Self as Observable<Item, Err, FnMutObserver<N>>>::Unsub
  where
    N: FnMut(Item),
    FnMutObserver<N>: Observer<Item, Err>,
    Self: Observable<Item, Err, FnMutObserver<N>>,
  {
    self.actual_subscribe(FnMutObserver(next))
  }

  /// Subscribe with one handler per signal.
  #[inline]
  fn subscribe_all<N, E, C>(
    self, next: N, error: E, complete: C,
  ) -> <Self as Observable<Item, Err, ObserverAll<N, E, C>>>::Unsub
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    C: FnOnce(),
    Self: Observable<Item, Err, ObserverAll<N, E, C>>,
  {
    self.actual_subscribe(ObserverAll::new(next, error, complete))
  }
}
