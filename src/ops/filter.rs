//! Emit only those items that pass a predicate test.
//!
//! Values failing the predicate are handed to a discard policy, and so are
//! values arriving after the predicate has failed. The default policy drops
//! them; a [`GroupedObservable`](crate::substream::GroupedObservable) releases
//! its upstream on drop. Other sub-stream values (see [`Drain`]) that have no
//! such drop behavior need [`DrainDiscarded`], which drains them explicitly
//! and logs a failed drain.
//!
//! ```
//! use rxchain::prelude::*;
//!
//! let mut big = vec![];
//! observable::from_iter(vec![3, 40, 5, 60])
//!   .filter(|v| *v > 10)
//!   .subscribe(|v| big.push(v));
//! assert_eq!(big, vec![40, 60]);
//! ```

use std::fmt::Debug;

use crate::{observable::LiftOp, observer::Observer, operator::Operator, substream::Drain};

/// A predicate that may fail.
pub trait Predicate<Item, Err> {
  fn test(&mut self, value: &Item) -> Result<bool, Err>;
}

/// Predicate that cannot fail.
#[derive(Clone)]
pub struct PlainFilter<F>(pub F);

impl<Item, Err, F> Predicate<Item, Err> for PlainFilter<F>
where
  F: FnMut(&Item) -> bool,
{
  #[inline]
  fn test(&mut self, value: &Item) -> Result<bool, Err> { Ok((self.0)(value)) }
}

/// Predicate whose failure terminates the stream.
#[derive(Clone)]
pub struct FallibleFilter<F>(pub F);

impl<Item, Err, F> Predicate<Item, Err> for FallibleFilter<F>
where
  F: FnMut(&Item) -> Result<bool, Err>,
{
  #[inline]
  fn test(&mut self, value: &Item) -> Result<bool, Err> { (self.0)(value) }
}

/// What a filter does with a value its predicate rejected.
pub trait OnDiscard<Item> {
  fn discard(&mut self, value: Item);
}

/// Drop rejected values.
#[derive(Clone, Copy, Debug, Default)]
pub struct DropDiscarded;

impl<Item> OnDiscard<Item> for DropDiscarded {
  #[inline]
  fn discard(&mut self, _value: Item) {}
}

/// Drain rejected sub-stream values.
///
/// Draining never fails the filter: a failure raised by the sub-stream while
/// it is being drained is logged and dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrainDiscarded;

impl<Item> OnDiscard<Item> for DrainDiscarded
where
  Item: Drain,
  Item::Err: Debug,
{
  fn discard(&mut self, value: Item) {
    if let Err(err) = value.drain() {
      warn!("discarded sub-stream failed while draining: {:?}", err);
    }
  }
}

/// The filter operator.
#[derive(Clone)]
pub struct Filter<P, D> {
  predicate: P,
  discard: D,
}

impl<P, D> Filter<P, D> {
  #[inline]
  pub fn new(predicate: P, discard: D) -> Self { Filter { predicate, discard } }

  /// Same predicate, draining the sub-streams it rejects.
  #[inline]
  pub fn drain_discarded(self) -> Filter<P, DrainDiscarded> {
    Filter { predicate: self.predicate, discard: DrainDiscarded }
  }
}

/// A filter operator with an infallible predicate.
#[inline]
pub fn filter<F>(predicate: F) -> Filter<PlainFilter<F>, DropDiscarded> {
  Filter::new(PlainFilter(predicate), DropDiscarded)
}

/// A filter operator whose predicate may fail.
#[inline]
pub fn filter_with_err<F>(predicate: F) -> Filter<FallibleFilter<F>, DropDiscarded> {
  Filter::new(FallibleFilter(predicate), DropDiscarded)
}

pub type FilterOp<S, P, Item, Err, D = DropDiscarded> = LiftOp<S, Filter<P, D>, Item, Err>;

impl<S, P, Item, Err> LiftOp<S, Filter<P, DropDiscarded>, Item, Err> {
  /// Drain the sub-stream values this filter rejects instead of dropping
  /// them.
  ///
  /// ```
  /// use rxchain::prelude::*;
  /// use std::{cell::Cell, rc::Rc};
  ///
  /// struct Group(u32, Rc<Cell<u32>>);
  ///
  /// impl Drain for Group {
  ///   type Err = Failure;
  ///   fn drain(self) -> Result<(), Failure> {
  ///     self.1.set(self.1.get() + 1);
  ///     Ok(())
  ///   }
  /// }
  ///
  /// let drained = Rc::new(Cell::new(0));
  /// let groups = (0..4).map(|k| Group(k, drained.clone())).collect::<Vec<_>>();
  /// let mut kept = vec![];
  /// observable::from_iter(groups)
  ///   .filter(|g| g.0 % 2 == 0)
  ///   .drain_discarded()
  ///   .subscribe_all(|g| kept.push(g.0), |_: Failure| {}, || {});
  ///
  /// assert_eq!(kept, vec![0, 2]);
  /// assert_eq!(drained.get(), 2);
  /// ```
  pub fn drain_discarded(self) -> FilterOp<S, P, Item, Err, DrainDiscarded> {
    let (source, filter) = self.into_parts();
    LiftOp::new(source, filter.drain_discarded())
  }
}

impl<Item, Err, P, D> Operator<Item, Err> for Filter<P, D>
where
  P: Predicate<Item, Err>,
  D: OnDiscard<Item>,
{
  type Output = Item;
  type OutputErr = Err;
  type Upstream<O> = FilterObserver<O, P, D>
  where
    O: Observer<Item, Err>;

  #[inline]
  fn apply<O>(self, downstream: O) -> Self::Upstream<O>
  where
    O: Observer<Item, Err>,
  {
    FilterObserver { observer: Some(downstream), predicate: self.predicate, discard: self.discard }
  }
}

pub struct FilterObserver<O, P, D> {
  // `None` once the predicate failed and the failure went downstream.
  observer: Option<O>,
  predicate: P,
  discard: D,
}

impl<Item, Err, O, P, D> Observer<Item, Err> for FilterObserver<O, P, D>
where
  O: Observer<Item, Err>,
  P: Predicate<Item, Err>,
  D: OnDiscard<Item>,
{
  fn next(&mut self, value: Item) {
    // Late values from a producer that ignores `is_finished` are rejected too.
    if self.observer.is_none() {
      self.discard.discard(value);
      return;
    }
    match self.predicate.test(&value) {
      Ok(true) => Observer::<Item, Err>::next(&mut self.observer, value),
      Ok(false) => self.discard.discard(value),
      Err(err) => {
        if let Some(observer) = self.observer.take() {
          observer.error(err);
        }
      }
    }
  }

  #[inline]
  fn error(self, err: Err) { Observer::<Item, Err>::error(self.observer, err) }

  #[inline]
  fn complete(self) { Observer::<Item, Err>::complete(self.observer) }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}
