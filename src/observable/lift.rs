use std::marker::PhantomData;

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
  operator::Operator,
};

/// A source with an operator waiting to be applied.
///
/// The chain is assembled in `actual_subscribe`: the operator wraps the
/// subscriber and the source is subscribed with the wrapped observer. `Item`
/// and `Err` name what the source emits.
pub struct LiftOp<S, Op, Item, Err> {
  pub(crate) source: S,
  pub(crate) operator: Op,
  _hint: PhantomData<fn() -> (Item, Err)>,
}

impl<S, Op, Item, Err> LiftOp<S, Op, Item, Err> {
  #[inline]
  pub fn new(source: S, operator: Op) -> Self {
    LiftOp { source, operator, _hint: PhantomData }
  }

  /// Split back into the source and the pending operator.
  #[inline]
  pub fn into_parts(self) -> (S, Op) { (self.source, self.operator) }
}

impl<S, Op, Item, Err> Clone for LiftOp<S, Op, Item, Err>
where
  S: Clone,
  Op: Clone,
{
  fn clone(&self) -> Self { LiftOp::new(self.source.clone(), self.operator.clone()) }
}

impl<S, Op, Item, Err, O> Observable<Op::Output, Op::OutputErr, O> for LiftOp<S, Op, Item, Err>
where
  Op: Operator<Item, Err>,
  O: Observer<Op::Output, Op::OutputErr>,
  S: Observable<Item, Err, Op::Upstream<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let upstream = self.operator.apply(observer);
    self.source.actual_subscribe(upstream)
  }
}

impl<S, Op, Item, Err> ObservableExt<Op::Output, Op::OutputErr> for LiftOp<S, Op, Item, Err> where
  Op: Operator<Item, Err>
{
}
