//! Operators and chain assembly.
//!
//! An operator knows nothing about sources. Given the observer that sits
//! *downstream* of it, it builds the observer that sits *upstream* of it:
//! the one the source (or the previous operator) will push signals into.
//! Assembling a chain is nothing more than applying operators, innermost
//! first, to the final subscriber:
//!
//! ```
//! use rxchain::prelude::*;
//!
//! let mut seen = vec![];
//! let chain = ops::tap::tap_next(|_: &i32| Ok::<_, Failure>(()))
//!   .compose(ops::filter::filter(|v: &i32| *v > 1));
//! let mut head = assemble(
//!   chain,
//!   ObserverAll::new(|v: i32| seen.push(v), |_: Failure| {}, || {}),
//! );
//! head.next(1);
//! head.next(2);
//! head.complete();
//! assert_eq!(seen, vec![2]);
//! ```

use crate::observer::Observer;

/// A transformation from a downstream observer to an upstream observer.
///
/// `Item`/`Err` are the signals the upstream observer accepts; `Output` and
/// `OutputErr` are the signals it forwards. Applying an operator only wraps
/// the downstream observer; it has no other side effect and cannot fail.
pub trait Operator<Item, Err> {
  type Output;
  type OutputErr;

  /// The observer this operator places in front of a downstream `O`.
  type Upstream<O>: Observer<Item, Err>
  where
    O: Observer<Self::Output, Self::OutputErr>;

  fn apply<O>(self, downstream: O) -> Self::Upstream<O>
  where
    O: Observer<Self::Output, Self::OutputErr>;
}

/// Build the upstream observer of `operator` in front of `downstream`.
#[inline]
pub fn assemble<Item, Err, Op, O>(operator: Op, downstream: O) -> Op::Upstream<O>
where
  Op: Operator<Item, Err>,
  O: Observer<Op::Output, Op::OutputErr>,
{
  operator.apply(downstream)
}

/// Operator that forwards every signal untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<Item, Err> Operator<Item, Err> for Identity {
  type Output = Item;
  type OutputErr = Err;
  type Upstream<O> = O
  where
    O: Observer<Item, Err>;

  #[inline]
  fn apply<O>(self, downstream: O) -> Self::Upstream<O>
  where
    O: Observer<Item, Err>,
  {
    downstream
  }
}

/// `outer` placed upstream of `inner`: signals go through `outer` first.
///
/// `Compose(a, b).apply(c)` is exactly `a.apply(b.apply(c))`, so composition
/// is associative: how a chain is bracketed never changes what it does.
#[derive(Clone, Debug)]
pub struct Compose<A, B> {
  outer: A,
  inner: B,
}

impl<A, B> Compose<A, B> {
  #[inline]
  pub fn new(outer: A, inner: B) -> Self { Compose { outer, inner } }
}

impl<Item, Err, A, B> Operator<Item, Err> for Compose<A, B>
where
  A: Operator<Item, Err>,
  B: Operator<A::Output, A::OutputErr>,
{
  type Output = B::Output;
  type OutputErr = B::OutputErr;
  type Upstream<O> = A::Upstream<B::Upstream<O>>
  where
    O: Observer<B::Output, B::OutputErr>;

  #[inline]
  fn apply<O>(self, downstream: O) -> Self::Upstream<O>
  where
    O: Observer<B::Output, B::OutputErr>,
  {
    self.outer.apply(self.inner.apply(downstream))
  }
}

/// Chaining helpers available on every value; only meaningful for operators.
pub trait OperatorExt: Sized {
  /// Place `self` upstream of `next`.
  #[inline]
  fn compose<B>(self, next: B) -> Compose<Self, B> { Compose::new(self, next) }
}

impl<T> OperatorExt for T {}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  // A small value-changing operator, so that composition is checked on more
  // than same-type stages.
  struct Scale(i32);

  struct ScaleObserver<O> {
    observer: O,
    factor: i32,
  }

  impl<Err, O> Observer<i32, Err> for ScaleObserver<O>
  where
    O: Observer<i32, Err>,
  {
    fn next(&mut self, value: i32) { self.observer.next(value * self.factor) }

    fn error(self, err: Err) { self.observer.error(err) }

    fn complete(self) { self.observer.complete() }

    fn is_finished(&self) -> bool { self.observer.is_finished() }
  }

  impl<Err> Operator<i32, Err> for Scale {
    type Output = i32;
    type OutputErr = Err;
    type Upstream<O> = ScaleObserver<O>
    where
      O: Observer<i32, Err>;

    fn apply<O>(self, downstream: O) -> Self::Upstream<O>
    where
      O: Observer<i32, Err>,
    {
      ScaleObserver { observer: downstream, factor: self.0 }
    }
  }

  struct Offset(i32);

  struct OffsetObserver<O> {
    observer: O,
    offset: i32,
  }

  impl<Err, O> Observer<i32, Err> for OffsetObserver<O>
  where
    O: Observer<i32, Err>,
  {
    fn next(&mut self, value: i32) { self.observer.next(value + self.offset) }

    fn error(self, err: Err) { self.observer.error(err) }

    fn complete(self) { self.observer.complete() }

    fn is_finished(&self) -> bool { self.observer.is_finished() }
  }

  impl<Err> Operator<i32, Err> for Offset {
    type Output = i32;
    type OutputErr = Err;
    type Upstream<O> = OffsetObserver<O>
    where
      O: Observer<i32, Err>;

    fn apply<O>(self, downstream: O) -> Self::Upstream<O>
    where
      O: Observer<i32, Err>,
    {
      OffsetObserver { observer: downstream, offset: self.0 }
    }
  }

  fn drive<Op>(op: Op) -> Vec<i32>
  where
    Op: Operator<i32, (), Output = i32, OutputErr = ()>,
  {
    let out = Rc::new(RefCell::new(vec![]));
    let sink = out.clone();
    let mut head = assemble(
      op,
      crate::observer::ObserverAll::new(move |v: i32| sink.borrow_mut().push(v), |_: ()| {}, || {}),
    );
    for v in 1..=3 {
      head.next(v);
    }
    head.complete();
    let values = out.borrow().clone();
    values
  }

  #[test]
  fn identity_forwards() {
    assert_eq!(drive(Identity), vec![1, 2, 3]);
  }

  #[test]
  fn compose_applies_outer_first() {
    // (v * 2) + 1
    assert_eq!(drive(Scale(2).compose(Offset(1))), vec![3, 5, 7]);
    // (v + 1) * 2
    assert_eq!(drive(Offset(1).compose(Scale(2))), vec![4, 6, 8]);
  }

  #[test]
  fn compose_is_associative() {
    let left = drive(Scale(2).compose(Offset(1)).compose(Scale(3)));
    let right = drive(Scale(2).compose(Offset(1).compose(Scale(3))));
    assert_eq!(left, right);
    assert_eq!(left, vec![9, 15, 21]);
  }

  #[test]
  fn compose_equals_nested_apply() {
    let out = Rc::new(RefCell::new(vec![]));
    let sink = out.clone();
    let terminal = crate::observer::ObserverAll::new(
      move |v: i32| sink.borrow_mut().push(v),
      |_: ()| {},
      || {},
    );
    let mut head = Operator::<i32, ()>::apply(
      Offset(10),
      Operator::<i32, ()>::apply(Scale(2), terminal),
    );
    head.next(1);
    head.complete();
    assert_eq!(*out.borrow(), vec![22]);
    assert_eq!(drive(Offset(10).compose(Scale(2)))[0], 22);
  }
}
