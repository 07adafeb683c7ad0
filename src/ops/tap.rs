//! Side effects on every signal, without touching the data.
//!
//! The inspection callbacks may fail. A failing callback never leaves the
//! stream half-terminated: the failure takes the place of the signal being
//! inspected and exactly one terminal signal reaches downstream.

use crate::{observable::LiftOp, observer::Observer, operator::Operator};

/// A side-effect observer. Every handler defaults to doing nothing.
///
/// Returning `Err` from a handler turns the failure into the stream's own
/// failure:
///
/// - `on_next` failing: the value is not forwarded and the stream errors
///   (going through `on_error` first, like any other error of this stage);
/// - `on_complete` failing: the stream errors instead of completing;
/// - `on_error` failing: its failure replaces the one being reported.
pub trait Inspect<Item, Err> {
  fn on_next(&mut self, _value: &Item) -> Result<(), Err> { Ok(()) }

  fn on_error(&mut self, _err: &Err) -> Result<(), Err> { Ok(()) }

  fn on_complete(&mut self) -> Result<(), Err> { Ok(()) }
}

/// Inspect values only.
#[derive(Clone)]
pub struct OnNext<F>(pub F);

impl<Item, Err, F> Inspect<Item, Err> for OnNext<F>
where
  F: FnMut(&Item) -> Result<(), Err>,
{
  #[inline]
  fn on_next(&mut self, value: &Item) -> Result<(), Err> { (self.0)(value) }
}

/// Inspect the failure only.
#[derive(Clone)]
pub struct OnError<F>(pub F);

impl<Item, Err, F> Inspect<Item, Err> for OnError<F>
where
  F: FnMut(&Err) -> Result<(), Err>,
{
  #[inline]
  fn on_error(&mut self, err: &Err) -> Result<(), Err> { (self.0)(err) }
}

/// Inspect the completion only.
#[derive(Clone)]
pub struct OnComplete<F>(pub F);

impl<Item, Err, F> Inspect<Item, Err> for OnComplete<F>
where
  F: FnMut() -> Result<(), Err>,
{
  #[inline]
  fn on_complete(&mut self) -> Result<(), Err> { (self.0)() }
}

/// One closure per signal.
#[derive(Clone)]
pub struct Inspector<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> Inspector<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self { Inspector { next, error, complete } }
}

impl<Item, Err, N, E, C> Inspect<Item, Err> for Inspector<N, E, C>
where
  N: FnMut(&Item) -> Result<(), Err>,
  E: FnMut(&Err) -> Result<(), Err>,
  C: FnMut() -> Result<(), Err>,
{
  #[inline]
  fn on_next(&mut self, value: &Item) -> Result<(), Err> { (self.next)(value) }

  #[inline]
  fn on_error(&mut self, err: &Err) -> Result<(), Err> { (self.error)(err) }

  #[inline]
  fn on_complete(&mut self) -> Result<(), Err> { (self.complete)() }
}

/// The tap operator.
#[derive(Clone)]
pub struct Tap<I> {
  inspector: I,
}

impl<I> Tap<I> {
  #[inline]
  pub fn new(inspector: I) -> Self { Tap { inspector } }
}

/// A tap operator running `inspector`.
#[inline]
pub fn tap<I>(inspector: I) -> Tap<I> { Tap::new(inspector) }

/// A tap operator inspecting values only.
#[inline]
pub fn tap_next<F>(f: F) -> Tap<OnNext<F>> { Tap::new(OnNext(f)) }

#[inline]
pub fn tap_error<F>(f: F) -> Tap<OnError<F>> { Tap::new(OnError(f)) }

#[inline]
pub fn tap_complete<F>(f: F) -> Tap<OnComplete<F>> { Tap::new(OnComplete(f)) }

pub type TapOp<S, I, Item, Err> = LiftOp<S, Tap<I>, Item, Err>;

impl<Item, Err, I> Operator<Item, Err> for Tap<I>
where
  I: Inspect<Item, Err>,
{
  type Output = Item;
  type OutputErr = Err;
  type Upstream<O> = TapObserver<O, I>
  where
    O: Observer<Item, Err>;

  #[inline]
  fn apply<O>(self, downstream: O) -> Self::Upstream<O>
  where
    O: Observer<Item, Err>,
  {
    TapObserver { observer: Some(downstream), inspector: self.inspector }
  }
}

pub struct TapObserver<O, I> {
  // `None` once a terminal signal has gone downstream.
  observer: Option<O>,
  inspector: I,
}

impl<O, I> TapObserver<O, I> {
  /// The error path of this stage: run `on_error`, then terminate downstream
  /// with either the original failure or the one `on_error` produced.
  fn fail<Item, Err>(&mut self, err: Err)
  where
    O: Observer<Item, Err>,
    I: Inspect<Item, Err>,
  {
    let Some(observer) = self.observer.take() else {
      return;
    };
    match self.inspector.on_error(&err) {
      Ok(()) => observer.error(err),
      Err(replaced) => {
        debug!("tap error handler failed; its failure replaces the original");
        observer.error(replaced)
      }
    }
  }
}

impl<Item, Err, O, I> Observer<Item, Err> for TapObserver<O, I>
where
  O: Observer<Item, Err>,
  I: Inspect<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.observer.is_none() {
      return;
    }
    match self.inspector.on_next(&value) {
      Ok(()) => Observer::<Item, Err>::next(&mut self.observer, value),
      Err(err) => {
        debug!("tap next handler failed; terminating the stream");
        self.fail::<Item, Err>(err)
      }
    }
  }

  fn error(mut self, err: Err) { self.fail::<Item, Err>(err) }

  fn complete(mut self) {
    if self.observer.is_none() {
      return;
    }
    match self.inspector.on_complete() {
      Ok(()) => Observer::<Item, Err>::complete(self.observer),
      Err(err) => {
        debug!("tap complete handler failed; erroring instead of completing");
        self.fail::<Item, Err>(err)
      }
    }
  }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}
