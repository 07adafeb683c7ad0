use std::marker::PhantomData;

use crate::{
  observable::{Observable, ObservableExt},
  observer::{Emitter, Observer},
  subscriber::Subscriber,
  subscription::Subscription,
};

/// Observable created from a function.
///
/// The function receives the head of the chain as a `&mut dyn Emitter` and
/// returns the subscription that releases whatever it holds. The emitter is a
/// [`Subscriber`], so signals sent after a terminal one are dropped.
///
/// ```
/// use rxchain::prelude::*;
///
/// let mut values = vec![];
/// observable::create(|emitter: &mut dyn Emitter<i32, Failure>| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
///   emitter.next(3);
/// })
/// .subscribe_all(|v| values.push(v), |_| {}, || {});
///
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn create<F, Item, Err, U>(f: F) -> Create<F, Item, Err>
where
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  Create::new(f)
}

#[derive(Clone)]
pub struct Create<F, Item, Err> {
  f: F,
  _marker: PhantomData<fn(Item, Err)>,
}

impl<F, Item, Err> Create<F, Item, Err> {
  pub fn new(f: F) -> Self { Self { f, _marker: PhantomData } }
}

impl<F, Item, Err, O, U> Observable<Item, Err, O> for Create<F, Item, Err>
where
  O: Observer<Item, Err>,
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  type Unsub = U;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let mut subscriber = Subscriber::new(observer);
    (self.f)(&mut subscriber)
  }
}

impl<F, Item, Err> ObservableExt<Item, Err> for Create<F, Item, Err> {}
