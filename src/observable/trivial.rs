use std::marker::PhantomData;

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable producing a single value, then completing.
///
/// ```
/// use rxchain::prelude::*;
///
/// let mut got = None;
/// observable::of(123).subscribe(|v| got = Some(v));
/// assert_eq!(got, Some(123));
/// ```
pub fn of<Item>(v: Item) -> OfObservable<Item> { OfObservable(v) }

#[derive(Clone)]
pub struct OfObservable<Item>(Item);

impl<Item, Err, O> Observable<Item, Err, O> for OfObservable<Item>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    observer.next(self.0);
    observer.complete();
  }
}

impl<Item, Err> ObservableExt<Item, Err> for OfObservable<Item> {}

/// Creates an observable that produces no values and completes immediately.
pub fn empty<Item>() -> Empty<Item> { Empty(PhantomData) }

#[derive(Clone)]
pub struct Empty<Item>(PhantomData<fn() -> Item>);

impl<Item, Err, O> Observable<Item, Err, O> for Empty<Item>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.complete(); }
}

impl<Item, Err> ObservableExt<Item, Err> for Empty<Item> {}

/// Creates an observable that emits no items, just terminates with an error.
pub fn throw_err<Item, Err>(err: Err) -> ThrowErr<Item, Err> { ThrowErr(err, PhantomData) }

#[derive(Clone)]
pub struct ThrowErr<Item, Err>(Err, PhantomData<fn() -> Item>);

impl<Item, Err, O> Observable<Item, Err, O> for ThrowErr<Item, Err>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.error(self.0); }
}

impl<Item, Err> ObservableExt<Item, Err> for ThrowErr<Item, Err> {}

#[cfg(test)]
mod test {
  use std::convert::Infallible;

  use crate::prelude::*;

  #[test]
  fn of_emits_once() {
    let mut values = vec![];
    let mut completed = 0;
    observable::of(7).subscribe_all(|v| values.push(v), |_: Infallible| {}, || completed += 1);
    assert_eq!(values, vec![7]);
    assert_eq!(completed, 1);
  }

  #[test]
  fn empty_only_completes() {
    let mut nexts = 0;
    let mut completed = false;
    observable::empty::<i32>().subscribe_all(
      |_| nexts += 1,
      |_: Infallible| {},
      || completed = true,
    );
    assert_eq!(nexts, 0);
    assert!(completed);
  }

  #[test]
  fn throw_err_only_errors() {
    let mut nexts = 0;
    let mut err = None;
    let mut completed = false;
    observable::throw_err::<i32, _>("boom").subscribe_all(
      |_| nexts += 1,
      |e| err = Some(e),
      || completed = true,
    );
    assert_eq!(nexts, 0);
    assert_eq!(err, Some("boom"));
    assert!(!completed);
  }
}
