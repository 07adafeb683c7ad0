//! Sub-stream values: elements that are themselves streams.
//!
//! A keyed partitioning stage hands out one sub-stream per key. Each of them
//! stays allocated upstream until somebody subscribes to it and lets it
//! finish, or cancels it. [`Drain`] is the capability to cancel one without
//! knowing its concrete type. [`GroupedObservable`] also drains itself when it
//! is dropped unsubscribed, so a stage that throws it away, a plain filter
//! included, cannot leave its upstream waiting.

use std::{cell::RefCell, marker::PhantomData, rc::Rc};

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
  subscription::Subscription,
};

/// A value that must be released when it is discarded unconsumed.
pub trait Drain {
  type Err;

  /// Cancel the sub-stream immediately, consuming none of its elements.
  ///
  /// Returns the failure the sub-stream reported while being drained, if
  /// any. The caller decides what, if anything, to do with it.
  fn drain(self) -> Result<(), Self::Err>;
}

/// A sub-stream of `Item`s tagged with the key it was grouped under.
///
/// Subscribing to it subscribes to the wrapped source. Draining it subscribes
/// with an observer that is finished from the start, so a well-behaved source
/// emits nothing, and unsubscribes right away. Dropping it without having
/// subscribed drains it.
///
/// `Item` and `Err` are taken from the source when it names them, as
/// [`create`](crate::observable::create) does. Sources generic over their
/// error type, like `from_iter`, need them spelled out:
///
/// ```
/// use rxchain::prelude::*;
///
/// let source = observable::from_iter(vec![1, 3]);
/// let group = GroupedObservable::<_, _, i32, Failure>::new("odd", source);
/// let mut values = vec![];
/// group.subscribe_all(|v| values.push(v), |_| {}, || {});
/// assert_eq!(values, vec![1, 3]);
/// ```
pub struct GroupedObservable<Key, S, Item, Err> {
  pub key: Key,
  // `None` once subscribed or drained.
  source: Option<S>,
  release: fn(S) -> Result<(), Err>,
  _hint: PhantomData<fn() -> Item>,
}

impl<Key, S, Item, Err> GroupedObservable<Key, S, Item, Err> {
  pub fn new(key: Key, source: S) -> Self
  where
    S: Observable<Item, Err, DrainObserver<Err>>,
  {
    GroupedObservable {
      key,
      source: Some(source),
      release: drain_source::<S, Item, Err>,
      _hint: PhantomData,
    }
  }
}

fn drain_source<S, Item, Err>(source: S) -> Result<(), Err>
where
  S: Observable<Item, Err, DrainObserver<Err>>,
{
  let failure = Rc::new(RefCell::new(None));
  let unsub = source.actual_subscribe(DrainObserver { failure: failure.clone() });
  unsub.unsubscribe();
  let taken = failure.borrow_mut().take();
  match taken {
    Some(err) => Err(err),
    None => Ok(()),
  }
}

impl<Key, S, Item, Err, O> Observable<Item, Err, O> for GroupedObservable<Key, S, Item, Err>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, O>,
{
  type Unsub = Option<S::Unsub>;

  #[inline]
  fn actual_subscribe(mut self, observer: O) -> Self::Unsub {
    self
      .source
      .take()
      .map(|source| source.actual_subscribe(observer))
  }
}

impl<Key, S, Item, Err> ObservableExt<Item, Err> for GroupedObservable<Key, S, Item, Err> {}

impl<Key, S, Item, Err> Drain for GroupedObservable<Key, S, Item, Err> {
  type Err = Err;

  fn drain(mut self) -> Result<(), Err> {
    match self.source.take() {
      Some(source) => (self.release)(source),
      None => Ok(()),
    }
  }
}

impl<Key, S, Item, Err> Drop for GroupedObservable<Key, S, Item, Err> {
  fn drop(&mut self) {
    if let Some(source) = self.source.take() {
      if (self.release)(source).is_err() {
        warn!("sub-stream dropped unsubscribed failed while draining");
      }
    }
  }
}

/// Observer used to drain a sub-stream: finished before it sees anything.
///
/// Values that still arrive are dropped unseen. A failure is kept so that
/// [`Drain::drain`] can report it.
pub struct DrainObserver<Err> {
  failure: Rc<RefCell<Option<Err>>>,
}

impl<Item, Err> Observer<Item, Err> for DrainObserver<Err> {
  #[inline]
  fn next(&mut self, _value: Item) {}

  fn error(self, err: Err) { *self.failure.borrow_mut() = Some(err); }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { true }
}

#[cfg(test)]
mod test {
  use std::{cell::Cell, rc::Rc};

  use crate::{prelude::*, subscription::ClosureSubscription};

  /// Upstream bookkeeping for one group.
  #[derive(Default)]
  struct Slot {
    subscribed: Cell<u32>,
    consumed: Cell<u32>,
    released: Cell<bool>,
  }

  type Group = GroupedObservable<u32, Create<Source, i32, Failure>, i32, Failure>;

  type Source = Box<dyn FnOnce(&mut dyn Emitter<i32, Failure>) -> Release>;
  type Release = ClosureSubscription<Box<dyn FnOnce()>>;

  fn group(key: u32, slot: &Rc<Slot>, fail: bool) -> Group {
    let slot = slot.clone();
    let f: Source = Box::new(move |emitter: &mut dyn Emitter<i32, Failure>| {
      slot.subscribed.set(slot.subscribed.get() + 1);
      if fail {
        emitter.error(Failure::msg("group failed"));
      }
      for v in 0..3 {
        if emitter.is_finished() {
          break;
        }
        slot.consumed.set(slot.consumed.get() + 1);
        emitter.next(v);
      }
      emitter.complete();
      let released = slot.clone();
      let teardown: Box<dyn FnOnce()> = Box::new(move || released.released.set(true));
      ClosureSubscription::new(teardown)
    });
    GroupedObservable::new(key, observable::create(f))
  }

  #[test]
  fn subscribing_consumes_the_group() {
    let slot = Rc::new(Slot::default());
    let mut values = vec![];
    let subscription = group(1, &slot, false).subscribe_all(|v| values.push(v), |_| {}, || {});

    assert_eq!(values, vec![0, 1, 2]);
    assert_eq!(slot.consumed.get(), 3);
    assert!(!slot.released.get());
    subscription.unsubscribe();
    assert!(slot.released.get());
  }

  #[test]
  fn drain_consumes_nothing_and_releases() {
    let slot = Rc::new(Slot::default());
    assert!(group(7, &slot, false).drain().is_ok());

    assert_eq!(slot.subscribed.get(), 1);
    assert_eq!(slot.consumed.get(), 0);
    assert!(slot.released.get());
  }

  #[test]
  fn drain_reports_the_group_failure() {
    let slot = Rc::new(Slot::default());
    let err = group(7, &slot, true).drain().unwrap_err();

    assert_eq!(err.to_string(), "group failed");
    assert_eq!(slot.consumed.get(), 0);
    assert!(slot.released.get());
  }

  #[test]
  fn dropping_an_unsubscribed_group_releases_it() {
    let slot = Rc::new(Slot::default());
    drop(group(3, &slot, false));

    assert_eq!(slot.subscribed.get(), 1);
    assert_eq!(slot.consumed.get(), 0);
    assert!(slot.released.get());
  }

  #[test]
  fn dropping_after_subscribe_does_not_drain_again() {
    let slot = Rc::new(Slot::default());
    let mut values = vec![];
    group(3, &slot, false)
      .subscribe_all(|v| values.push(v), |_| {}, || {})
      .unsubscribe();

    assert_eq!(values, vec![0, 1, 2]);
    assert_eq!(slot.subscribed.get(), 1);
  }

  #[test]
  fn failing_group_dropped_unsubscribed_is_released() {
    let slot = Rc::new(Slot::default());
    drop(group(3, &slot, true));

    assert_eq!(slot.consumed.get(), 0);
    assert!(slot.released.get());
  }

  fn four_groups(slots: &[Rc<Slot>]) -> Vec<Group> {
    slots
      .iter()
      .enumerate()
      .map(|(key, slot)| group(key as u32, slot, key == 3))
      .collect()
  }

  fn assert_released_unconsumed(slots: &[Rc<Slot>]) {
    for slot in slots {
      assert_eq!(slot.subscribed.get(), 1);
      assert_eq!(slot.consumed.get(), 0);
      assert!(slot.released.get());
    }
  }

  #[test]
  fn plain_filter_releases_rejected_groups() {
    let slots = (0..4).map(|_| Rc::new(Slot::default())).collect::<Vec<_>>();

    let mut kept = vec![];
    let mut completed = false;
    observable::from_iter(four_groups(&slots))
      .filter(|g| g.key == 0)
      .subscribe_all(|g| kept.push(g), |_: Failure| {}, || completed = true);

    assert_eq!(kept.len(), 1);
    assert!(completed);
    assert_eq!(slots[0].subscribed.get(), 0);
    assert_released_unconsumed(&slots[1..]);
  }

  #[test]
  fn draining_filter_releases_rejected_groups() {
    let slots = (0..4).map(|_| Rc::new(Slot::default())).collect::<Vec<_>>();

    let mut kept = vec![];
    let mut completed = false;
    observable::from_iter(four_groups(&slots))
      .filter(|g| g.key == 0)
      .drain_discarded()
      .subscribe_all(|g| kept.push(g), |_: Failure| {}, || completed = true);

    assert_eq!(kept.len(), 1);
    assert!(completed);
    // The kept group is untouched until its consumer subscribes.
    assert_eq!(slots[0].subscribed.get(), 0);
    assert_released_unconsumed(&slots[1..]);

    let mut values = vec![];
    kept.remove(0).subscribe_all(|v| values.push(v), |_| {}, || {});
    assert_eq!(values, vec![0, 1, 2]);
    assert_eq!(slots[0].consumed.get(), 3);
  }
}
