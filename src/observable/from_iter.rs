use crate::{
  observable::{Observable, ObservableExt},
  observer::{Emitter, Observer},
  subscriber::Subscriber,
};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted, or stops early once the
/// subscriber reports it is finished. Never emits an error; the error type is
/// whatever the rest of the chain needs.
///
/// ```
/// use rxchain::prelude::*;
///
/// let mut sum = 0;
/// observable::from_iter(vec![0, 1, 2, 3]).subscribe(|v| sum += v);
/// assert_eq!(sum, 6);
/// ```
pub fn from_iter<Iter>(iter: Iter) -> ObservableIter<Iter>
where
  Iter: IntoIterator,
{
  ObservableIter(iter)
}

#[derive(Clone)]
pub struct ObservableIter<Iter>(Iter);

impl<Iter, Err, O> Observable<Iter::Item, Err, O> for ObservableIter<Iter>
where
  Iter: IntoIterator,
  O: Observer<Iter::Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let mut subscriber = Subscriber::new(observer);
    for v in self.0 {
      if Emitter::<Iter::Item, Err>::is_finished(&subscriber) {
        break;
      }
      Emitter::<Iter::Item, Err>::next(&mut subscriber, v);
    }
    Emitter::<Iter::Item, Err>::complete(&mut subscriber);
  }
}

impl<Iter, Err> ObservableExt<Iter::Item, Err> for ObservableIter<Iter> where Iter: IntoIterator {}
