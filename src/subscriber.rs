//! The one-shot termination guard that producers talk to.

use crate::observer::{Emitter, Observer};

/// Guards a chain against signals after termination.
///
/// A `Subscriber` is either active (it still owns the head observer of the
/// chain) or terminated. The first `error` or `complete` moves it from the
/// first state to the second; every entry point checks the state before doing
/// anything, so a misbehaving producer cannot deliver a second terminal
/// signal or a value after one.
pub struct Subscriber<O> {
  observer: Option<O>,
}

impl<O> Subscriber<O> {
  #[inline]
  pub fn new(observer: O) -> Self { Subscriber { observer: Some(observer) } }
}

impl<O, Item, Err> Emitter<Item, Err> for Subscriber<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    match &mut self.observer {
      Some(observer) => observer.next(value),
      None => trace!("value dropped: subscriber already terminated"),
    }
  }

  fn error(&mut self, err: Err) {
    match self.observer.take() {
      Some(observer) => observer.error(err),
      None => trace!("error dropped: subscriber already terminated"),
    }
  }

  fn complete(&mut self) {
    match self.observer.take() {
      Some(observer) => observer.complete(),
      None => trace!("completion dropped: subscriber already terminated"),
    }
  }

  #[inline]
  fn is_finished(&self) -> bool { Observer::<Item, Err>::is_finished(&self.observer) }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  #[derive(Debug, PartialEq)]
  enum Signal {
    Next(i32),
    Error(&'static str),
    Complete,
  }

  struct Log(Rc<RefCell<Vec<Signal>>>);

  impl Observer<i32, &'static str> for Log {
    fn next(&mut self, value: i32) { self.0.borrow_mut().push(Signal::Next(value)); }

    fn error(self, err: &'static str) { self.0.borrow_mut().push(Signal::Error(err)); }

    fn complete(self) { self.0.borrow_mut().push(Signal::Complete); }

    fn is_finished(&self) -> bool { false }
  }

  #[test]
  fn forwards_until_complete() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut subscriber = Subscriber::new(Log(log.clone()));
    {
      let emitter: &mut dyn Emitter<i32, &'static str> = &mut subscriber;
      emitter.next(1);
      emitter.next(2);
      assert!(!emitter.is_finished());
      emitter.complete();
      assert!(emitter.is_finished());
    }
    assert!(subscriber.observer.is_none());

    assert_eq!(*log.borrow(), vec![Signal::Next(1), Signal::Next(2), Signal::Complete]);
  }

  #[test]
  fn drops_everything_after_termination() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut subscriber = Subscriber::new(Log(log.clone()));
    let emitter: &mut dyn Emitter<i32, &'static str> = &mut subscriber;
    emitter.next(1);
    emitter.error("first");
    emitter.next(2);
    emitter.error("second");
    emitter.complete();

    assert_eq!(*log.borrow(), vec![Signal::Next(1), Signal::Error("first")]);
  }
}
