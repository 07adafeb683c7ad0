//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Core traits
pub use crate::observable::{Observable, ObservableExt};
// Creation
pub use crate::observable::{Create, Empty, LiftOp, ObservableIter, OfObservable, ThrowErr};
// Observer traits
pub use crate::observer::{Emitter, FnMutObserver, Observer, ObserverAll};
// Operators
pub use crate::operator::{assemble, Compose, Identity, Operator, OperatorExt};
pub use crate::ops::{
  filter::{DrainDiscarded, DropDiscarded, Filter, OnDiscard, Predicate},
  tap::{Inspect, Inspector, Tap},
};
// Sub-streams
pub use crate::substream::{Drain, DrainObserver, GroupedObservable};
// Subscription
pub use crate::subscription::{ClosureSubscription, Subscription};
pub use crate::{error::Failure, observable, ops, subscriber::Subscriber};
