//! # rxchain: operator chains for push-based streams
//!
//! A chain of operators is assembled at subscription time into a single
//! observer. The producer pushes `next`, `error` and `complete` signals into
//! the head of that chain and every stage forwards its own version of them,
//! synchronously, to the next one.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxchain::prelude::*;
//!
//! let mut evens = vec![];
//! observable::from_iter(1..=5)
//!   .tap_next(|v| {
//!     println!("saw {}", v);
//!     Ok(())
//!   })
//!   .filter(|v| v % 2 == 0)
//!   .subscribe(|v| evens.push(v));
//!
//! assert_eq!(evens, vec![2, 4]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observer`] | Consumes `next`, `error`, and `complete` signals |
//! | [`Operator`] | Turns a downstream observer into an upstream one |
//! | [`Observable`] | Something an observer can be subscribed to |
//! | [`Drain`] | Sub-stream values that must be released when discarded |
//!
//! ## Feature Flags
//!
//! - **`tracing`**: emit diagnostics (drain failures, callback failures) via
//!   the `tracing` crate.
//!
//! [`Observer`]: observer::Observer
//! [`Operator`]: operator::Operator
//! [`Observable`]: observable::Observable
//! [`Drain`]: substream::Drain

#[macro_use]
mod log;

pub mod error;
pub mod observable;
pub mod observer;
pub mod operator;
pub mod ops;
pub mod prelude;
pub mod subscriber;
pub mod subscription;
pub mod substream;

pub use prelude::*;
