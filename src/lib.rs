//! # fanout: a push-based multicast channel
//!
//! A minimal, synchronous, single-threaded broadcast primitive: a
//! [`Channel`] fans every emitted value out to its observers in subscription
//! order, and a small set of composable operators derives new channels from
//! existing ones while managing their own relay lifecycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//!
//! use fanout::prelude::*;
//!
//! let events: Channel<i32> = Channel::labeled("events");
//! let destroy: Channel<()> = Channel::new();
//!
//! let hits = Rc::new(Cell::new(0));
//! let c_hits = hits.clone();
//! events
//!   .pipe((take_until(destroy.clone()), tap(|v: &i32| println!("saw {v}"))))
//!   .subscribe(move |_| c_hits.set(c_hits.get() + 1));
//!
//! events.emit(&1);
//! events.emit(&2);
//! destroy.pulse();
//! events.emit(&3);
//!
//! assert_eq!(hits.get(), 2);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Channel`] | Multicast broadcast point; `emit` notifies observers synchronously |
//! | [`Subscription`] | Handle to detach one observer from one channel |
//! | [`Transform`] | One pipeline stage, produced by an operator factory |
//! | [`Pipe`] | Tuple of transforms composed left to right by [`Channel::pipe`] |
//!
//! Operators: [`first()`](ops::first()), [`take()`](ops::take()),
//! [`take_until()`](ops::take_until()), [`tap()`](ops::tap()).
//!
//! ## Model
//!
//! Everything is cooperative and synchronous: no queues, no threads, no
//! backpressure, no error channel, no replay for late subscribers. One root
//! `emit` cascades depth-first through every derived stage before it
//! returns. Cancellation is explicit via [`Subscription::unsubscribe`];
//! operators cancel their own upstream relays when their termination
//! condition fires.
//!
//! [`Channel`]: channel::Channel
//! [`Channel::pipe`]: channel::Channel::pipe
//! [`Subscription`]: subscription::Subscription
//! [`Transform`]: ops::Transform
//! [`Pipe`]: ops::Pipe

pub mod channel;
pub mod ops;
pub mod prelude;
pub mod subscription;

mod subscribers;

pub use prelude::*;
