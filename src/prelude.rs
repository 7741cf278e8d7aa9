//! Prelude module for convenient imports
//!
//! Re-exports the whole public surface: the channel, the subscription handle,
//! the operator factories, and the composition traits.

pub use crate::channel::Channel;
pub use crate::ops::{first, take, take_until, tap, FirstOp, Pipe, TakeOp, TakeUntilOp, TapOp, Transform};
pub use crate::subscription::Subscription;
