//! Stream operators and the `pipe` composition machinery.
//!
//! Each operator is a factory (`first()`, `take(n)`, `take_until(signal)`,
//! `tap(f)`) returning a small struct that implements [`Transform`]. A
//! transform consumes an upstream [`Channel`] and produces the derived stage,
//! wiring up its own relay subscription and teardown logic as a side effect.
//! [`Channel::pipe`] composes a tuple of transforms left to right.

pub mod first;
pub mod take;
pub mod take_until;
pub mod tap;

pub use first::{first, FirstOp};
pub use take::{take, TakeOp};
pub use take_until::{take_until, TakeUntilOp};
pub use tap::{tap, TapOp};

use crate::channel::Channel;

/// One pipeline stage: turn an upstream channel into its derived channel.
///
/// Applying a transform is eager: the relay subscribes to `upstream`
/// immediately, and its private teardown state (counters, the relay's own
/// subscription handle) is created fresh per application. A transform value
/// is therefore meant for exactly one `pipe` use.
pub trait Transform<Item> {
  /// Item type of the derived channel. Most operators preserve the upstream
  /// item type; `take` degrades to payload-less pulses.
  type OutItem;

  fn apply(self, upstream: Channel<Item>) -> Channel<Self::OutItem>;
}

/// A tuple of transforms applied left to right by [`Channel::pipe`].
///
/// The empty tuple is identity. Implemented for tuples up to arity 8, each
/// stage feeding the next: `(a, b)` applies `a` to the source channel and
/// `b` to `a`'s output.
pub trait Pipe<Item> {
  type Output;

  fn compose(self, channel: Channel<Item>) -> Self::Output;
}

impl<Item> Pipe<Item> for () {
  type Output = Channel<Item>;

  #[inline]
  fn compose(self, channel: Channel<Item>) -> Channel<Item> { channel }
}

macro_rules! impl_pipe_for_tuple {
  ($head: ident $(, $tail: ident)*) => {
    impl<Item, $head $(, $tail)*> Pipe<Item> for ($head, $($tail,)*)
    where
      $head: Transform<Item>,
      ($($tail,)*): Pipe<$head::OutItem>,
    {
      type Output = <($($tail,)*) as Pipe<$head::OutItem>>::Output;

      #[allow(non_snake_case)]
      fn compose(self, channel: Channel<Item>) -> Self::Output {
        let ($head, $($tail,)*) = self;
        ($($tail,)*).compose($head.apply(channel))
      }
    }
  };
}

impl_pipe_for_tuple!(A);
impl_pipe_for_tuple!(A, B);
impl_pipe_for_tuple!(A, B, C);
impl_pipe_for_tuple!(A, B, C, D);
impl_pipe_for_tuple!(A, B, C, D, E);
impl_pipe_for_tuple!(A, B, C, D, E, F);
impl_pipe_for_tuple!(A, B, C, D, E, F, G);
impl_pipe_for_tuple!(A, B, C, D, E, F, G, H);
