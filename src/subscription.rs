use crate::channel::Channel;
use std::fmt::{Debug, Formatter};

/// Handle coupling one channel and one registered observer.
///
/// Returned by [`Channel::subscribe`]; lets the caller detach exactly that
/// observer later without holding a reference to the callback itself.
///
/// Unsubscribing is explicit and cooperative: dropping the handle does *not*
/// detach the observer. [`unsubscribe`](Subscription::unsubscribe) drains the
/// handle on first use, so a second call is a safe no-op and a spent handle
/// can never detach an observer registered afterwards.
pub struct Subscription<Item> {
  target: Option<(Channel<Item>, usize)>,
}

impl<Item> Subscription<Item> {
  pub(crate) fn active(channel: Channel<Item>, id: usize) -> Self {
    Subscription { target: Some((channel, id)) }
  }

  /// A handle that was never attached, as returned when subscribing to a
  /// completed channel.
  pub(crate) fn closed() -> Self { Subscription { target: None } }

  /// Detach the observer this handle was created for. Idempotent.
  pub fn unsubscribe(&mut self) {
    if let Some((channel, id)) = self.target.take() {
      channel.unsubscribe(id);
    }
  }

  /// Whether the handle has been torn down (or was never live).
  #[inline]
  pub fn is_closed(&self) -> bool { self.target.is_none() }
}

impl<Item> Debug for Subscription<Item> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription")
      .field("is_closed", &self.is_closed())
      .finish()
  }
}
