use crate::{channel::Channel, ops::Transform};
use std::{cell::RefCell, rc::Rc};

/// Relay upstream values unchanged until `signal` fires.
///
/// The derived channel forwards every upstream value (payload-preserving)
/// while it has at least one observer. The first pulse on `signal`, whatever
/// its payload, detaches the relay from upstream and completes the derived
/// channel; later signal pulses are no-ops. The signal subscription itself is
/// never detached — by convention the signal completes shortly after firing
/// and clears its own list.
pub fn take_until<Signal>(signal: Channel<Signal>) -> TakeUntilOp<Signal> {
  TakeUntilOp { signal }
}

pub struct TakeUntilOp<Signal> {
  signal: Channel<Signal>,
}

impl<Item: 'static, Signal: 'static> Transform<Item> for TakeUntilOp<Signal> {
  type OutItem = Item;

  fn apply(self, upstream: Channel<Item>) -> Channel<Item> {
    let downstream = Channel::labeled("take_until");
    let relay = downstream.clone();

    let sub = upstream.subscribe(move |value| {
      if relay.observer_count() == 0 {
        return;
      }
      relay.emit(value);
    });

    let relay_sub = Rc::new(RefCell::new(Some(sub)));
    let stop = downstream.clone();
    self.signal.subscribe(move |_| {
      if let Some(mut sub) = relay_sub.borrow_mut().take() {
        sub.unsubscribe();
      }
      stop.complete();
    });

    downstream
  }
}
