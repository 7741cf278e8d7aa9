use crate::{channel::Channel, ops::Transform, subscription::Subscription};
use std::{cell::RefCell, rc::Rc};

/// Relay at most `count` upstream values as payload-less pulses.
///
/// The derived channel is a counted pulse relay: it notifies downstream once
/// per upstream value but forwards no payload. After the `count`th pulse it
/// completes and detaches its relay from upstream. Values arriving while the
/// derived channel has no observers are dropped without counting.
///
/// `take(0)` never emits; the first upstream value just completes the
/// derived channel and tears the relay down.
pub fn take(count: u32) -> TakeOp { TakeOp { count } }

pub struct TakeOp {
  count: u32,
}

impl<Item: 'static> Transform<Item> for TakeOp {
  type OutItem = ();

  fn apply(self, upstream: Channel<Item>) -> Channel<()> {
    let downstream = Channel::labeled("take");
    let relay = downstream.clone();
    let relay_sub: Rc<RefCell<Option<Subscription<Item>>>> = Rc::new(RefCell::new(None));
    let own_sub = relay_sub.clone();
    let count = self.count;
    // Emitted-pulse counter, private to this one pipe application.
    let mut emitted: u32 = 0;

    let sub = upstream.subscribe(move |_| {
      if relay.observer_count() == 0 {
        return;
      }
      if emitted >= count {
        // Only reachable for take(0): complete without ever emitting.
        relay.complete();
        if let Some(mut sub) = own_sub.borrow_mut().take() {
          sub.unsubscribe();
        }
        return;
      }
      relay.pulse();
      emitted += 1;
      if emitted == count {
        relay.complete();
        if let Some(mut sub) = own_sub.borrow_mut().take() {
          sub.unsubscribe();
        }
      }
    });
    *relay_sub.borrow_mut() = Some(sub);

    downstream
  }
}
