use crate::{channel::Channel, ops::Transform, subscription::Subscription};
use std::{cell::RefCell, rc::Rc};

/// Relay at most one upstream value, then tear down.
///
/// The derived channel delivers the first upstream value that arrives while
/// it has at least one observer, then completes and detaches its relay from
/// upstream. Values arriving while nobody is attached downstream are dropped;
/// there is no replay for late subscribers.
pub fn first() -> FirstOp { FirstOp }

pub struct FirstOp;

impl<Item: 'static> Transform<Item> for FirstOp {
  type OutItem = Item;

  fn apply(self, upstream: Channel<Item>) -> Channel<Item> {
    let downstream = Channel::labeled("first");
    let relay = downstream.clone();
    let relay_sub: Rc<RefCell<Option<Subscription<Item>>>> = Rc::new(RefCell::new(None));
    let own_sub = relay_sub.clone();

    let sub = upstream.subscribe(move |value| {
      if relay.observer_count() == 0 {
        return;
      }
      relay.emit(value);
      relay.complete();
      if let Some(mut sub) = own_sub.borrow_mut().take() {
        sub.unsubscribe();
      }
    });
    *relay_sub.borrow_mut() = Some(sub);

    downstream
  }
}
