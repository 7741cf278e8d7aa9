use crate::{channel::Channel, ops::Transform};

/// Run a side effect for every value, transparently.
///
/// `tap` subscribes `func` to the upstream channel as an ordinary observer
/// and hands the *same* channel back, so it is invisible to the stages after
/// it. It never unsubscribes or completes on its own; the side effect lives
/// exactly as long as the upstream channel does, and runs once per value no
/// matter how many terminal subscribers exist (including none).
pub fn tap<F>(func: F) -> TapOp<F> { TapOp { func } }

pub struct TapOp<F> {
  func: F,
}

impl<Item: 'static, F> Transform<Item> for TapOp<F>
where
  F: FnMut(&Item) + 'static,
{
  type OutItem = Item;

  fn apply(self, upstream: Channel<Item>) -> Channel<Item> {
    let mut func = self.func;
    upstream.subscribe(move |value| func(value));
    upstream
  }
}
