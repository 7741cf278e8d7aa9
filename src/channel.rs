use crate::{
  ops::Pipe,
  subscribers::{RcCallback, Subscribers},
  subscription::Subscription,
};
use smallvec::SmallVec;
use std::{
  borrow::Cow,
  cell::RefCell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

/// A hot multicast broadcast point.
///
/// A `Channel` holds an ordered list of observer callbacks and pushes every
/// emitted value to each of them synchronously, in subscription order. It is
/// a cheaply clonable handle: clones share the same observer list, so a clone
/// *is* the same channel.
///
/// # Re-Entrancy Policy
///
/// Delivery is fully synchronous and depth-first. Observers may freely
/// `subscribe`, `unsubscribe`, or `complete` any channel (including this one)
/// and `emit` on *other* channels while a delivery pass is running; `emit`
/// iterates a snapshot of the observer list taken at call start, so such
/// mutation never skips or double-invokes a sibling. Emitting on a channel
/// from inside one of that same channel's observers is not supported.
///
/// # Example
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
///
/// use fanout::prelude::*;
///
/// let clicks = Channel::labeled("clicks");
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let c_seen = seen.clone();
///
/// clicks
///   .pipe((first(),))
///   .subscribe(move |v: &i32| c_seen.borrow_mut().push(*v));
///
/// clicks.emit(&1);
/// clicks.emit(&2);
/// assert_eq!(*seen.borrow(), vec![1]);
/// ```
pub struct Channel<Item> {
  core: Rc<RefCell<ChannelCore<Item>>>,
}

struct ChannelCore<Item> {
  observers: Subscribers<Item>,
  label: Option<Cow<'static, str>>,
  completed: bool,
}

impl<Item> Clone for Channel<Item> {
  #[inline]
  fn clone(&self) -> Self { Channel { core: self.core.clone() } }
}

impl<Item> Default for Channel<Item> {
  fn default() -> Self { Self::new() }
}

impl<Item> Channel<Item> {
  /// Create an unlabeled channel.
  pub fn new() -> Self { Self::with_label(None) }

  /// Create a channel carrying a diagnostic label.
  ///
  /// The label has no behavioral effect; it only shows up in `Debug` output.
  /// `complete` clears it.
  pub fn labeled(label: impl Into<Cow<'static, str>>) -> Self { Self::with_label(Some(label.into())) }

  fn with_label(label: Option<Cow<'static, str>>) -> Self {
    Channel {
      core: Rc::new(RefCell::new(ChannelCore {
        observers: Subscribers::default(),
        label,
        completed: false,
      })),
    }
  }

  /// Register `observer` and return a handle that can detach it again.
  ///
  /// Observers are appended unconditionally: subscribing twice registers two
  /// independent entries, each with its own handle. On a completed channel
  /// this is a silent no-op that returns an already-closed handle which can
  /// never fire.
  pub fn subscribe(&self, observer: impl FnMut(&Item) + 'static) -> Subscription<Item> {
    let mut core = self.core.borrow_mut();
    if core.completed {
      return Subscription::closed();
    }
    let callback: RcCallback<Item> = Rc::new(RefCell::new(observer));
    let id = core.observers.add(callback);
    Subscription::active(self.clone(), id)
  }

  /// Detach the observer registered under `id`. No-op if already gone.
  pub(crate) fn unsubscribe(&self, id: usize) { self.core.borrow_mut().observers.remove(id); }

  /// Push `value` to every observer registered right now, in subscription
  /// order. No-op after `complete`.
  ///
  /// The pass runs over a snapshot of the observer list, so observers may
  /// unsubscribe themselves or others mid-delivery without disturbing the
  /// current pass; list changes take effect from the next `emit` on. If an
  /// observer panics the panic propagates and the rest of the pass is
  /// skipped.
  pub fn emit(&self, value: &Item) {
    let snapshot: SmallVec<[RcCallback<Item>; 2]> = {
      let core = self.core.borrow();
      if core.completed {
        return;
      }
      core.observers.snapshot()
    };
    for observer in snapshot {
      (observer.borrow_mut())(value);
    }
  }

  /// Clear every observer and freeze the channel.
  ///
  /// Idempotent. Afterwards `emit` delivers nothing, `subscribe` returns
  /// inert handles, and the label is cleared. There is no re-open.
  pub fn complete(&self) {
    let mut core = self.core.borrow_mut();
    core.observers.clear();
    core.label = None;
    core.completed = true;
  }

  /// Apply operator transforms left to right and return the final stage.
  ///
  /// `transforms` is a tuple of values produced by the operator factories
  /// ([`first()`](crate::ops::first()), [`take()`](crate::ops::take()),
  /// [`take_until()`](crate::ops::take_until()),
  /// [`tap()`](crate::ops::tap())). The empty tuple is identity: it hands
  /// back this channel unchanged.
  pub fn pipe<P: Pipe<Item>>(&self, transforms: P) -> P::Output { transforms.compose(self.clone()) }

  /// Number of currently registered observers.
  ///
  /// Operators use this to decide whether anybody downstream still cares.
  #[inline]
  pub fn observer_count(&self) -> usize { self.core.borrow().observers.len() }

  /// Whether `complete` has run.
  #[inline]
  pub fn is_completed(&self) -> bool { self.core.borrow().completed }

  /// The diagnostic label, if any. `None` once completed.
  pub fn label(&self) -> Option<Cow<'static, str>> { self.core.borrow().label.clone() }
}

impl Channel<()> {
  /// Emit a payload-less pulse on a signal-only channel.
  #[inline]
  pub fn pulse(&self) { self.emit(&()) }
}

impl<Item> Debug for Channel<Item> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let core = self.core.borrow();
    f.debug_struct("Channel")
      .field("label", &core.label)
      .field("observers", &core.observers.len())
      .field("completed", &core.completed)
      .finish()
  }
}
