use smallvec::SmallVec;
use std::{cell::RefCell, rc::Rc};

/// A registered observer callback.
///
/// Observers are function-shaped: anything invocable with a reference to the
/// channel's item type. Each callback lives behind its own `Rc<RefCell<..>>`
/// so a delivery pass can run it after the channel core borrow has been
/// released.
pub type RcCallback<Item> = Rc<RefCell<dyn FnMut(&Item)>>;

/// Ordered, id-tagged observer storage for a channel.
///
/// - **Insertion order is delivery order**: `emit` walks entries in the order
///   they were added.
/// - **Ids are unique and never reused**: `next_id` only grows, so a stale
///   subscription handle can never detach an observer added later.
/// - **SmallVec Optimization**: `SmallVec<[_; 2]>` avoids heap allocation for
///   the common case of 0-2 observers.
pub(crate) struct Subscribers<Item> {
  next_id: usize,
  items: SmallVec<[(usize, RcCallback<Item>); 2]>,
}

impl<Item> Default for Subscribers<Item> {
  fn default() -> Self { Self { next_id: 0, items: SmallVec::new() } }
}

impl<Item> Subscribers<Item> {
  /// Append a callback and return its unique id.
  pub(crate) fn add(&mut self, callback: RcCallback<Item>) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push((id, callback));
    id
  }

  /// Remove the entry with `id`. Returns it if present, `None` otherwise.
  pub(crate) fn remove(&mut self, id: usize) -> Option<RcCallback<Item>> {
    self
      .items
      .iter()
      .position(|(i, _)| *i == id)
      .map(|pos| self.items.remove(pos).1)
  }

  /// Drop every entry at once.
  #[inline]
  pub(crate) fn clear(&mut self) { self.items.clear(); }

  /// Number of registered callbacks.
  #[inline]
  pub(crate) fn len(&self) -> usize { self.items.len() }

  /// Clone the callback list in delivery order.
  ///
  /// `emit` iterates this copy instead of the live list, so callbacks that
  /// subscribe or unsubscribe mid-delivery cannot corrupt the pass.
  pub(crate) fn snapshot(&self) -> SmallVec<[RcCallback<Item>; 2]> {
    self.items.iter().map(|(_, cb)| cb.clone()).collect()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn callback() -> RcCallback<i32> { Rc::new(RefCell::new(|_: &i32| {})) }

  #[test]
  fn ids_grow_and_never_repeat() {
    let mut subs = Subscribers::<i32>::default();
    let a = subs.add(callback());
    let b = subs.add(callback());
    assert_ne!(a, b);
    assert!(subs.remove(a).is_some());

    let c = subs.add(callback());
    assert_ne!(c, a);
    assert_ne!(c, b);
    assert_eq!(subs.len(), 2);
  }

  #[test]
  fn remove_missing_id_is_noop() {
    let mut subs = Subscribers::<i32>::default();
    let a = subs.add(callback());
    assert!(subs.remove(a).is_some());
    assert!(subs.remove(a).is_none());
    assert_eq!(subs.len(), 0);
  }

  #[test]
  fn snapshot_preserves_insertion_order() {
    let mut subs = Subscribers::<i32>::default();
    let first = callback();
    let second = callback();
    subs.add(first.clone());
    subs.add(second.clone());

    let snapshot = subs.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert!(Rc::ptr_eq(&snapshot[0], &first));
    assert!(Rc::ptr_eq(&snapshot[1], &second));
  }

  #[test]
  fn clear_empties_the_list() {
    let mut subs = Subscribers::<i32>::default();
    subs.add(callback());
    subs.add(callback());
    subs.clear();
    assert_eq!(subs.len(), 0);
    assert!(subs.snapshot().is_empty());
  }
}
