//! End-to-end pipeline scenarios: several derived stages fed by one root
//! channel, with mid-stream unsubscription and a destroy signal.

use fanout::prelude::*;
use std::{cell::Cell, rc::Rc};

fn counter() -> (Rc<Cell<u32>>, impl Fn()) {
  let count = Rc::new(Cell::new(0));
  let c_count = count.clone();
  (count, move || c_count.set(c_count.get() + 1))
}

#[test]
fn take_two_detaches_after_the_second_pulse() {
  let root: Channel<i32> = Channel::new();
  let derived = root.pipe((take(2),));

  let (pulses, bump) = counter();
  derived.subscribe(move |_: &()| bump());

  root.emit(&1);
  root.emit(&2);
  root.emit(&3);

  assert_eq!(pulses.get(), 2);
  assert!(derived.is_completed());
  // The relay left the root's observer list after the second delivery.
  assert_eq!(root.observer_count(), 0);
}

#[test]
fn four_pipelines_share_one_root() {
  let pending: Channel<i32> = Channel::labeled("pending");
  let destroy: Channel<()> = Channel::new();

  // first + tap
  let (first_taps, bump_first_tap) = counter();
  let (first_hits, bump_first) = counter();
  pending
    .pipe((first(), tap(move |_: &i32| bump_first_tap())))
    .subscribe(move |_: &i32| bump_first());

  // identity pipe
  let (plain_hits, bump_plain) = counter();
  let mut plain_sub = pending.pipe(()).subscribe(move |_: &i32| bump_plain());

  // counted pulse relay
  let (take_hits, bump_take) = counter();
  pending.pipe((take(3),)).subscribe(move |_: &()| bump_take());

  // destroy-gated relay + tap
  let (until_taps, bump_until_tap) = counter();
  let (until_hits, bump_until) = counter();
  pending
    .pipe((take_until(destroy.clone()), tap(move |_: &i32| bump_until_tap())))
    .subscribe(move |_: &i32| bump_until());

  pending.emit(&1);
  plain_sub.unsubscribe();
  pending.emit(&2);
  pending.emit(&3);
  pending.emit(&4);

  destroy.pulse();
  destroy.complete();
  pending.emit(&5);

  // first fired exactly once, for the very first value.
  assert_eq!(first_hits.get(), 1);
  assert_eq!(first_taps.get(), 1);
  // The plain observer only saw the value before it unsubscribed.
  assert_eq!(plain_hits.get(), 1);
  // take(3) capped its pulses.
  assert_eq!(take_hits.get(), 3);
  // take_until relayed everything up to the destroy signal, nothing after.
  assert_eq!(until_hits.get(), 4);
  assert_eq!(until_taps.get(), 4);

  // Every relay has torn itself down; the root is empty but still live.
  assert_eq!(pending.observer_count(), 0);
  assert!(!pending.is_completed());
  assert!(destroy.is_completed());
}

#[test]
fn destroy_signal_completes_cleanly_before_any_value() {
  let pending: Channel<i32> = Channel::new();
  let destroy: Channel<()> = Channel::new();

  let (hits, bump) = counter();
  let derived = pending.pipe((take_until(destroy.clone()),));
  derived.subscribe(move |_: &i32| bump());

  destroy.pulse();
  destroy.complete();
  pending.emit(&1);

  assert_eq!(hits.get(), 0);
  assert!(derived.is_completed());
}
