use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use std::collections::HashMap;

use reorder::{BoundingBox, ItemDescriptor, Point, Reorderer, ReordererOptions, ScrollIntent};

fn descriptors(keys: &[char]) -> Vec<ItemDescriptor<char>> {
    keys.iter().map(|&k| ItemDescriptor::new(k)).collect()
}

/// A vertical list layout: 100x10 rows stacked from the top.
fn row(index: usize) -> BoundingBox {
    BoundingBox::new(0.0, index as f64 * 10.0, 100.0, 10.0)
}

fn row_pointer(index: usize) -> Point {
    Point {
        x: 1.0,
        y: index as f64 * 10.0 + 1.0,
    }
}

fn layout(order: &[char]) -> HashMap<char, BoundingBox> {
    order
        .iter()
        .enumerate()
        .map(|(i, &k)| (k, row(i)))
        .collect()
}

fn keys_of(r: &Reorderer<char>) -> Vec<char> {
    r.order().iter().copied().collect()
}

#[test]
fn canonical_key_strips_composite_namespaces() {
    assert_eq!(canonical_key("2.$item-3"), "item-3");
    assert_eq!(canonical_key("a.$b.$c"), "c");
    assert_eq!(canonical_key("item-3"), "item-3");
    assert_eq!(canonical_key(""), "");
}

#[test]
fn flip_produces_motion_only_for_moved_keys() {
    let mut flip = FlipAnimator::new();
    let before = layout(&['A', 'B', 'C']);
    flip.sample_layout(['A', 'B', 'C'].iter(), |k| before.get(k).copied());

    let after = layout(&['B', 'A', 'C']);
    flip.sample_layout(['A', 'B', 'C'].iter(), |k| after.get(k).copied());

    assert_eq!(
        flip.motion_for(&'A', 300),
        Some(FlipMotion {
            dx: 0.0,
            dy: -10.0,
            duration_ms: 300
        })
    );
    assert_eq!(
        flip.motion_for(&'B', 300),
        Some(FlipMotion {
            dx: 0.0,
            dy: 10.0,
            duration_ms: 300
        })
    );
    // C did not move: idempotence, no transform at all.
    assert_eq!(flip.motion_for(&'C', 300), None);
}

#[test]
fn flip_motion_has_pin_then_release_phases() {
    let motion = FlipMotion {
        dx: 0.0,
        dy: -20.0,
        duration_ms: 300,
    };

    let pin = motion.pin();
    assert_eq!(pin.translate_x, 0.0);
    assert_eq!(pin.translate_y, -20.0);
    assert_eq!(pin.transition_ms, 0);
    assert!(!pin.is_identity());

    let release = motion.release();
    assert!(release.is_identity());
    assert_eq!(release.transition_ms, 300);
}

#[test]
fn flip_skips_keys_that_just_appeared() {
    let mut flip = FlipAnimator::new();
    let before = layout(&['A', 'B']);
    flip.sample_layout(['A', 'B'].iter(), |k| before.get(k).copied());

    let after = layout(&['A', 'B', 'C']);
    flip.sample_layout(['A', 'B', 'C'].iter(), |k| after.get(k).copied());

    // C has no previous box: no delta to animate from.
    assert_eq!(flip.motion_for(&'C', 300), None);
}

#[test]
fn flip_skips_unmeasurable_keys() {
    let mut flip = FlipAnimator::new();
    let before = layout(&['A', 'B']);
    flip.sample_layout(['A', 'B'].iter(), |k| before.get(k).copied());

    // B's element went unmeasurable this pass.
    let after = layout(&['B', 'A']);
    flip.sample_layout(
        ['A', 'B'].iter(),
        |k| if *k == 'B' { None } else { after.get(k).copied() },
    );

    assert!(flip.motion_for(&'A', 300).is_some());
    assert_eq!(flip.motion_for(&'B', 300), None);
    assert_eq!(flip.current_box(&'B'), None);
}

#[test]
fn flip_treats_non_finite_deltas_as_no_movement() {
    let mut flip = FlipAnimator::new();
    let broken = BoundingBox::new(f64::NAN, f64::NAN, 100.0, 10.0);
    flip.sample_layout(['A'].iter(), |_| Some(broken));
    flip.sample_layout(['A'].iter(), |_| Some(row(1)));

    assert_eq!(flip.motion_for(&'A', 300), None);
}

#[test]
fn flip_zero_duration_still_maintains_the_baseline() {
    let mut flip = FlipAnimator::new();
    let a = layout(&['A', 'B']);
    flip.sample_layout(['A', 'B'].iter(), |k| a.get(k).copied());

    let b = layout(&['B', 'A']);
    flip.sample_layout(['A', 'B'].iter(), |k| b.get(k).copied());

    let mut motions = 0;
    flip.for_each_motion(0, |_, _| motions += 1);
    assert_eq!(motions, 0);

    // The zero-duration pass still rotated generations, so the next change
    // animates from the correct previous layout.
    let c = layout(&['A', 'B']);
    flip.sample_layout(['A', 'B'].iter(), |k| c.get(k).copied());
    assert_eq!(
        flip.motion_for(&'A', 300),
        Some(FlipMotion {
            dx: 0.0,
            dy: 10.0,
            duration_ms: 300
        })
    );
}

#[test]
fn autoscroll_emits_at_a_fixed_cadence() {
    let mut scroller = AutoScroller::new();
    let intent = Some(ScrollIntent { left: 0, top: 10 });
    let area = ScrollArea {
        scroll_y: 0.0,
        scroll_height: 1_000.0,
        viewport_height: 600.0,
        ..ScrollArea::default()
    };

    // First tick only primes the cadence.
    assert_eq!(scroller.tick(0, intent, &area), None);
    assert_eq!(scroller.tick(10, intent, &area), None);
    assert_eq!(scroller.tick(20, intent, &area), intent);
    assert_eq!(scroller.tick(25, intent, &area), None);
    assert_eq!(scroller.tick(40, intent, &area), intent);
}

#[test]
fn autoscroll_stops_without_remaining_distance() {
    let mut scroller = AutoScroller::new();
    let intent = Some(ScrollIntent { left: 0, top: 10 });
    // Already scrolled to the bottom.
    let area = ScrollArea {
        scroll_y: 400.0,
        scroll_height: 1_000.0,
        viewport_height: 600.0,
        ..ScrollArea::default()
    };

    assert_eq!(scroller.tick(0, intent, &area), None);
    assert_eq!(scroller.tick(20, intent, &area), None);
}

#[test]
fn autoscroll_negative_intent_needs_scrolled_content() {
    let up = ScrollIntent { left: 0, top: -10 };
    let at_top = ScrollArea {
        scroll_y: 0.0,
        scroll_height: 1_000.0,
        viewport_height: 600.0,
        ..ScrollArea::default()
    };
    let scrolled = ScrollArea {
        scroll_y: 50.0,
        ..at_top
    };

    assert!(!at_top.has_room(up));
    assert!(scrolled.has_room(up));
}

#[test]
fn autoscroll_clearing_the_intent_resets_the_cadence() {
    let mut scroller = AutoScroller::new();
    let intent = Some(ScrollIntent { left: -5, top: 0 });
    let area = ScrollArea {
        scroll_x: 100.0,
        scroll_width: 1_000.0,
        viewport_width: 600.0,
        ..ScrollArea::default()
    };

    assert_eq!(scroller.tick(0, intent, &area), None);
    assert_eq!(scroller.tick(20, intent, &area), intent);

    // Intent gone: cadence clears, the next intent has to prime again.
    assert_eq!(scroller.tick(40, None, &area), None);
    assert_eq!(scroller.tick(60, intent, &area), None);
    assert_eq!(scroller.tick(80, intent, &area), intent);
}

#[test]
fn controller_drives_a_full_reorder_with_flip_motions() {
    let mut c = Controller::new(ReordererOptions::new());
    c.set_items(&descriptors(&['A', 'B', 'C', 'D']));

    let before = layout(&keys_of(c.reorderer()));
    c.on_drag_start(0, |k| before.get(k).copied());
    assert!(c.reorderer().is_dragging());

    assert!(c.on_drag_enter(2, row_pointer(2), row(2), 0));
    assert_eq!(keys_of(c.reorderer()), vec!['B', 'C', 'A', 'D']);

    // Host re-renders in the new order, then samples.
    let after = layout(&keys_of(c.reorderer()));
    c.sample_layout(|k| after.get(k).copied());

    let mut motions: HashMap<char, FlipMotion> = HashMap::new();
    c.for_each_motion(|k, m| {
        motions.insert(*k, m);
    });

    // A jumped down two rows, B and C each slid up one. D never moved.
    assert_eq!(motions[&'A'].dy, -20.0);
    assert_eq!(motions[&'B'].dy, 10.0);
    assert_eq!(motions[&'C'].dy, 10.0);
    assert!(!motions.contains_key(&'D'));
    assert_eq!(motions[&'A'].pin().transition_ms, 0);
    assert_eq!(motions[&'A'].release().transition_ms, 300);

    let change = c.on_drag_end().expect("order changed");
    assert_eq!((change.start, change.end), (0, 2));
    assert_eq!(change.old_order.keys(), &['A', 'B', 'C', 'D']);
    assert_eq!(change.new_order.keys(), &['B', 'C', 'A', 'D']);

    c.revert(&change);
    assert_eq!(keys_of(c.reorderer()), vec!['A', 'B', 'C', 'D']);
}

#[test]
fn controller_zero_duration_reorders_without_motion() {
    let mut c = Controller::new(ReordererOptions::new().with_animation_duration_ms(0));
    c.set_items(&descriptors(&['A', 'B', 'C']));

    let before = layout(&keys_of(c.reorderer()));
    c.on_drag_start(0, |k| before.get(k).copied());
    assert!(c.on_drag_enter(1, row_pointer(1), row(1), 0));
    assert_eq!(keys_of(c.reorderer()), vec!['B', 'A', 'C']);

    let after = layout(&keys_of(c.reorderer()));
    c.sample_layout(|k| after.get(k).copied());

    let mut motions = 0;
    c.for_each_motion(|_, _| motions += 1);
    assert_eq!(motions, 0);
}

#[test]
fn controller_suppresses_motion_while_auto_scrolling() {
    let mut c = Controller::new(ReordererOptions::new());
    c.set_items(&descriptors(&['A', 'B', 'C']));

    let before = layout(&keys_of(c.reorderer()));
    c.on_drag_start(0, |k| before.get(k).copied());
    assert_eq!(c.effective_animation_duration_ms(), 300);

    // Pointer parked at the top edge: scrolling takes over, animation off.
    c.on_pointer_move(Point { x: 400.0, y: 10.0 }, 800.0, 600.0);
    assert!(c.reorderer().scroll_intent().is_some());
    assert_eq!(c.effective_animation_duration_ms(), 0);

    c.on_pointer_move(Point { x: 400.0, y: 300.0 }, 800.0, 600.0);
    assert_eq!(c.effective_animation_duration_ms(), 300);

    // No drag in flight: nothing animates either.
    c.on_drag_end();
    assert_eq!(c.effective_animation_duration_ms(), 0);
}

#[test]
fn controller_ticks_auto_scroll_while_near_an_edge() {
    let mut c = Controller::new(ReordererOptions::new());
    c.set_items(&descriptors(&['A', 'B', 'C']));

    let before = layout(&keys_of(c.reorderer()));
    c.on_drag_start(0, |k| before.get(k).copied());
    c.on_pointer_move(Point { x: 400.0, y: 10.0 }, 800.0, 600.0);

    let area = ScrollArea {
        scroll_y: 50.0,
        scroll_height: 1_000.0,
        viewport_height: 600.0,
        ..ScrollArea::default()
    };
    assert_eq!(c.tick(0, &area), None);
    assert_eq!(
        c.tick(20, &area),
        Some(ScrollIntent { left: 0, top: -10 })
    );

    // Drag ends: intent and cadence are gone.
    c.on_drag_end();
    assert_eq!(c.tick(40, &area), None);
}

#[test]
fn controller_set_items_mid_drag_cancels_the_gesture() {
    let mut c = Controller::new(ReordererOptions::new().with_preserve_order(true));
    c.set_items(&descriptors(&['A', 'B', 'C', 'D']));

    let before = layout(&keys_of(c.reorderer()));
    c.on_drag_start(0, |k| before.get(k).copied());

    c.set_items(&descriptors(&['A', 'B', 'C', 'D', 'E']));
    assert!(!c.reorderer().is_dragging());
    assert_eq!(keys_of(c.reorderer()), vec!['A', 'B', 'C', 'D', 'E']);
}

#[test]
fn controller_render_items_follow_the_order() {
    let mut c = Controller::new(ReordererOptions::new());
    c.set_items(&[
        ItemDescriptor::new('A'),
        ItemDescriptor::locked('B'),
    ]);

    let mut seen = Vec::new();
    c.for_each_render_item(|item| seen.push((*item.key, item.draggable)));
    assert_eq!(seen, vec![('A', true), ('B', false)]);
}
