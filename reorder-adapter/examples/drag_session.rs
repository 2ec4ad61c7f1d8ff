use std::collections::HashMap;

use reorder::{BoundingBox, ItemDescriptor, Point, ReordererOptions, ScrollIntent};
use reorder_adapter::{Controller, ScrollArea};

fn layout(keys: &[&'static str]) -> HashMap<&'static str, BoundingBox> {
    keys.iter()
        .enumerate()
        .map(|(i, &k)| (k, BoundingBox::new(0.0, i as f64 * 30.0, 280.0, 30.0)))
        .collect()
}

fn main() {
    // Example: a controller driving one reorder gesture end to end, with FLIP
    // motions and auto-scroll ticking, without holding any UI objects.
    //
    // An adapter would:
    // - forward drag/pointer events from the host toolkit
    // - re-render in the new order whenever on_drag_enter returns true
    // - call sample_layout with its real measure primitive, then apply the
    //   pin/release transforms from for_each_motion
    // - call tick(now_ms, area) in a frame loop and scroll by the result
    let mut c = Controller::new(ReordererOptions::new());
    c.set_items(&[
        ItemDescriptor::new("alpha"),
        ItemDescriptor::new("bravo"),
        ItemDescriptor::new("charlie"),
    ]);

    let boxes = layout(c.reorderer().order().keys());
    c.on_drag_start(0, |k| boxes.get(k).copied());

    let moved = c.on_drag_enter(
        1,
        Point { x: 10.0, y: 35.0 },
        BoundingBox::new(0.0, 30.0, 280.0, 30.0),
        0,
    );
    println!("moved={moved} order={:?}", c.reorderer().order().keys());

    // The host re-rendered; sample the new layout and emit motions.
    let boxes = layout(c.reorderer().order().keys());
    c.sample_layout(|k| boxes.get(k).copied());
    c.for_each_motion(|key, motion| {
        println!(
            "{key}: pin={:?} release={:?}",
            motion.pin(),
            motion.release()
        );
    });

    // Pointer parked near the top edge: the scroller emits every 20ms while
    // scrollable distance remains.
    c.on_pointer_move(Point { x: 140.0, y: 8.0 }, 280.0, 400.0);
    let area = ScrollArea {
        scroll_y: 120.0,
        scroll_height: 900.0,
        viewport_height: 400.0,
        ..ScrollArea::default()
    };
    let mut now_ms = 0u64;
    let mut scrolled = ScrollIntent::default();
    while now_ms <= 100 {
        if let Some(delta) = c.tick(now_ms, &area) {
            scrolled.top += delta.top;
        }
        now_ms += 20;
    }
    println!("auto-scrolled by {scrolled:?}");

    if let Some(change) = c.on_drag_end() {
        println!("final: {:?}", change.new_order.keys());
    }
}
