// Example: a full drag gesture driven headlessly.
use reorder::{BoundingBox, ItemDescriptor, Point, Reorderer, ReordererOptions};

fn main() {
    let mut r = Reorderer::new(ReordererOptions::new());
    r.reconcile(&[
        ItemDescriptor::new("alpha"),
        ItemDescriptor::new("bravo"),
        ItemDescriptor::new("charlie"),
        ItemDescriptor::new("delta"),
    ]);
    println!("initial: {:?}", r.order().keys());

    // A vertical list of 40px rows; the user grabs the first row and drags
    // it over the third.
    let row = |i: usize| BoundingBox::new(0.0, i as f64 * 40.0, 320.0, 40.0);
    r.drag_start(0, Some(row(0)));
    let moved = r.drag_enter(
        2,
        Point {
            x: 10.0,
            y: 2.0 * 40.0 + 5.0,
        },
        row(2),
        0,
    );
    println!("moved={moved} order={:?}", r.order().keys());

    if let Some(change) = r.drag_end() {
        println!(
            "drag finished: {} -> {} ({:?} => {:?})",
            change.start,
            change.end,
            change.old_order.keys(),
            change.new_order.keys()
        );
    }
}
