// Example: locked items keep their position while others shift around them.
use reorder::{BoundingBox, ItemDescriptor, Point, Reorderer, ReordererOptions};

fn main() {
    let mut r = Reorderer::new(ReordererOptions::new());
    r.reconcile(&[
        ItemDescriptor::new("inbox"),
        ItemDescriptor::locked("pinned"),
        ItemDescriptor::new("archive"),
        ItemDescriptor::new("trash"),
    ]);

    let row = |i: usize| BoundingBox::new(0.0, i as f64 * 32.0, 240.0, 32.0);
    r.drag_start(0, Some(row(0)));
    r.drag_enter(
        2,
        Point {
            x: 5.0,
            y: 2.0 * 32.0 + 4.0,
        },
        row(2),
        0,
    );
    // "pinned" stays at index 1 even though the drag crossed it.
    println!("order={:?}", r.order().keys());
    r.drag_end();

    r.for_each_item(|item| {
        println!(
            "#{} {:<8} draggable={}",
            item.index, item.key, item.draggable
        );
    });
}
