use reorder::{
    BoundingBox, ItemDescriptor, Point, PositionChange, RenderItem, Reorderer, ReordererOptions,
    ScrollIntent,
};

use crate::{AutoScroller, FlipAnimator, FlipMotion, ReordererKey, ScrollArea};

/// A framework-neutral composition root that wraps a [`reorder::Reorderer`]
/// and wires in FLIP animation and auto-scroll ticking.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag_start` / `on_drag_enter` / `on_drag_end` when drag events occur
/// - `on_pointer_move` / `on_pointer_up` for touch/pointer tracking
/// - `sample_layout(measure)` after applying the current order to the layout
/// - `tick(now_ms, area)` each frame/timer tick (for auto-scrolling)
///
/// A typical reorder frame:
/// 1. `on_drag_enter` returns `true` — the order changed.
/// 2. The host re-renders its elements in the new order, then calls
///    `sample_layout` with its `measure` primitive.
/// 3. `for_each_motion` yields a [`FlipMotion`] per moved element; the host
///    applies `pin()` synchronously and `release()` on the next paint
///    opportunity.
#[derive(Clone, Debug)]
pub struct Controller<K> {
    r: Reorderer<K>,
    flip: FlipAnimator<K>,
    scroller: AutoScroller,
}

impl<K: ReordererKey + Clone> Controller<K> {
    pub fn new(options: ReordererOptions<K>) -> Self {
        Self {
            r: Reorderer::new(options),
            flip: FlipAnimator::new(),
            scroller: AutoScroller::new(),
        }
    }

    pub fn from_reorderer(r: Reorderer<K>) -> Self {
        Self {
            r,
            flip: FlipAnimator::new(),
            scroller: AutoScroller::new(),
        }
    }

    pub fn reorderer(&self) -> &Reorderer<K> {
        &self.r
    }

    pub fn reorderer_mut(&mut self) -> &mut Reorderer<K> {
        &mut self.r
    }

    pub fn into_reorderer(self) -> Reorderer<K> {
        self.r
    }

    pub fn flip(&self) -> &FlipAnimator<K> {
        &self.flip
    }

    /// Reconciles against the host's current item collection.
    ///
    /// May force-cancel an active drag (see `Reorderer::reconcile`). Call
    /// `sample_layout` after the host applied the resulting order.
    pub fn set_items(&mut self, items: &[ItemDescriptor<K>]) {
        self.r.reconcile(items);
    }

    /// Starts a drag on the item at `index`, measuring the dragged element
    /// through `measure` and establishing the FLIP baseline for the gesture.
    pub fn on_drag_start(&mut self, index: usize, mut measure: impl FnMut(&K) -> Option<BoundingBox>) {
        let start_rect = self.r.key_at(index).and_then(|key| measure(key));
        self.r.drag_start(index, start_rect);
        self.flip.sample_layout(self.r.order().iter(), measure);
    }

    /// Forwards a drag-enter over the item at `index`.
    ///
    /// Returns `true` when the order changed; re-render, then call
    /// `sample_layout`.
    pub fn on_drag_enter(
        &mut self,
        index: usize,
        pointer: Point,
        hovered: BoundingBox,
        now_ms: u64,
    ) -> bool {
        self.r.drag_enter(index, pointer, hovered, now_ms)
    }

    /// Ends the active drag and stops auto-scrolling.
    pub fn on_drag_end(&mut self) -> Option<PositionChange<K>> {
        self.scroller.reset();
        self.r.drag_end()
    }

    /// Force-cancels the active drag (no position-change notification).
    pub fn cancel(&mut self) {
        self.scroller.reset();
        self.r.cancel_drag();
    }

    pub fn on_pointer_move(&mut self, pointer: Point, viewport_width: f64, viewport_height: f64) {
        self.r.pointer_move(pointer, viewport_width, viewport_height);
    }

    pub fn on_pointer_up(&mut self) {
        self.scroller.reset();
        self.r.pointer_up();
    }

    /// Advances auto-scrolling; the returned delta (if any) is the amount to
    /// scroll the viewport by this tick.
    pub fn tick(&mut self, now_ms: u64, area: &ScrollArea) -> Option<ScrollIntent> {
        self.scroller.tick(now_ms, self.r.scroll_intent(), area)
    }

    /// Restores the order a completed drag started from. Re-render, then
    /// call `sample_layout`.
    pub fn revert(&mut self, change: &PositionChange<K>) {
        self.r.revert(change);
    }

    /// Rotates the FLIP box generations and samples the current layout.
    ///
    /// Call once per order change, after the host's layout reflects the new
    /// order. Sampling happens even when animation is off so the baseline
    /// stays correct for the next change.
    pub fn sample_layout(&mut self, measure: impl FnMut(&K) -> Option<BoundingBox>) {
        self.flip.sample_layout(self.r.order().iter(), measure);
    }

    /// The duration motions should run with right now.
    ///
    /// Animation only plays while a drag is active and the pointer is not
    /// edge-scrolling; an auto-scrolling viewport and shifting items at the
    /// same time read as chaos, not motion.
    pub fn effective_animation_duration_ms(&self) -> u64 {
        if self.r.is_dragging() && self.r.scroll_intent().is_none() {
            self.r.options().animation_duration_ms
        } else {
            0
        }
    }

    /// Iterates the FLIP motions between the last two layout samples, using
    /// the effective duration.
    pub fn for_each_motion(&self, f: impl FnMut(&K, FlipMotion)) {
        self.flip
            .for_each_motion(self.effective_animation_duration_ms(), f);
    }

    /// Iterates the per-item render instructions in order sequence.
    pub fn for_each_render_item(&self, f: impl FnMut(RenderItem<'_, K>)) {
        self.r.for_each_item(f);
    }

    pub fn is_shift_animating(&self, now_ms: u64) -> bool {
        self.r.is_shift_animating(now_ms)
    }
}
