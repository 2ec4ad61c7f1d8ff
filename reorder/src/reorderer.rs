use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::key::{KeyFlagMap, KeyMapKey};
use crate::{
    BoundingBox, DragState, ItemDescriptor, Order, Point, PositionChange, RenderItem,
    ReordererOptions, ScrollIntent,
};

/// Horizontal auto-scroll step, px per tick.
const SCROLL_STEP_X: i32 = 5;
/// Vertical auto-scroll step, px per tick.
const SCROLL_STEP_Y: i32 = 10;

/// A headless drag-to-reorder engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with item keys, drag/pointer events, measured
///   boxes, and timestamps.
/// - Rendering is exposed via a zero-allocation iteration API
///   (`for_each_item`).
///
/// For FLIP animation and auto-scroll tick plumbing, see the
/// `reorder-adapter` crate.
#[derive(Clone, Debug)]
pub struct Reorderer<K> {
    options: ReordererOptions<K>,
    order: Order<K>,
    disabled: KeyFlagMap<K>,
    drag: Option<DragState<K>>,
    scroll_intent: Option<ScrollIntent>,
    shift_until_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: KeyMapKey + Clone> Reorderer<K> {
    /// Creates a new reorderer with an empty item set.
    ///
    /// Call [`Reorderer::reconcile`] with the host's items to populate it.
    pub fn new(options: ReordererOptions<K>) -> Self {
        rdebug!(
            enabled = options.enabled,
            preserve_order = options.preserve_order,
            "Reorderer::new"
        );
        Self {
            options,
            order: Order::new(),
            disabled: KeyFlagMap::new(),
            drag: None,
            scroll_intent: None,
            shift_until_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &ReordererOptions<K> {
        &self.options
    }

    pub fn set_options(&mut self, options: ReordererOptions<K>) {
        self.options = options;
        rtrace!(
            enabled = self.options.enabled,
            preserve_order = self.options.preserve_order,
            "Reorderer::set_options"
        );
        if !self.options.enabled {
            self.clear_session();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ReordererOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Reorderer<K>, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_position_change(
        &mut self,
        on_position_change: Option<impl Fn(&PositionChange<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_position_change = on_position_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_animation_duration_ms(&mut self, duration_ms: u64) {
        self.options.animation_duration_ms = duration_ms;
        self.notify();
    }

    pub fn set_preserve_order(&mut self, preserve_order: bool) {
        self.options.preserve_order = preserve_order;
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.clear_session();
        }
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.drag.is_some());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when an adapter applies several mutations per input event
    /// and `on_change` drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.order.len()
    }

    pub fn order(&self) -> &Order<K> {
        &self.order
    }

    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.order.get(index)
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.order.index_of(key)
    }

    pub fn is_reorder_disabled(&self, key: &K) -> bool {
        self.disabled.get(key).copied().unwrap_or(false)
    }

    pub fn drag(&self) -> Option<&DragState<K>> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn scroll_intent(&self) -> Option<ScrollIntent> {
        self.scroll_intent
    }

    /// Whether a shift animation is still mid-flight at `now_ms`.
    ///
    /// Drag-enter events during this cooldown are accepted but ignored for
    /// reordering purposes, never queued.
    pub fn is_shift_animating(&self, now_ms: u64) -> bool {
        self.shift_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Reconciles the engine against the host's current item collection.
    ///
    /// Idempotent: when neither the resulting order nor any
    /// `disable_reorder` flag changed, no update notification fires.
    ///
    /// If the order changes while a drag is active, the drag is
    /// force-cancelled without a position-change notification: the user is
    /// no longer looking at the collection the gesture started on.
    pub fn reconcile(&mut self, items: &[ItemDescriptor<K>]) {
        let host_keys: Vec<K> = items.iter().map(|it| it.key.clone()).collect();
        let mut disabled = KeyFlagMap::new();
        for item in items {
            let prev = disabled.insert(item.key.clone(), item.disable_reorder);
            debug_assert!(prev.is_none(), "reconcile: duplicate host key");
        }

        let next = self
            .order
            .reconcile(&host_keys, self.options.preserve_order);
        let order_changed = next != self.order;
        let flags_changed = disabled != self.disabled;
        if !order_changed && !flags_changed {
            return;
        }

        rdebug!(
            count = next.len(),
            order_changed,
            dragging = self.drag.is_some(),
            "Reorderer::reconcile"
        );

        self.batch_update(|r| {
            if order_changed && r.drag.is_some() {
                r.cancel_drag();
            }
            r.disabled = disabled;
            r.order = next;
            r.notify();
        });
    }

    /// Starts a drag gesture on the item at `index`.
    ///
    /// `start_rect` is the measured box of the dragged element; `None`
    /// (unmeasurable) is treated as a zero-size box. No-op while the engine
    /// is disabled, on an empty list, and on `disable_reorder` items.
    pub fn drag_start(&mut self, index: usize, start_rect: Option<BoundingBox>) {
        if !self.options.enabled || self.order.is_empty() {
            return;
        }
        let len = self.order.len();
        assert!(index < len, "drag_start: index {index} out of bounds ({len})");
        if self.is_reorder_disabled(&self.order.keys()[index]) {
            rtrace!(index, "drag_start: item has reorder disabled");
            return;
        }

        if start_rect.is_none() {
            rwarn!(index, "drag_start: unmeasurable element, zero-size start rect");
        }
        rtrace!(index, "drag_start");
        self.drag = Some(DragState {
            start_index: index,
            current_index: index,
            start_order: self.order.clone(),
            start_rect: start_rect.unwrap_or_default(),
        });
        self.notify();
    }

    /// Handles the drag pointer entering the item at `index`.
    ///
    /// Returns `true` when the order changed. The pointer offset from the
    /// hovered element's top-left corner must stay within
    /// `min(start_rect, hovered)` extents: a drag has to cross substantially
    /// into the neighboring item before a swap triggers, which prevents
    /// jitter at adjacent-item boundaries.
    pub fn drag_enter(
        &mut self,
        index: usize,
        pointer: Point,
        hovered: BoundingBox,
        now_ms: u64,
    ) -> bool {
        if self.order.is_empty() {
            return false;
        }
        let len = self.order.len();
        assert!(index < len, "drag_enter: index {index} out of bounds ({len})");

        let Some(drag) = &self.drag else {
            return false;
        };
        if index == drag.current_index {
            return false;
        }
        if self.is_shift_animating(now_ms) {
            rtrace!(index, now_ms, "drag_enter: suppressed by shift cooldown");
            return false;
        }
        if self.is_reorder_disabled(&self.order.keys()[index]) {
            return false;
        }

        let dead_zone_w = drag.start_rect.width.min(hovered.width);
        let dead_zone_h = drag.start_rect.height.min(hovered.height);
        if pointer.x - hovered.left > dead_zone_w || pointer.y - hovered.top > dead_zone_h {
            return false;
        }

        let next = drag.start_order.swap_range(drag.start_index, index, |k| {
            self.disabled.get(k).copied().unwrap_or(false)
        });

        rtrace!(
            from = drag.start_index,
            to = index,
            now_ms,
            "drag_enter: shift"
        );

        if let Some(drag) = self.drag.as_mut() {
            drag.current_index = index;
        }
        self.order = next;
        self.shift_until_ms = (self.options.animation_duration_ms > 0)
            .then(|| now_ms.saturating_add(self.options.animation_duration_ms));
        self.notify();
        true
    }

    /// Ends the active drag gesture.
    ///
    /// Emits `on_position_change` (and returns the change) once when the
    /// dragged item actually moved. DragState and ScrollIntent are cleared
    /// regardless.
    pub fn drag_end(&mut self) -> Option<PositionChange<K>> {
        let drag = self.drag.take();
        let had_intent = self.scroll_intent.take().is_some();
        self.shift_until_ms = None;

        let Some(drag) = drag else {
            if had_intent {
                self.notify();
            }
            return None;
        };

        rtrace!(
            start = drag.start_index,
            end = drag.current_index,
            "drag_end"
        );

        let change = (drag.current_index != drag.start_index).then(|| PositionChange {
            start: drag.start_index,
            end: drag.current_index,
            old_order: drag.start_order,
            new_order: self.order.clone(),
        });

        if let Some(change) = &change {
            if let Some(cb) = &self.options.on_position_change {
                cb(change);
            }
        }
        self.notify();
        change
    }

    /// Force-cancels the active drag: back to idle, no position-change
    /// notification, no partial order committed beyond what the host has
    /// already seen.
    pub fn cancel_drag(&mut self) {
        if self.drag.is_none() && self.scroll_intent.is_none() {
            return;
        }
        rtrace!("cancel_drag");
        self.clear_session();
        self.notify();
    }

    fn clear_session(&mut self) {
        self.drag = None;
        self.scroll_intent = None;
        self.shift_until_ms = None;
    }

    /// Restores the order a completed drag started from.
    ///
    /// Only valid until the next reconcile changes the key set.
    pub fn revert(&mut self, change: &PositionChange<K>) {
        assert_eq!(
            change.old_order.len(),
            self.order.len(),
            "revert: order length changed since the drag completed"
        );
        if cfg!(debug_assertions) {
            for key in change.old_order.iter() {
                debug_assert!(
                    self.order.contains(key),
                    "revert: key set changed since the drag completed"
                );
            }
        }
        self.order = change.old_order.clone();
        self.notify();
    }

    /// Samples the pointer position against the configured edge threshold
    /// and sets/clears the [`ScrollIntent`] accordingly.
    ///
    /// Only meaningful while a drag is active; never reorders.
    pub fn pointer_move(&mut self, pointer: Point, viewport_width: f64, viewport_height: f64) {
        if self.drag.is_none() {
            return;
        }
        let threshold = self.options.edge_threshold;

        let left = if pointer.x < threshold.x {
            -SCROLL_STEP_X
        } else if viewport_width - pointer.x < threshold.x {
            SCROLL_STEP_X
        } else {
            0
        };
        let top = if pointer.y < threshold.y {
            -SCROLL_STEP_Y
        } else if viewport_height - pointer.y < threshold.y {
            SCROLL_STEP_Y
        } else {
            0
        };

        let intent = (left != 0 || top != 0).then_some(ScrollIntent { left, top });
        if intent != self.scroll_intent {
            rtrace!(?intent, "pointer_move: scroll intent");
            self.scroll_intent = intent;
            self.notify();
        }
    }

    /// Clears any pending scroll intent (pointer/touch released).
    pub fn pointer_up(&mut self) {
        if self.scroll_intent.take().is_some() {
            self.notify();
        }
    }

    /// Iterates the per-item render instructions in order sequence, without
    /// allocations.
    ///
    /// When the engine is disabled, items are yielded statically (not
    /// draggable, full opacity).
    pub fn for_each_item(&self, mut f: impl FnMut(RenderItem<'_, K>)) {
        let selected = if self.options.enabled {
            self.drag.as_ref().map(|d| d.current_index)
        } else {
            None
        };

        for (index, key) in self.order.iter().enumerate() {
            let is_selected = selected == Some(index);
            f(RenderItem {
                index,
                key,
                selected: is_selected,
                opacity: if is_selected {
                    self.options.selected_item_opacity
                } else {
                    1.0
                },
                draggable: self.options.enabled && !self.is_reorder_disabled(key),
                drag_handle_only: self.options.use_only_icon_to_drag,
            });
        }
    }

    /// Collects the per-item keys in order sequence into `out` (clears `out`
    /// first).
    pub fn collect_keys(&self, out: &mut Vec<K>) {
        out.clear();
        out.extend(self.order.iter().cloned());
    }
}
