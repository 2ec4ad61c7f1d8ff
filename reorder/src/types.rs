use crate::Order;

/// A pointer/touch position in the host's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A measured element rectangle, as returned by the host's `measure` primitive.
///
/// An unmeasurable (not yet mounted) element is represented by the zero-size
/// default; animation is skipped for such items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Directional scroll deltas (px per tick) requested while a drag is near a
/// tracked edge. Non-null only during an active drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollIntent {
    pub left: i32,
    pub top: i32,
}

/// Edge regions (in px) that trigger auto-scrolling during a drag.
///
/// The horizontal threshold is much tighter than the vertical one because
/// most reorder lists are vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeThreshold {
    pub x: f64,
    pub y: f64,
}

impl Default for EdgeThreshold {
    fn default() -> Self {
        Self { x: 10.0, y: 100.0 }
    }
}

/// One row of the host-supplied item collection: a stable key plus an
/// optional per-item reorder lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDescriptor<K> {
    pub key: K,
    pub disable_reorder: bool,
}

impl<K> ItemDescriptor<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            disable_reorder: false,
        }
    }

    pub fn locked(key: K) -> Self {
        Self {
            key,
            disable_reorder: true,
        }
    }
}

/// The state of one drag gesture.
///
/// Exists only between drag-start and drag-end/cancel; owned exclusively by
/// the [`crate::Reorderer`], read-only to renderers and animators.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState<K> {
    /// Index the gesture started on.
    pub start_index: usize,
    /// Index the dragged item currently occupies.
    pub current_index: usize,
    /// Snapshot of the order when the gesture started.
    pub start_order: Order<K>,
    /// Measured box of the dragged element at drag start (zero-size when the
    /// element was unmeasurable).
    pub start_rect: BoundingBox,
}

/// Emitted once per completed drag that actually changed the order.
///
/// `Reorderer::revert` accepts this value to restore `old_order`
/// synchronously.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionChange<K> {
    pub start: usize,
    pub end: usize,
    pub old_order: Order<K>,
    pub new_order: Order<K>,
}

/// A per-item render instruction, yielded in order sequence by
/// [`crate::Reorderer::for_each_item`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderItem<'a, K> {
    pub index: usize,
    pub key: &'a K,
    /// The item currently carried by an active drag.
    pub selected: bool,
    /// Visual feedback only (`selected_item_opacity` when selected, else 1.0).
    pub opacity: f32,
    /// Whether the host should make this element draggable at all.
    pub draggable: bool,
    /// When true, only a designated handle sub-element should start drags
    /// (the `use_only_icon_to_drag` capability marker).
    pub drag_handle_only: bool,
}
