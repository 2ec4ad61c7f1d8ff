use alloc::sync::Arc;

use crate::reorderer::Reorderer;
use crate::{EdgeThreshold, PositionChange};

/// A callback fired when a reorderer state update occurs.
///
/// The second argument is `is_dragging`.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Reorderer<K>, bool) + Send + Sync>;

/// A callback fired once per completed drag that actually changed the order.
///
/// The emitted [`PositionChange`] carries both orders; pass it back to
/// `Reorderer::revert` to restore the old one.
pub type PositionChangeCallback<K> = Arc<dyn Fn(&PositionChange<K>) + Send + Sync>;

/// Configuration for [`crate::Reorderer`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s
/// so adapters can update a few fields and call `Reorderer::set_options`
/// without reallocating closures.
pub struct ReordererOptions<K> {
    /// Enables/disables the engine. When disabled, items render statically
    /// and no drag can start.
    pub enabled: bool,

    /// Restrict the draggable affordance to a designated handle sub-element
    /// instead of the whole item. Surfaced to the host on each
    /// [`crate::RenderItem`] as `drag_handle_only`.
    pub use_only_icon_to_drag: bool,

    /// Opacity applied to the item carried by an active drag. Visual
    /// feedback only.
    pub selected_item_opacity: f32,

    /// Duration of the shift animation, in milliseconds. Also the cooldown
    /// during which further drag-enter swaps are suppressed. `0` disables
    /// animation entirely.
    pub animation_duration_ms: u64,

    /// Reconciliation mode: when true, keys already present keep their
    /// relative order across host updates and new keys are appended.
    pub preserve_order: bool,

    /// Edge regions that trigger auto-scrolling during a drag.
    pub edge_threshold: EdgeThreshold,

    /// Optional callback fired when the reorderer's internal state changes.
    ///
    /// The second argument indicates whether a drag is in progress.
    pub on_change: Option<OnChangeCallback<K>>,

    /// Optional notification for completed drags that changed the order.
    pub on_position_change: Option<PositionChangeCallback<K>>,
}

impl<K> ReordererOptions<K> {
    pub fn new() -> Self {
        Self {
            enabled: true,
            use_only_icon_to_drag: false,
            selected_item_opacity: 0.5,
            animation_duration_ms: 300,
            preserve_order: false,
            edge_threshold: EdgeThreshold::default(),
            on_change: None,
            on_position_change: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_use_only_icon_to_drag(mut self, use_only_icon_to_drag: bool) -> Self {
        self.use_only_icon_to_drag = use_only_icon_to_drag;
        self
    }

    pub fn with_selected_item_opacity(mut self, opacity: f32) -> Self {
        self.selected_item_opacity = opacity;
        self
    }

    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_preserve_order(mut self, preserve_order: bool) -> Self {
        self.preserve_order = preserve_order;
        self
    }

    pub fn with_edge_threshold(mut self, edge_threshold: EdgeThreshold) -> Self {
        self.edge_threshold = edge_threshold;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Reorderer<K>, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_position_change(
        mut self,
        on_position_change: Option<impl Fn(&PositionChange<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_position_change = on_position_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for ReordererOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ReordererOptions<K> {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            use_only_icon_to_drag: self.use_only_icon_to_drag,
            selected_item_opacity: self.selected_item_opacity,
            animation_duration_ms: self.animation_duration_ms,
            preserve_order: self.preserve_order,
            edge_threshold: self.edge_threshold,
            on_change: self.on_change.clone(),
            on_position_change: self.on_position_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for ReordererOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReordererOptions")
            .field("enabled", &self.enabled)
            .field("use_only_icon_to_drag", &self.use_only_icon_to_drag)
            .field("selected_item_opacity", &self.selected_item_opacity)
            .field("animation_duration_ms", &self.animation_duration_ms)
            .field("preserve_order", &self.preserve_order)
            .field("edge_threshold", &self.edge_threshold)
            .finish_non_exhaustive()
    }
}
