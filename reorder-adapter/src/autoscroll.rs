use reorder::ScrollIntent;

/// The scrollable region the auto-scroller operates on: current offsets,
/// content extents, and viewport extents, all in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollArea {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl ScrollArea {
    /// Whether any remaining scrollable distance exists in a direction the
    /// intent points at.
    pub fn has_room(&self, intent: ScrollIntent) -> bool {
        (intent.left < 0 && self.scroll_x > 0.0)
            || (intent.left > 0 && self.scroll_x + self.viewport_width < self.scroll_width)
            || (intent.top < 0 && self.scroll_y > 0.0)
            || (intent.top > 0 && self.scroll_y + self.viewport_height < self.scroll_height)
    }
}

pub const DEFAULT_SCROLL_INTERVAL_MS: u64 = 20;

/// The periodic timer resource behind edge-triggered auto-scrolling.
///
/// Adapters call `tick(now_ms, ..)` each frame/timer tick while a drag is
/// active; the returned [`ScrollIntent`] is the delta to scroll the viewport
/// by. The scroller emits at a fixed cadence (20 ms by default) and only
/// while remaining scrollable distance exists.
///
/// It self-terminates: a `None` intent clears the cadence, and callers must
/// `reset()` on drag end or teardown so no stale timer survives the gesture.
#[derive(Clone, Copy, Debug)]
pub struct AutoScroller {
    interval_ms: u64,
    last_tick_ms: Option<u64>,
}

impl AutoScroller {
    pub fn new() -> Self {
        Self::with_interval_ms(DEFAULT_SCROLL_INTERVAL_MS)
    }

    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_tick_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Advances the scroller.
    ///
    /// Returns the scroll delta to apply when the cadence has elapsed and the
    /// area still has room in an intended direction. The first tick after an
    /// intent appears only primes the cadence.
    pub fn tick(
        &mut self,
        now_ms: u64,
        intent: Option<ScrollIntent>,
        area: &ScrollArea,
    ) -> Option<ScrollIntent> {
        let Some(intent) = intent else {
            self.last_tick_ms = None;
            return None;
        };

        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return None;
        };
        if now_ms.saturating_sub(last) < self.interval_ms {
            return None;
        }
        self.last_tick_ms = Some(now_ms);

        area.has_room(intent).then_some(intent)
    }

    /// Clears the cadence. Call on drag end or engine teardown.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::new()
    }
}
