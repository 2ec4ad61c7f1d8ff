use reorder::BoundingBox;

use crate::key::{BoxMap, ReordererKey};

/// A transform instruction for one element, to be applied by the host's
/// rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Transition duration for reaching this transform; `0` means apply
    /// instantly with transitions disabled.
    pub transition_ms: u64,
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0
    }
}

/// The FLIP motion for one element whose position changed between the last
/// two layout samples.
///
/// The host applies [`FlipMotion::pin`] synchronously (the element snaps back
/// to where it was) and [`FlipMotion::release`] on the next paint opportunity
/// (the element transitions to its new, already-laid-out position). Ordering
/// between the two is guaranteed by the host's frame-scheduling primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlipMotion {
    /// Horizontal offset from the new position back to the old one.
    pub dx: f64,
    /// Vertical offset from the new position back to the old one.
    pub dy: f64,
    pub duration_ms: u64,
}

impl FlipMotion {
    /// Instantaneous offset to the old position, transitions disabled.
    pub fn pin(&self) -> Transform {
        Transform {
            translate_x: self.dx,
            translate_y: self.dy,
            transition_ms: 0,
        }
    }

    /// Neutral transform with an animated transition back to layout position.
    pub fn release(&self) -> Transform {
        Transform {
            translate_x: 0.0,
            translate_y: 0.0,
            transition_ms: self.duration_ms,
        }
    }
}

/// Samples element boxes and turns layout jumps into FLIP motions.
///
/// Exactly two box generations are retained: `previous` is always the map
/// captured immediately before `current` was computed, never older. Sample
/// once per order change, after the host has applied the new order to its
/// layout.
///
/// This type never holds UI objects; it borrows the host's `measure`
/// primitive for one sampling pass at a time.
#[derive(Clone, Debug)]
pub struct FlipAnimator<K> {
    previous: BoxMap<K>,
    current: BoxMap<K>,
}

impl<K: ReordererKey + Clone> Default for FlipAnimator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ReordererKey + Clone> FlipAnimator<K> {
    pub fn new() -> Self {
        Self {
            previous: BoxMap::new(),
            current: BoxMap::new(),
        }
    }

    /// Rotates generations and samples every key once.
    ///
    /// Keys whose element cannot be measured yet are simply absent from the
    /// new generation; animation is skipped for them rather than computing a
    /// delta from undefined coordinates.
    pub fn sample_layout<'a>(
        &mut self,
        keys: impl IntoIterator<Item = &'a K>,
        mut measure: impl FnMut(&K) -> Option<BoundingBox>,
    ) where
        K: 'a,
    {
        self.previous = core::mem::take(&mut self.current);
        for key in keys {
            if let Some(rect) = measure(key) {
                self.current.insert(key.clone(), rect);
            }
        }
    }

    pub fn previous_box(&self, key: &K) -> Option<BoundingBox> {
        self.previous.get(key).copied()
    }

    pub fn current_box(&self, key: &K) -> Option<BoundingBox> {
        self.current.get(key).copied()
    }

    /// Drops both generations. The next sample starts a fresh baseline.
    pub fn clear(&mut self) {
        self.previous.clear();
        self.current.clear();
    }

    /// The motion for `key`, or `None` when nothing should animate: zero
    /// duration, a stationary element, a key that just appeared, or a
    /// non-finite delta (all treated as "no movement", never an error).
    pub fn motion_for(&self, key: &K, duration_ms: u64) -> Option<FlipMotion> {
        if duration_ms == 0 {
            return None;
        }
        let prev = self.previous.get(key)?;
        let cur = self.current.get(key)?;
        let dx = prev.left - cur.left;
        let dy = prev.top - cur.top;
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(FlipMotion {
            dx,
            dy,
            duration_ms,
        })
    }

    /// Iterates the motions of every sampled key whose position changed.
    ///
    /// `duration_ms == 0` yields nothing: boxes were still sampled (so the
    /// baseline stays correct for the next change) but no visual transform
    /// applies.
    pub fn for_each_motion(&self, duration_ms: u64, mut f: impl FnMut(&K, FlipMotion)) {
        if duration_ms == 0 {
            return;
        }
        for key in self.current.keys() {
            if let Some(motion) = self.motion_for(key, duration_ms) {
                f(key, motion);
            }
        }
    }
}
