use egui::{Pos2, Vec2};

use crate::config::GestureConfig;

/// Plain pan/zoom record consumed by the renderer every frame.
///
/// A map-local point `p` lands on screen at `origin + pan + p * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTransform {
    pub pan: Vec2,
    pub scale: f32,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl MapTransform {
    pub fn map_to_screen(&self, origin: Pos2, map_pos: Pos2) -> Pos2 {
        origin + self.pan + map_pos.to_vec2() * self.scale
    }

    pub fn screen_to_map(&self, origin: Pos2, screen_pos: Pos2) -> Pos2 {
        ((screen_pos - origin - self.pan) / self.scale).to_pos2()
    }
}

/// A change the gesture interpreter asks the accumulator to make
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformDelta {
    /// Incremental translation since the previous snapshot
    Pan(Vec2),
    /// Absolute scale, already computed from the pinch baseline
    Scale(f32),
}

/// Owns the pan offset and scale factor of the map surface.
///
/// Pan applied during a gesture is kept in a transient offset until
/// [`commit`](Self::commit) flattens it into the settled offset. Pan is never
/// clamped; scale is clamped on every update.
#[derive(Debug, Clone)]
pub struct TransformAccumulator {
    settled_pan: Vec2,
    gesture_pan: Vec2,
    scale: f32,
    min_scale: f32,
    max_scale: f32,
}

impl TransformAccumulator {
    /// An invalid config is replaced by the defaults
    pub fn new(config: &GestureConfig) -> Self {
        let config = config.validated_or_default();
        Self {
            settled_pan: Vec2::ZERO,
            gesture_pan: Vec2::ZERO,
            scale: config.clamp_scale(1.0),
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }

    pub fn apply(&mut self, delta: TransformDelta) {
        match delta {
            TransformDelta::Pan(d) => self.apply_pan_delta(d.x, d.y),
            TransformDelta::Scale(s) => self.apply_scale(s),
        }
    }

    pub fn apply_pan_delta(&mut self, dx: f32, dy: f32) {
        self.gesture_pan += Vec2::new(dx, dy);
    }

    /// Replace the scale with `absolute`, clamped to the configured range.
    /// Non-finite values leave the scale untouched.
    pub fn apply_scale(&mut self, absolute: f32) {
        if !absolute.is_finite() {
            log::warn!("Ignoring non-finite scale {}", absolute);
            return;
        }
        self.scale = absolute.max(self.min_scale).min(self.max_scale);
    }

    /// Merge the transient gesture offset into the settled offset
    pub fn commit(&mut self) {
        self.settled_pan += self.gesture_pan;
        self.gesture_pan = Vec2::ZERO;
    }

    pub fn current_transform(&self) -> MapTransform {
        MapTransform {
            pan: self.settled_pan + self.gesture_pan,
            scale: self.scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether pan applied since the last commit is still pending
    pub fn has_pending_pan(&self) -> bool {
        self.gesture_pan != Vec2::ZERO
    }

    /// Back to no pan and unit scale (clamped)
    pub fn reset(&mut self) {
        self.settled_pan = Vec2::ZERO;
        self.gesture_pan = Vec2::ZERO;
        self.scale = 1.0_f32.max(self.min_scale).min(self.max_scale);
    }
}
