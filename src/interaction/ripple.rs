//! Expanding click ripples.

use macroquad::prelude::*;

use crate::config::{
    CLICK_EFFECT_DURATION, CLICK_RADIUS_SCALE, MOUSE_INFLUENCE_RADIUS, RIPPLE_BAND_WIDTH,
};

/// One click ripple: an annulus that expands from the click position and
/// fades out over the effect duration. Aged by one tick per frame and
/// dropped by the interaction field once it reaches the duration.
#[derive(Debug, Clone)]
pub struct RippleEffect {
    pub origin: Vec2,
    pub age: u32,
    pub max_radius: f32,
}

impl RippleEffect {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            age: 0,
            max_radius: MOUSE_INFLUENCE_RADIUS * CLICK_RADIUS_SCALE,
        }
    }

    /// Fraction of the effect lifetime elapsed.
    pub fn progress(&self) -> f32 {
        self.age as f32 / CLICK_EFFECT_DURATION as f32
    }

    /// Radius of the expanding ring at the current age.
    pub fn ring_radius(&self) -> f32 {
        self.max_radius * self.progress()
    }

    /// Influence contribution at `point`: nonzero only inside a thin band
    /// around the ring, fading linearly as the effect ages.
    pub fn influence_at(&self, point: Vec2) -> f32 {
        let distance = point.distance(self.origin);
        if (distance - self.ring_radius()).abs() < RIPPLE_BAND_WIDTH {
            (1.0 - self.progress()) * 0.3
        } else {
            0.0
        }
    }
}
