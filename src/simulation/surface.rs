//! Möbius band sampling and the frame-varying geometry parameters.

use std::f32::consts::TAU;

use macroquad::prelude::*;

use crate::config::{
    BASE_RADIUS, BASE_WIDTH, MAX_BASE_RADIUS, MIN_BASE_RADIUS, POINTS_COUNT, RADIUS_VARIATION,
    WIDTH_STEPS, WIDTH_VARIATION,
};

/// Runtime-adjustable helix parameters.
///
/// The base radius is the one knob the user can change while running
/// (scroll zoom); the per-frame radius and width derive from it, the clock,
/// and the temperature factor.
#[derive(Debug, Clone)]
pub struct HelixParams {
    pub base_radius: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
        }
    }
}

impl HelixParams {
    /// Multiply the base radius by `factor`, truncated to whole pixels and
    /// clamped to the zoom range.
    pub fn zoom(&mut self, factor: f32) {
        self.base_radius = (self.base_radius * factor)
            .trunc()
            .clamp(MIN_BASE_RADIUS, MAX_BASE_RADIUS);
    }

    /// Band center radius for the current temperature factor.
    pub fn radius(&self, temp_factor: f32) -> f32 {
        self.base_radius + RADIUS_VARIATION * temp_factor
    }

    /// Band width for the current simulation time.
    pub fn width(&self, t: f32) -> f32 {
        BASE_WIDTH + WIDTH_VARIATION * (t * 0.7).sin()
    }
}

/// Angle of the `i`-th sample column, offset by the drag rotation.
pub fn theta_at(i: usize, rotation_offset: f32) -> f32 {
    TAU * i as f32 / POINTS_COUNT as f32 + rotation_offset
}

/// Width fraction of the `j`-th sample row, evenly spaced over [-0.5, 0.5].
pub fn wfrac_at(j: usize) -> f32 {
    j as f32 / (WIDTH_STEPS - 1) as f32 - 0.5
}

/// Point on the Möbius band.
///
/// The cross-section rotates by `theta / 2` while `theta` sweeps the ring,
/// which gives the band its single half-twist:
///
/// ```text
/// x = (radius + width * wfrac * cos(theta/2)) * cos(theta)
/// y = (radius + width * wfrac * cos(theta/2)) * sin(theta)
/// z =  width * wfrac * sin(theta/2)
/// ```
pub fn mobius_point(theta: f32, wfrac: f32, radius: f32, width: f32) -> Vec3 {
    let cos_half = (theta / 2.0).cos();
    let sin_half = (theta / 2.0).sin();
    let arm = radius + width * wfrac * cos_half;
    vec3(arm * theta.cos(), arm * theta.sin(), width * wfrac * sin_half)
}
