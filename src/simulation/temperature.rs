//! Synthetic annual/daily temperature rhythm.

use std::f32::consts::TAU;

use crate::config::{ANNUAL_AVERAGE, DAILY_VARIATION, SEASONAL_AMPLITUDE, TEMP_MAX, TEMP_MIN};

/// Perceived temperature at simulation time `t`.
///
/// A seasonal sinusoid (coldest near the start of the year, warmest at
/// midsummer) plus a smaller day/night sinusoid. Pure and deterministic.
pub fn temperature(t: f32) -> f32 {
    let day_of_year = (t * 0.05).rem_euclid(365.0);
    let seasonal = ANNUAL_AVERAGE + SEASONAL_AMPLITUDE * ((day_of_year - 30.0) / 365.0 * TAU).sin();

    let hour = (t * 1.2).rem_euclid(24.0);
    let daily = DAILY_VARIATION * ((hour - 6.0) / 24.0 * TAU).sin();

    seasonal + daily
}

/// Normalized factor driving the helix radius and the warm/cool base colors.
///
/// Not clamped: geometry scales with whatever the simulation produces, and
/// the simulated range keeps it within roughly [0, 1] anyway. The color
/// normalization in `render::color` clamps independently.
pub fn temp_factor(temp: f32) -> f32 {
    (temp - TEMP_MIN) / (TEMP_MAX - TEMP_MIN)
}
