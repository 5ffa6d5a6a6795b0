//! Simulation state: the fixed-step clock and the models that drive the
//! helix geometry from frame to frame.

pub mod surface;
pub mod temperature;

// Re-export commonly used items
pub use surface::HelixParams;

use crate::config::TIME_STEP;

/// Simulation clock, advanced by a fixed increment once per frame.
#[derive(Debug, Clone, Default)]
pub struct TimeState {
    t: f32,
}

impl TimeState {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Advance the clock by one frame tick.
    pub fn advance(&mut self) {
        self.t += TIME_STEP;
    }

    pub fn t(&self) -> f32 {
        self.t
    }
}
