//! Tuning constants for the temperature simulation, the helix geometry,
//! and mouse interaction.

use macroquad::prelude::Vec3;

// ---------------------------------------------------------------------------
// Window / Presentation
// ---------------------------------------------------------------------------
pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 900.0;
pub const CENTER_X: f32 = WIDTH / 2.0;
pub const CENTER_Y: f32 = HEIGHT / 2.0;
pub const BACKGROUND: (u8, u8, u8) = (30, 30, 30);

// Fixed amount added to the simulation clock each frame. The clock is not
// tied to wall time, so playback speed follows the achieved frame rate.
pub const TIME_STEP: f32 = 0.06;

// ---------------------------------------------------------------------------
// Temperature Simulation
// ---------------------------------------------------------------------------
pub const ANNUAL_AVERAGE: f32 = 2.5; // °C
pub const SEASONAL_AMPLITUDE: f32 = 22.5;
pub const DAILY_VARIATION: f32 = 3.0;

// Display range used to normalize temperature for color mapping.
pub const TEMP_MIN: f32 = -20.0;
pub const TEMP_MAX: f32 = 25.0;

// ---------------------------------------------------------------------------
// Helix Geometry
// ---------------------------------------------------------------------------
pub const POINTS_COUNT: usize = 900; // theta samples over one full turn
pub const WIDTH_STEPS: usize = 21; // samples across the band
pub const BASE_RADIUS: f32 = 320.0;
pub const RADIUS_VARIATION: f32 = 200.0;
pub const BASE_WIDTH: f32 = 140.0;
pub const WIDTH_VARIATION: f32 = 60.0;

// ---------------------------------------------------------------------------
// Shading
// ---------------------------------------------------------------------------
pub const LIGHT_DIR: Vec3 = Vec3::new(0.3, -0.7, 0.6);
pub const AMBIENT_FLOOR: f32 = 0.6; // minimum lighting intensity

// ---------------------------------------------------------------------------
// Mouse Interaction
// ---------------------------------------------------------------------------
pub const MOUSE_INFLUENCE_RADIUS: f32 = 150.0;
pub const CLICK_EFFECT_DURATION: u32 = 60; // frames
pub const CLICK_RADIUS_SCALE: f32 = 1.2; // ripple max radius vs influence radius
pub const RIPPLE_BAND_WIDTH: f32 = 20.0;
pub const DRAG_SENSITIVITY: f32 = 0.003; // horizontal drag -> rotation
pub const DRAG_PAN_RATE: f32 = 0.5; // vertical drag -> view offset
pub const DISTORTION_STRENGTH: f32 = 0.3;

// Scroll zoom bounds for the runtime-adjustable base radius.
pub const MIN_BASE_RADIUS: f32 = 100.0;
pub const MAX_BASE_RADIUS: f32 = 500.0;

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------
pub const HELP_DISPLAY_FRAMES: u32 = 300;
pub const HELP_FADE_FRAMES: u32 = 60;
