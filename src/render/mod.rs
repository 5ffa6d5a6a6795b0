//! Rendering: color mapping, screen projection/shading, and the per-frame
//! point pipeline.

pub mod color;
pub mod frame;
pub mod projection;

// Re-export commonly used items
pub use color::Rgb;
pub use frame::ScreenPoint;
