//! Screen projection and the fixed-light shading approximation.

use macroquad::prelude::*;

use crate::config::{AMBIENT_FLOOR, CENTER_X, CENTER_Y};

/// Project a band point to screen space.
///
/// A depth-scaled orthographic map, not a true perspective divide; the
/// exact formula matters for the look of the band:
///
/// ```text
/// persp = 0.86 + 0.0015 * z
/// sx = cx + x * persp
/// sy = cy + y * persp - 0.7 * z
/// ```
pub fn project(point: Vec3) -> Vec2 {
    let persp = 0.86 + 0.0015 * point.z;
    vec2(
        CENTER_X + point.x * persp,
        CENTER_Y + point.y * persp - 0.7 * point.z,
    )
}

/// Lighting scalar for a sample column.
///
/// The surface normal is approximated from the half-twist angle alone and
/// dotted with the fixed light direction. Floored at the ambient level so
/// no point renders fully unlit.
pub fn lighting_intensity(theta: f32, light_dir: Vec3) -> f32 {
    let half = theta / 2.0;
    let normal = vec3(
        half.cos() * theta.cos(),
        half.cos() * theta.sin(),
        half.sin(),
    );
    normal.dot(light_dir).max(AMBIENT_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LIGHT_DIR;
    use std::f32::consts::TAU;

    #[test]
    fn origin_projects_to_screen_center() {
        let p = project(vec3(0.0, 0.0, 0.0));
        assert!((p.x - CENTER_X).abs() < 1e-6);
        assert!((p.y - CENTER_Y).abs() < 1e-6);
    }

    #[test]
    fn projection_spot_values() {
        let p = project(vec3(100.0, 0.0, 0.0));
        assert!((p.x - (CENTER_X + 86.0)).abs() < 1e-3);

        // Depth scales the x/y factor and lifts the point on screen.
        let q = project(vec3(100.0, 50.0, 40.0));
        let persp = 0.86 + 0.0015 * 40.0;
        assert!((q.x - (CENTER_X + 100.0 * persp)).abs() < 1e-3);
        assert!((q.y - (CENTER_Y + 50.0 * persp - 28.0)).abs() < 1e-3);
    }

    #[test]
    fn lighting_stays_in_band() {
        for i in 0..900 {
            let theta = TAU * i as f32 / 900.0;
            let intensity = lighting_intensity(theta, LIGHT_DIR);
            assert!(intensity >= AMBIENT_FLOOR, "theta={theta}: {intensity}");
            assert!(intensity <= 1.0, "theta={theta}: {intensity}");
        }
    }

    #[test]
    fn lighting_floor_applies_on_the_dark_side() {
        // Pointing the normal away from the light lands on the floor.
        let lit = lighting_intensity(0.0, vec3(1.0, 0.0, 0.0));
        assert!((lit - 1.0).abs() < 1e-6);
        let dark = lighting_intensity(0.0, vec3(-1.0, 0.0, 0.0));
        assert!((dark - AMBIENT_FLOOR).abs() < 1e-6);
    }
}
