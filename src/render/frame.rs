//! Per-frame orchestration: derive the frame parameters, run every grid
//! cell through sample -> distort -> shade -> project, and submit the draw
//! calls plus the interaction overlays.

use macroquad::prelude::*;

use crate::config::{
    DISTORTION_STRENGTH, HEIGHT, LIGHT_DIR, MOUSE_INFLUENCE_RADIUS, POINTS_COUNT, WIDTH,
    WIDTH_STEPS,
};
use crate::interaction::InteractionField;
use crate::render::color::{self, Rgb};
use crate::render::projection;
use crate::simulation::surface::{self, HelixParams};
use crate::simulation::temperature;

/// Parameters fixed for the duration of one frame.
pub struct HelixFrame {
    pub radius: f32,
    pub width: f32,
    pub color_a: Rgb,
    pub color_b: Rgb,
}

impl HelixFrame {
    pub fn new(t: f32, temp: f32, params: &HelixParams) -> Self {
        let tf = temperature::temp_factor(temp);
        Self {
            radius: params.radius(tf),
            width: params.width(t),
            // Cool blue and warm pink ends of the band gradient; both warm
            // up with the temperature factor.
            color_a: Rgb::new((100.0 + 95.0 * tf) as u8, 150, 255),
            color_b: Rgb::new(255, (50.0 + 55.0 * tf) as u8, 120),
        }
    }
}

/// One shaded, projected point ready to draw.
#[derive(Debug, Clone, Copy)]
pub struct ScreenPoint {
    pub position: Vec2,
    pub color: Rgb,
    pub radius: f32,
}

/// Run one grid cell through the full point pipeline.
pub fn shade_point(
    i: usize,
    j: usize,
    theta: f32,
    lighting: f32,
    frame: &HelixFrame,
    field: Option<&InteractionField>,
) -> ScreenPoint {
    let wfrac = surface::wfrac_at(j);
    let mut position =
        projection::project(surface::mobius_point(theta, wfrac, frame.radius, frame.width));

    let mut pointer_influence = 0.0;
    let mut ripple_influence = 0.0;
    if let Some(field) = field {
        position.x += field.view_offset_x;
        position.y += field.view_offset_y;

        pointer_influence = field.pointer_influence(position);
        ripple_influence = field.ripple_influence(position);

        // Attraction toward the pointer; skipped when the point sits
        // exactly on it, since there is no direction to pull along.
        if pointer_influence > 0.0 {
            let toward = field.position() - position;
            if toward.length() > 0.0 {
                position += toward * (pointer_influence * DISTORTION_STRENGTH) * 0.1;
            }
        }
    }

    let band_frac = (wfrac + 0.5) * 0.7 + 0.3 * (i as f32 / POINTS_COUNT as f32);
    let mut color = color::blend(frame.color_a, frame.color_b, band_frac);
    if pointer_influence > 0.1 {
        color = color.scaled(1.0 + pointer_influence * 0.5);
    }
    if ripple_influence > 0.0 {
        color = color::blend(color, Rgb::WHITE, ripple_influence * 0.4);
    }

    ScreenPoint {
        position,
        color: color.scaled(lighting),
        radius: 2.0 + (pointer_influence * 3.0).trunc() + (ripple_influence * 2.0).trunc(),
    }
}

/// Draw the full band for this frame. Passing no interaction field renders
/// the plain, non-interactive variant of the animation.
pub fn draw_helix(t: f32, temp: f32, params: &HelixParams, field: Option<&InteractionField>) {
    let frame = HelixFrame::new(t, temp, params);
    let rotation = field.map_or(0.0, |f| f.rotation_offset);

    for i in 0..POINTS_COUNT {
        let theta = surface::theta_at(i, rotation);
        let lighting = projection::lighting_intensity(theta, LIGHT_DIR);
        for j in 0..WIDTH_STEPS {
            let point = shade_point(i, j, theta, lighting, &frame, field);
            draw_circle(
                point.position.x.trunc(),
                point.position.y.trunc(),
                point.radius,
                point.color.to_color(),
            );
        }
    }
}

/// Influence-radius ring and pulsing center marker around the pointer,
/// drawn only while the pointer is inside the window.
pub fn draw_cursor(field: &InteractionField, t: f32) {
    let pos = field.position();
    if pos.x < 0.0 || pos.x > WIDTH || pos.y < 0.0 || pos.y > HEIGHT {
        return;
    }
    draw_circle_lines(
        pos.x,
        pos.y,
        MOUSE_INFLUENCE_RADIUS,
        2.0,
        Rgb::new(50, 50, 255).to_color(),
    );
    let pulse = 20.0 + 10.0 * (t * 5.0).sin();
    draw_circle_lines(pos.x, pos.y, pulse, 2.0, WHITE);
}

/// Expanding ring per active click ripple. Rings stop drawing once the
/// nominal fade runs out, a little before the influence itself expires.
pub fn draw_ripples(field: &InteractionField) {
    for ripple in field.ripples() {
        let radius = ripple.ring_radius();
        let fade = (128.0 - 128.0 * ripple.progress()).max(0.0);
        if fade > 5.0 && radius > 0.0 {
            draw_circle_lines(
                ripple.origin.x,
                ripple.origin.y,
                radius,
                1.0,
                Rgb::new(255, 25, 100).to_color(),
            );
        }
    }
}

/// Temperature readout, tinted with the display-range gradient.
pub fn draw_hud(temp: f32) {
    let label = format!("Temperature: {temp:.1}°C");
    draw_text(
        &label,
        10.0,
        24.0,
        18.0,
        color::temperature_to_color(temp).to_color(),
    );
}

const HELP_LINES: [&str; 10] = [
    "Mouse Controls:",
    "- Move: influence nearby points",
    "- Left click: ripple + start drag",
    "- Right click: single ripple",
    "- Drag: rotate and move view",
    "- Scroll: zoom view",
    "Keyboard Controls:",
    "- H / F1: toggle help",
    "- R: reset view",
    "- ESC: exit",
];

/// Bottom-right help card, dimmed by `alpha`.
pub fn draw_help(alpha: u8) {
    if alpha == 0 {
        return;
    }
    let card_w = 300.0;
    let card_h = HELP_LINES.len() as f32 * 22.0 + 20.0;
    let x = WIDTH - card_w - 20.0;
    let y = HEIGHT - card_h - 20.0;
    draw_rectangle(x, y, card_w, card_h, Color::from_rgba(20, 20, 20, alpha.min(180)));

    let fade = alpha as f32 / 255.0;
    for (i, line) in HELP_LINES.iter().enumerate() {
        let base = if line.ends_with("Controls:") {
            Rgb::new(255, 255, 100)
        } else {
            Rgb::new(200, 200, 200)
        };
        draw_text(
            line,
            x + 10.0,
            y + 26.0 + i as f32 * 22.0,
            18.0,
            base.scaled(fade).to_color(),
        );
    }
}
