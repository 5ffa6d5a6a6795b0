//! Mouse interaction state: pointer tracking, drag-to-rotate/pan, and the
//! expiring set of click ripples.

pub mod ripple;

// Re-export commonly used items
pub use ripple::RippleEffect;

use macroquad::prelude::*;

use crate::config::{
    CLICK_EFFECT_DURATION, DRAG_PAN_RATE, DRAG_SENSITIVITY, MOUSE_INFLUENCE_RADIUS,
};

/// Pointer state and active click effects.
///
/// Mutated only by the per-frame event-handling phase; the renderer reads
/// it through the influence queries.
#[derive(Debug, Clone, Default)]
pub struct InteractionField {
    position: Vec2,
    dragging: bool,
    drag_anchor: Vec2,
    pub rotation_offset: f32,
    pub view_offset_x: f32,
    pub view_offset_y: f32,
    ripples: Vec<RippleEffect>,
}

impl InteractionField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Primary-button press: capture the drag anchor.
    pub fn start_drag(&mut self, position: Vec2) {
        self.dragging = true;
        self.drag_anchor = position;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Apply the pointer delta since the last anchor: horizontal motion
    /// rotates the band, vertical motion pans the view. The anchor then
    /// resets to the current position, so drag motion is delta-based.
    pub fn drag_to(&mut self, position: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = position - self.drag_anchor;
        self.rotation_offset += delta.x * DRAG_SENSITIVITY;
        self.view_offset_y += delta.y * DRAG_PAN_RATE;
        self.drag_anchor = position;
    }

    /// Append a ripple at `position` with age 0, independent of drag state.
    pub fn spawn_ripple(&mut self, position: Vec2) {
        self.ripples.push(RippleEffect::new(position));
    }

    pub fn reset_view(&mut self) {
        self.rotation_offset = 0.0;
        self.view_offset_x = 0.0;
        self.view_offset_y = 0.0;
    }

    /// Per-frame tick: compact expired ripples, then age the survivors.
    pub fn update(&mut self) {
        self.ripples.retain(|r| r.age < CLICK_EFFECT_DURATION);
        for ripple in &mut self.ripples {
            ripple.age += 1;
        }
    }

    pub fn ripples(&self) -> &[RippleEffect] {
        &self.ripples
    }

    /// Smooth falloff around the pointer: 1 at the pointer, 0 at and beyond
    /// the influence radius.
    pub fn pointer_influence(&self, point: Vec2) -> f32 {
        let distance = point.distance(self.position);
        if distance > MOUSE_INFLUENCE_RADIUS {
            return 0.0;
        }
        (1.0 - (distance / MOUSE_INFLUENCE_RADIUS).powi(2)).max(0.0)
    }

    /// Summed ring influence of all active ripples at `point`, clamped to 1.
    pub fn ripple_influence(&self, point: Vec2) -> f32 {
        let total: f32 = self.ripples.iter().map(|r| r.influence_at(point)).sum();
        total.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_lives_for_the_full_duration() {
        let mut field = InteractionField::new();
        field.spawn_ripple(vec2(450.0, 450.0));

        // One frame update: still present, aged to 1.
        field.update();
        assert_eq!(field.ripples().len(), 1);
        assert_eq!(field.ripples()[0].age, 1);
        assert!((field.ripples()[0].progress() - 1.0 / 60.0).abs() < 1e-6);

        // Present through frame N+59...
        for _ in 0..59 {
            field.update();
        }
        assert_eq!(field.ripples().len(), 1);

        // ...and gone at frame N+60.
        field.update();
        assert!(field.ripples().is_empty());
    }

    #[test]
    fn ripples_expire_independently() {
        let mut field = InteractionField::new();
        field.spawn_ripple(vec2(0.0, 0.0));
        for _ in 0..30 {
            field.update();
        }
        field.spawn_ripple(vec2(100.0, 100.0));
        for _ in 0..31 {
            field.update();
        }
        // The first ripple is gone, the second is halfway through.
        assert_eq!(field.ripples().len(), 1);
        assert_eq!(field.ripples()[0].age, 31);
    }

    #[test]
    fn drag_accumulates_deltas_and_resets_anchor() {
        let mut field = InteractionField::new();
        field.start_drag(vec2(100.0, 100.0));
        assert!(field.is_dragging());

        field.drag_to(vec2(110.0, 120.0));
        assert!((field.rotation_offset - 10.0 * DRAG_SENSITIVITY).abs() < 1e-6);
        assert!((field.view_offset_y - 20.0 * DRAG_PAN_RATE).abs() < 1e-6);

        // No motion, no further change.
        field.drag_to(vec2(110.0, 120.0));
        assert!((field.rotation_offset - 0.03).abs() < 1e-6);
        assert!((field.view_offset_y - 10.0).abs() < 1e-6);

        field.end_drag();
        field.drag_to(vec2(200.0, 200.0));
        assert!((field.rotation_offset - 0.03).abs() < 1e-6);
    }

    #[test]
    fn reset_view_zeroes_the_offsets() {
        let mut field = InteractionField::new();
        field.start_drag(vec2(0.0, 0.0));
        field.drag_to(vec2(50.0, 80.0));
        field.view_offset_x = 3.0;
        field.reset_view();
        assert_eq!(field.rotation_offset, 0.0);
        assert_eq!(field.view_offset_x, 0.0);
        assert_eq!(field.view_offset_y, 0.0);
    }

    #[test]
    fn pointer_influence_boundaries() {
        let mut field = InteractionField::new();
        field.set_position(vec2(450.0, 450.0));

        assert!((field.pointer_influence(vec2(450.0, 450.0)) - 1.0).abs() < 1e-6);
        // Exactly at the radius the falloff reaches zero.
        let at_edge = vec2(450.0 + MOUSE_INFLUENCE_RADIUS, 450.0);
        assert!(field.pointer_influence(at_edge).abs() < 1e-5);
        assert_eq!(field.pointer_influence(vec2(700.0, 450.0)), 0.0);
        // Halfway out, the squared falloff leaves 75%.
        let halfway = vec2(450.0 + MOUSE_INFLUENCE_RADIUS / 2.0, 450.0);
        assert!((field.pointer_influence(halfway) - 0.75).abs() < 1e-5);
    }

    #[test]
    fn ripple_influence_sums_and_clamps() {
        let mut field = InteractionField::new();
        for _ in 0..5 {
            field.spawn_ripple(vec2(450.0, 450.0));
        }
        // Five fresh ripples at 0.3 each would sum to 1.5; clamped to 1.
        let near = vec2(455.0, 450.0);
        assert!((field.ripple_influence(near) - 1.0).abs() < 1e-6);
        assert_eq!(field.ripple_influence(vec2(0.0, 0.0)), 0.0);
    }
}
