use log::{debug, info};
use macroquad::prelude::*;

mod config;
mod interaction;
mod render;
mod simulation;

use config::{HELP_DISPLAY_FRAMES, HELP_FADE_FRAMES};
use interaction::InteractionField;
use render::frame;
use simulation::{temperature, HelixParams, TimeState};

/// Application state owned by the single render/update thread.
struct App {
    time: TimeState,
    helix: HelixParams,
    field: InteractionField,
    show_help: bool,
    /// Countdown until the startup help card hides itself; `None` after a
    /// manual toggle, which keeps the card fully opaque until toggled again.
    help_timer: Option<u32>,
}

impl App {
    fn new() -> Self {
        Self {
            time: TimeState::new(),
            helix: HelixParams::default(),
            field: InteractionField::new(),
            show_help: true,
            help_timer: Some(HELP_DISPLAY_FRAMES),
        }
    }

    /// Poll this frame's input. Returns false once the user asked to quit.
    fn handle_input(&mut self) -> bool {
        if is_key_pressed(KeyCode::Escape) {
            return false;
        }
        if is_key_pressed(KeyCode::H) || is_key_pressed(KeyCode::F1) {
            self.show_help = !self.show_help;
            self.help_timer = None;
        }
        if is_key_pressed(KeyCode::R) {
            self.field.reset_view();
            debug!("view reset");
        }

        let position = Vec2::from(mouse_position());
        self.field.set_position(position);

        if is_mouse_button_pressed(MouseButton::Left) {
            self.field.spawn_ripple(position);
            self.field.start_drag(position);
            debug!("ripple spawned at {position}");
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            self.field.spawn_ripple(position);
            debug!("ripple spawned at {position}");
        }
        if is_mouse_button_released(MouseButton::Left) {
            self.field.end_drag();
        }
        if self.field.is_dragging() {
            self.field.drag_to(position);
        }

        let (_, scroll) = mouse_wheel();
        if scroll != 0.0 {
            let factor = if scroll > 0.0 { 1.1 } else { 0.9 };
            self.helix.zoom(factor);
            debug!("base radius now {}", self.helix.base_radius);
        }

        true
    }

    /// Advance the fixed-step clock and tick the interaction state.
    fn update(&mut self) {
        self.time.advance();
        self.field.update();

        if let Some(frames) = &mut self.help_timer {
            if *frames > 0 {
                *frames -= 1;
                if *frames == 0 {
                    self.show_help = false;
                }
            }
        }
    }

    fn help_alpha(&self) -> u8 {
        if !self.show_help {
            return 0;
        }
        match self.help_timer {
            Some(frames) if frames < HELP_FADE_FRAMES => (frames * 255 / HELP_FADE_FRAMES) as u8,
            _ => 255,
        }
    }

    fn render(&self) {
        let (r, g, b) = config::BACKGROUND;
        clear_background(Color::from_rgba(r, g, b, 255));

        let t = self.time.t();
        let temp = temperature::temperature(t);

        frame::draw_helix(t, temp, &self.helix, Some(&self.field));
        frame::draw_cursor(&self.field, t);
        frame::draw_ripples(&self.field);
        frame::draw_hud(temp);
        frame::draw_help(self.help_alpha());
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Sunset Spiral - Interactive DNA Art".to_owned(),
        window_width: config::WIDTH as i32,
        window_height: config::HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    info!("Starting Sunset Spiral");

    let mut app = App::new();
    loop {
        if !app.handle_input() {
            break;
        }
        app.update();
        app.render();
        next_frame().await;
    }

    info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_card_hides_after_the_startup_window() {
        let mut app = App::new();
        assert_eq!(app.help_alpha(), 255);

        for _ in 0..(HELP_DISPLAY_FRAMES - HELP_FADE_FRAMES) {
            app.update();
        }
        assert_eq!(app.help_alpha(), 255);

        // The card fades over its final stretch, then hides.
        for _ in 0..HELP_FADE_FRAMES {
            app.update();
        }
        assert!(!app.show_help);
        assert_eq!(app.help_alpha(), 0);
    }

    #[test]
    fn manual_toggle_is_sticky() {
        let mut app = App::new();
        app.show_help = false;
        app.help_timer = None;
        for _ in 0..1000 {
            app.update();
        }
        assert_eq!(app.help_alpha(), 0);

        app.show_help = true;
        assert_eq!(app.help_alpha(), 255);
    }
}
