//! The three UI screens, drawn per session state.

use crate::frontend::Color;
use crate::math::Vec2;

use super::session::GameState;
use super::GameCx;

const TITLE_SIZE: f32 = 25.0;
const BODY_SIZE: f32 = 20.0;

/// Stateless overlay: reads the session, draws the matching screen.
pub struct UiOverlay;

impl UiOverlay {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn update(&mut self, cx: &mut GameCx<'_>) {
        match cx.session.state {
            GameState::MainMenu => self.draw_menu(cx),
            GameState::Game => self.draw_hud(cx),
            GameState::GameOver => self.draw_game_over(cx),
        }
    }

    fn draw_menu(&self, cx: &mut GameCx<'_>) {
        self.centered_at_y(cx, "Asteroids!", 20.0, TITLE_SIZE, Color::RED);
        let prompt_y = cx.screen_center().y;
        self.centered_at_y(cx, "Press [Enter] to start", prompt_y, BODY_SIZE, Color::WHITE);
    }

    fn draw_hud(&self, cx: &mut GameCx<'_>) {
        let text = format!("Time: {:.1}", cx.session.time_alive);
        cx.frontend
            .draw_text(&text, Vec2::new(10.0, 10.0), BODY_SIZE, Color::WHITE);
    }

    fn draw_game_over(&self, cx: &mut GameCx<'_>) {
        let center_y = cx.screen_center().y;
        self.centered_at_y(cx, "Game Over", center_y - 40.0, TITLE_SIZE, Color::RED);
        let survived = format!("You survived {:.1}s", cx.session.time_alive);
        self.centered_at_y(cx, &survived, center_y, BODY_SIZE, Color::WHITE);
        self.centered_at_y(
            cx,
            "Press [Enter] to play again",
            center_y + 40.0,
            BODY_SIZE,
            Color::GRAY,
        );
    }

    /// Draw `text` horizontally centered, with its vertical center at `y`.
    fn centered_at_y(&self, cx: &mut GameCx<'_>, text: &str, y: f32, size: f32, color: Color) {
        let extent = cx.frontend.measure_text(text, size);
        let x = cx.screen_center().x - extent.x / 2.0;
        cx.frontend
            .draw_text(text, Vec2::new(x, y - extent.y / 2.0), size, color);
    }
}

impl Default for UiOverlay {
    fn default() -> Self {
        Self::new()
    }
}
