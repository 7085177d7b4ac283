//! Presentation adapter
//!
//! Maps the current screen to static caption/menu text and dispatches the
//! entity draw calls. Pure table lookup - no game logic. Colors and font
//! sizes come from a `Theme` handed in at construction, scoped to the
//! session instead of living in process-wide globals.

use glam::Vec2;

use crate::consts::{FONT_SIZE, SMALL_FONT_SIZE};
use crate::render::{Color, Surface};
use crate::screen_center;
use crate::sim::{GameState, Paddle, Screen};

/// Session-scoped presentation configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub object: Color,
    pub font_size: f32,
    pub small_font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            object: Color::OBJECT,
            font_size: FONT_SIZE,
            small_font_size: SMALL_FONT_SIZE,
        }
    }
}

/// Draws captions, menu text, entities and scores for the current screen
#[derive(Debug, Clone)]
pub struct Hud {
    theme: Theme,
}

impl Hud {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one frame of presentation for the given state
    pub fn draw(&self, state: &GameState, surface: &mut dyn Surface) {
        surface.clear(self.theme.background);

        self.draw_caption(state.screen, surface);
        self.draw_big_text(state, surface);

        if state.screen != Screen::Controls {
            state.player1.render(surface);
            state.player2.render(surface);
            state.ball.render(surface);

            let (w, _) = surface.size();
            self.draw_score(&state.player1, w, surface);
            // The tracker's score stays off-screen; it only matters on the
            // game-over screen
            if !state.ai_mode {
                self.draw_score(&state.player2, w, surface);
            }
        }
    }

    /// Bottom-of-screen hint line, small font
    fn draw_caption(&self, screen: Screen, surface: &mut dyn Surface) {
        let msg: &[&str] = match screen {
            Screen::Play | Screen::Inter | Screen::Pause => {
                &["Press SPACE key to take a break (not too long though)"]
            }
            Screen::Controls => &["Press SPACE to go back to main menu"],
            _ => &[],
        };

        let (w, h) = surface.size();
        let small = self.theme.small_font_size;
        for (i, line) in msg.iter().enumerate() {
            let x = (w - line.chars().count() as f32 * small) / 2.0;
            let y = h - 4.0 + (i as f32 - 2.0) * small;
            surface.draw_text(line, Vec2::new(x, y), small, self.theme.object);
        }
    }

    /// Menu / status text block, big font, one row per line
    fn draw_big_text(&self, state: &GameState, surface: &mut dyn Surface) {
        let mut texts: Vec<&str> = match state.screen {
            Screen::Start => vec![
                "",
                "PONG",
                "",
                "C -> CONTROLS",
                "V -> VS GAME",
                "A -> AI GAME",
            ],
            Screen::Controls => vec![
                "",
                "PLAYER 1:",
                "W -> UP",
                "S -> DOWN",
                "",
                "PLAYER 2:",
                "O -> UP",
                "K -> DOWN",
            ],
            Screen::Inter => vec!["", "", "SPACE -> RESUME", "R     -> RESET"],
            Screen::Pause => vec!["", "PAUSED", "", "SPACE -> RESUME", "R     -> RESET"],
            Screen::GameOver => vec!["", "GAME OVER!"],
            Screen::Play => vec![],
        };
        if state.screen == Screen::GameOver {
            if state.player1.score >= state.max_score {
                texts.push("PLAYER 1 WINS");
            } else if state.player2.score >= state.max_score && !state.ai_mode {
                texts.push("PLAYER 2 WINS");
            } else {
                texts.push("AI WINS");
            }
            texts.push("SPACE -> RESET");
        }

        let (w, _) = surface.size();
        let font = self.theme.font_size;
        for (i, line) in texts.iter().enumerate() {
            let x = (w - line.chars().count() as f32 * font) / 2.0;
            let y = (i as f32 + 4.0) * font;
            surface.draw_text(line, Vec2::new(x, y), font, self.theme.object);
        }
    }

    /// Score, drawn midway between the paddle and the screen center
    fn draw_score(&self, paddle: &Paddle, surface_w: f32, surface: &mut dyn Surface) {
        let center_x = screen_center(Vec2::new(surface_w, 0.0)).x;
        let x = paddle.pos.x + (center_x - paddle.pos.x) / 2.0;
        let y = 2.0 * self.theme.font_size;
        surface.draw_text(
            &paddle.score.to_string(),
            Vec2::new(x, y),
            self.theme.font_size,
            paddle.color,
        );
    }
}
