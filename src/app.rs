//! Host-facing facade
//!
//! The windowing host owns the run loop; it calls `update` once per fixed
//! tick with that frame's input snapshot and a draw surface, then presents.
//! `layout` pins the logical resolution, so the simulation always runs on
//! an 800x600 table no matter the window size.

use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::render::Surface;
use crate::sim::{FrameInput, GameState, tick};
use crate::tuning::Tuning;
use crate::ui::{Hud, Theme};

/// A running game session: simulation state plus its presentation adapter
pub struct Game {
    state: GameState,
    hud: Hud,
}

impl Game {
    pub fn new(tuning: Tuning, theme: Theme) -> Self {
        let mut state = GameState::new(tuning);
        state.ball.color = theme.object;
        state.player1.color = theme.object;
        state.player2.color = theme.object;
        Self {
            state,
            hud: Hud::new(theme),
        }
    }

    /// Advance one frame and render it
    pub fn update(&mut self, input: &FrameInput, surface: &mut dyn Surface) {
        let (w, h) = surface.size();
        tick(&mut self.state, input, Vec2::new(w, h));
        self.hud.draw(&self.state, surface);
    }

    /// Logical resolution, independent of the host window size
    pub fn layout(&self, _outer_width: u32, _outer_height: u32) -> (u32, u32) {
        (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CommandRecorder;
    use crate::sim::{Key, Screen};

    #[test]
    fn test_layout_is_fixed() {
        let game = Game::new(Tuning::default(), Theme::default());
        assert_eq!(game.layout(1920, 1080), (800, 600));
        assert_eq!(game.layout(320, 200), (800, 600));
    }

    #[test]
    fn test_update_ticks_and_draws() {
        let mut game = Game::new(Tuning::default(), Theme::default());
        let mut surface = CommandRecorder::new(800.0, 600.0);

        let mut input = FrameInput::new();
        input.press(Key::V);
        game.update(&input, &mut surface);

        assert_eq!(game.state().screen, Screen::Play);
        assert!(!surface.commands.is_empty());

        // Next frame: ball in motion, fresh command list
        input.begin_frame();
        surface.take_commands();
        let before = game.state().ball.pos;
        game.update(&input, &mut surface);
        assert_ne!(game.state().ball.pos, before);
        assert!(!surface.commands.is_empty());
    }
}
