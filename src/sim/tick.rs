//! Fixed-step frame update
//!
//! One `tick` per host frame. Each screen has its own handler returning the
//! next screen; `tick` applies the transition. All input is consumed from
//! the per-frame snapshot, so every (screen, key) pair has a defined
//! outcome and unhandled keys are no-ops.

use glam::Vec2;

use super::input::{FrameInput, Key};
use super::state::{GameState, Screen};

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, bounds: Vec2) {
    let next = match state.screen {
        Screen::Start => state.update_start(input),
        Screen::Controls => state.update_controls(input),
        Screen::Play => state.update_play(input, bounds),
        Screen::Inter | Screen::Pause => state.update_break(input, bounds),
        Screen::GameOver => state.update_game_over(input, bounds),
    };
    if next != state.screen {
        log::debug!("screen {:?} -> {:?}", state.screen, next);
        state.screen = next;
    }
}

impl GameState {
    fn update_start(&mut self, input: &FrameInput) -> Screen {
        if input.just_pressed(Key::C) {
            Screen::Controls
        } else if input.just_pressed(Key::A) {
            self.select_mode(true);
            Screen::Play
        } else if input.just_pressed(Key::V) {
            self.select_mode(false);
            Screen::Play
        } else {
            Screen::Start
        }
    }

    fn update_controls(&mut self, input: &FrameInput) -> Screen {
        if input.just_pressed(Key::Space) {
            Screen::Start
        } else {
            Screen::Controls
        }
    }

    /// Intermission and pause react to the same keys
    fn update_break(&mut self, input: &FrameInput, bounds: Vec2) -> Screen {
        if input.just_pressed(Key::Space) {
            Screen::Play
        } else if input.just_pressed(Key::R) {
            self.reset(bounds, Screen::Start);
            Screen::Start
        } else {
            self.screen
        }
    }

    fn update_game_over(&mut self, input: &FrameInput, bounds: Vec2) -> Screen {
        if input.just_pressed(Key::Space) {
            self.reset(bounds, Screen::Start);
            Screen::Start
        } else {
            Screen::GameOver
        }
    }

    /// One frame of active play: paddles, ball, rally bookkeeping, scoring
    fn update_play(&mut self, input: &FrameInput, bounds: Vec2) -> Screen {
        if input.just_pressed(Key::Space) {
            return Screen::Pause;
        }

        self.player1.advance(input, bounds.y);
        if self.ai_mode {
            self.player2.track(&self.ball);
        } else {
            self.player2.advance(input, bounds.y);
        }

        let x_vel = self.ball.vel.x;
        self.ball.advance(&self.player1, &self.player2, bounds.y);

        // Only a paddle flips the horizontal sign (walls flip vertical), so
        // a sign change here is exactly a paddle hit
        if x_vel * self.ball.vel.x < 0.0 {
            // Rally points go to the human side only: the tracker never
            // earns them
            if self.ai_mode && self.ball.pos.x < bounds.x / 2.0 {
                self.player1.score += 1;
            }

            self.rally += 1;

            if self.rally % self.tuning.speed_update_count == 0 {
                self.level += 1;
                let inc = self.tuning.speed_increment;
                self.ball.vel.x += inc.copysign(self.ball.vel.x);
                self.ball.vel.y += inc.copysign(self.ball.vel.y);
                self.player1.speed += inc;
                self.player2.speed += inc;
                log::debug!("level {} - ball velocity {:?}", self.level, self.ball.vel);
            }
        }

        let mut next = Screen::Play;
        if self.ball.pos.x < 0.0 {
            self.player2.score += 1;
            log::info!(
                "point: {} - {}",
                self.player1.score,
                self.player2.score
            );
            if self.ai_mode {
                // No intermission against the tracker - losing the ball
                // ends the run outright
                return Screen::GameOver;
            }
            self.reset(bounds, Screen::Inter);
            next = Screen::Inter;
        } else if self.ball.pos.x > bounds.x {
            self.player1.score += 1;
            log::info!(
                "point: {} - {}",
                self.player1.score,
                self.player2.score
            );
            if self.ai_mode {
                return Screen::GameOver;
            }
            self.reset(bounds, Screen::Inter);
            next = Screen::Inter;
        }

        if self.player1.score >= self.max_score || self.player2.score >= self.max_score {
            next = Screen::GameOver;
        }
        next
    }
}
