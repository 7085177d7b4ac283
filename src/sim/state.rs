//! Game screens, entities and the session aggregate
//!
//! `GameState` owns the ball and both paddles exclusively; the whole
//! aggregate is mutated synchronously once per frame by `tick`.

use glam::Vec2;

use super::collision::circle_overlaps_rect;
use super::input::{FrameInput, Key, KeyState};
use crate::consts::*;
use crate::render::{Color, Surface};
use crate::screen_center;
use crate::tuning::Tuning;

/// The screen the game is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Start menu (mode selection)
    Start,
    /// Controls help
    Controls,
    /// Active play
    Play,
    /// Intermission between points (versus mode only)
    Inter,
    Pause,
    GameOver,
}

/// Latched movement direction for a human paddle
///
/// Driven by edge-triggered press/release events rather than raw "is held"
/// sampling: a press locks a direction in until that key is explicitly
/// released, and releasing one key never hands control back to the other
/// without a fresh press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveLatch {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

impl MoveLatch {
    /// Advance the latch from this frame's up/down key states
    ///
    /// Up is processed before down, so pressing both in one frame lands on
    /// `MovingDown`. A latch is only cleared by its own key going slack.
    pub fn apply(self, up: KeyState, down: KeyState) -> Self {
        let mut next = self;
        if up.just_pressed {
            next = MoveLatch::MovingUp;
        } else if (up.just_released || !up.held) && next == MoveLatch::MovingUp {
            next = MoveLatch::Idle;
        }
        if down.just_pressed {
            next = MoveLatch::MovingDown;
        } else if (down.just_released || !down.held) && next == MoveLatch::MovingDown {
            next = MoveLatch::Idle;
        }
        next
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Signed velocity components, applied verbatim each frame
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    /// Move one frame and bounce off walls and paddles
    ///
    /// Wall bounce triggers when the leading edge crosses the top or bottom
    /// boundary; the position is clamped back so the ball cannot tunnel or
    /// stick. Paddle bounce is circle-vs-box; the left test short-circuits
    /// the right one, so at most one paddle connects per frame.
    pub fn advance(&mut self, left: &Paddle, right: &Paddle, surface_h: f32) {
        self.pos += self.vel;

        if self.pos.y + self.radius > surface_h {
            self.vel.y = -self.vel.y;
            self.pos.y = surface_h - self.radius;
        } else if self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = self.radius;
        }

        if circle_overlaps_rect(self.pos, self.radius, left.pos, left.half_extents()) {
            self.vel.x = -self.vel.x;
            self.pos.x = left.pos.x + left.width / 2.0 + self.radius;
        } else if circle_overlaps_rect(self.pos, self.radius, right.pos, right.half_extents()) {
            self.vel.x = -self.vel.x;
            self.pos.x = right.pos.x - right.width / 2.0 - self.radius;
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

/// A paddle, human- or AI-controlled
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Center of the paddle rect
    pub pos: Vec2,
    pub score: u32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Bound keys this paddle listens to
    pub up: Key,
    pub down: Key,
    latch: MoveLatch,
}

impl Paddle {
    fn new(pos: Vec2, tuning: &Tuning, up: Key, down: Key) -> Self {
        Self {
            pos,
            score: 0,
            speed: tuning.paddle_speed,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            color: Color::OBJECT,
            up,
            down,
            latch: MoveLatch::Idle,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }

    /// Current latched direction
    pub fn latch(&self) -> MoveLatch {
        self.latch
    }

    /// Human movement: update the latch from this frame's key edges, apply
    /// speed, clamp to the surface (1-unit inset on both ends)
    pub fn advance(&mut self, input: &FrameInput, surface_h: f32) {
        self.latch = self.latch.apply(input.key(self.up), input.key(self.down));

        match self.latch {
            MoveLatch::MovingUp => self.pos.y -= self.speed,
            MoveLatch::MovingDown => self.pos.y += self.speed,
            MoveLatch::Idle => {}
        }

        if self.pos.y - self.height / 2.0 < 0.0 {
            self.pos.y = 1.0 + self.height / 2.0;
        } else if self.pos.y + self.height / 2.0 > surface_h {
            self.pos.y = surface_h - self.height / 2.0 - 1.0;
        }
    }

    /// AI movement: mirror the ball's vertical position exactly
    ///
    /// No smoothing and no speed cap - the tracker is intentionally
    /// unbeatable.
    pub fn track(&mut self, ball: &Ball) {
        self.pos.y = ball.pos.y;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            self.pos - self.half_extents(),
            Vec2::new(self.width, self.height),
            self.color,
        );
    }
}

/// The session aggregate: current screen, mode, entities and counters
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen: Screen,
    pub ai_mode: bool,
    pub ball: Ball,
    /// Left paddle
    pub player1: Paddle,
    /// Right paddle (AI-controlled in AI mode)
    pub player2: Paddle,
    /// Paddle bounces since the last point
    pub rally: u32,
    /// Difficulty level reached this rally
    pub level: u32,
    /// First score to reach this wins
    pub max_score: u32,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh session on the start screen, in versus mode
    pub fn new(tuning: Tuning) -> Self {
        let bounds = Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        let center = screen_center(bounds);

        let player1 = Paddle::new(
            Vec2::new(tuning.paddle_margin + tuning.paddle_width / 2.0, center.y),
            &tuning,
            Key::W,
            Key::S,
        );
        let player2 = Paddle::new(
            Vec2::new(
                bounds.x - tuning.paddle_margin - tuning.paddle_width / 2.0,
                center.y,
            ),
            &tuning,
            Key::O,
            Key::K,
        );
        let ball = Ball {
            pos: center,
            vel: Vec2::splat(tuning.serve_speed),
            radius: tuning.ball_radius,
            color: Color::OBJECT,
        };

        log::info!("new session, win threshold {}", tuning.max_score_versus);

        Self {
            screen: Screen::Start,
            ai_mode: false,
            ball,
            player1,
            player2,
            rally: 0,
            level: 0,
            max_score: tuning.max_score_versus,
            tuning,
        }
    }

    /// Pick the game mode from the start menu; sets the win threshold
    pub fn select_mode(&mut self, ai_mode: bool) {
        self.ai_mode = ai_mode;
        self.max_score = if ai_mode {
            self.tuning.max_score_ai
        } else {
            self.tuning.max_score_versus
        };
        log::info!(
            "mode selected: {}, playing to {}",
            if ai_mode { "ai" } else { "versus" },
            self.max_score
        );
    }

    /// Reposition everything for a new rally and switch to `to`
    ///
    /// Ball returns to the surface center at serve velocity; paddles return
    /// to their initial offsets at vertical center; rally and level reset.
    /// Scores are zeroed only when resetting to the start screen. Paddle
    /// speed keeps any ratchet it picked up during the session.
    pub fn reset(&mut self, bounds: Vec2, to: Screen) {
        self.screen = to;
        self.rally = 0;
        self.level = 0;
        if to == Screen::Start {
            self.player1.score = 0;
            self.player2.score = 0;
        }

        let center = screen_center(bounds);
        self.player1.pos = Vec2::new(
            self.tuning.paddle_margin + self.tuning.paddle_width / 2.0,
            center.y,
        );
        self.player2.pos = Vec2::new(
            bounds.x - self.tuning.paddle_margin - self.tuning.paddle_width / 2.0,
            center.y,
        );
        self.ball.pos = center;
        self.ball.vel = Vec2::splat(self.tuning.serve_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vec2 {
        Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    #[test]
    fn test_latch_press_and_release() {
        let latch = MoveLatch::Idle;
        let pressed = KeyState {
            just_pressed: true,
            just_released: false,
            held: true,
        };
        let held = KeyState {
            just_pressed: false,
            just_released: false,
            held: true,
        };
        let released = KeyState {
            just_pressed: false,
            just_released: true,
            held: false,
        };
        let idle = KeyState::default();

        let latch = latch.apply(pressed, idle);
        assert_eq!(latch, MoveLatch::MovingUp);
        // Still held on later frames - latch persists
        let latch = latch.apply(held, idle);
        assert_eq!(latch, MoveLatch::MovingUp);
        let latch = latch.apply(released, idle);
        assert_eq!(latch, MoveLatch::Idle);
    }

    #[test]
    fn test_latch_both_pressed_down_wins() {
        let pressed = KeyState {
            just_pressed: true,
            just_released: false,
            held: true,
        };
        assert_eq!(
            MoveLatch::Idle.apply(pressed, pressed),
            MoveLatch::MovingDown
        );
    }

    #[test]
    fn test_latch_stuck_key_does_not_resume() {
        // W held the whole time; S pressed on top of it, then released.
        // The paddle must stop - W needs a fresh press to move again.
        let held = KeyState {
            just_pressed: false,
            just_released: false,
            held: true,
        };
        let pressed = KeyState {
            just_pressed: true,
            just_released: false,
            held: true,
        };
        let released = KeyState {
            just_pressed: false,
            just_released: true,
            held: false,
        };

        let latch = MoveLatch::Idle.apply(pressed, KeyState::default());
        assert_eq!(latch, MoveLatch::MovingUp);
        let latch = latch.apply(held, pressed);
        assert_eq!(latch, MoveLatch::MovingDown);
        let latch = latch.apply(held, released);
        assert_eq!(latch, MoveLatch::Idle);
        // W still held, but no new press - stays idle
        let latch = latch.apply(held, KeyState::default());
        assert_eq!(latch, MoveLatch::Idle);
    }

    #[test]
    fn test_paddle_moves_and_clamps_with_margin() {
        let state = GameState::new(Tuning::default());
        let mut paddle = state.player1.clone();
        let mut input = FrameInput::new();
        input.press(paddle.up);

        let y0 = paddle.pos.y;
        paddle.advance(&input, WINDOW_HEIGHT);
        assert_eq!(paddle.pos.y, y0 - paddle.speed);

        // Hold up until clamped at the top: 1-unit inset below the edge
        input.begin_frame();
        for _ in 0..100 {
            paddle.advance(&input, WINDOW_HEIGHT);
        }
        assert_eq!(paddle.pos.y, 1.0 + paddle.height / 2.0);

        // And symmetric at the bottom
        input.release(paddle.up);
        input.press(paddle.down);
        for _ in 0..200 {
            paddle.advance(&input, WINDOW_HEIGHT);
            input.begin_frame();
        }
        assert_eq!(paddle.pos.y, WINDOW_HEIGHT - paddle.height / 2.0 - 1.0);
    }

    #[test]
    fn test_ai_tracks_ball_exactly() {
        let state = GameState::new(Tuning::default());
        let mut paddle = state.player2.clone();
        let mut ball = state.ball.clone();
        ball.pos.y = 77.5;
        paddle.track(&ball);
        assert_eq!(paddle.pos.y, 77.5);
    }

    #[test]
    fn test_ball_bounces_off_bottom_and_clamps() {
        let state = GameState::new(Tuning::default());
        let mut ball = state.ball.clone();
        ball.pos = Vec2::new(400.0, WINDOW_HEIGHT - 12.0);
        ball.vel = Vec2::new(5.0, 5.0);

        ball.advance(&state.player1, &state.player2, WINDOW_HEIGHT);
        assert_eq!(ball.vel.y, -5.0);
        assert_eq!(ball.pos.y, WINDOW_HEIGHT - ball.radius);
        // Horizontal sign untouched by a wall bounce
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_ball_bounces_off_top_and_clamps() {
        let state = GameState::new(Tuning::default());
        let mut ball = state.ball.clone();
        ball.pos = Vec2::new(400.0, 12.0);
        ball.vel = Vec2::new(-5.0, -5.0);

        ball.advance(&state.player1, &state.player2, WINDOW_HEIGHT);
        assert_eq!(ball.vel.y, 5.0);
        assert_eq!(ball.pos.y, ball.radius);
    }

    #[test]
    fn test_ball_passes_paddle_row_without_contact() {
        // Ball crosses the paddle's x column far above it - no flip
        let state = GameState::new(Tuning::default());
        let mut ball = state.ball.clone();
        ball.pos = Vec2::new(state.player1.pos.x + 20.0, 100.0);
        ball.vel = Vec2::new(-5.0, 0.0);

        ball.advance(&state.player1, &state.player2, WINDOW_HEIGHT);
        assert_eq!(ball.vel.x, -5.0);
    }

    #[test]
    fn test_ball_bounces_off_left_paddle_and_snaps() {
        let state = GameState::new(Tuning::default());
        let mut ball = state.ball.clone();
        // One frame away from overlapping the left paddle's right face
        ball.pos = Vec2::new(
            state.player1.pos.x + state.player1.width / 2.0 + ball.radius + 2.0,
            state.player1.pos.y,
        );
        ball.vel = Vec2::new(-5.0, 0.0);

        ball.advance(&state.player1, &state.player2, WINDOW_HEIGHT);
        assert_eq!(ball.vel.x, 5.0);
        assert_eq!(
            ball.pos.x,
            state.player1.pos.x + state.player1.width / 2.0 + ball.radius
        );
    }

    #[test]
    fn test_left_paddle_takes_precedence_when_both_overlap() {
        // Degenerate layout with both paddles on the same spot: only the
        // left bounce applies. Accepted edge-case policy, not a bug.
        let state = GameState::new(Tuning::default());
        let mut left = state.player1.clone();
        let mut right = state.player2.clone();
        left.pos = Vec2::new(400.0, 300.0);
        right.pos = Vec2::new(400.0, 300.0);

        let mut ball = state.ball.clone();
        ball.pos = Vec2::new(400.0, 300.0);
        ball.vel = Vec2::new(-5.0, 0.0);

        ball.advance(&left, &right, WINDOW_HEIGHT);
        // Snapped to the LEFT paddle's far (right) edge
        assert_eq!(ball.pos.x, 400.0 + left.width / 2.0 + ball.radius);
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_reset_to_inter_keeps_scores() {
        let mut state = GameState::new(Tuning::default());
        state.player1.score = 3;
        state.player2.score = 5;
        state.rally = 4;
        state.level = 2;
        state.ball.pos = Vec2::new(-20.0, 40.0);

        state.reset(bounds(), Screen::Inter);
        assert_eq!(state.screen, Screen::Inter);
        assert_eq!(state.player1.score, 3);
        assert_eq!(state.player2.score, 5);
        assert_eq!(state.rally, 0);
        assert_eq!(state.level, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::splat(5.0));
    }

    #[test]
    fn test_reset_to_start_zeroes_scores() {
        let mut state = GameState::new(Tuning::default());
        state.player1.score = 3;
        state.player2.score = 5;

        state.reset(bounds(), Screen::Start);
        assert_eq!(state.player1.score, 0);
        assert_eq!(state.player2.score, 0);
    }

    #[test]
    fn test_reset_to_start_is_idempotent() {
        let mut state = GameState::new(Tuning::default());
        state.player1.score = 7;
        state.ball.pos = Vec2::new(123.0, 456.0);

        state.reset(bounds(), Screen::Start);
        let first = state.clone();
        state.reset(bounds(), Screen::Start);

        assert_eq!(state.screen, first.screen);
        assert_eq!(state.ball.pos, first.ball.pos);
        assert_eq!(state.ball.vel, first.ball.vel);
        assert_eq!(state.player1.pos, first.player1.pos);
        assert_eq!(state.player2.pos, first.player2.pos);
        assert_eq!(state.player1.score, first.player1.score);
        assert_eq!(state.rally, first.rally);
        assert_eq!(state.level, first.level);
    }

    #[test]
    fn test_select_mode_sets_threshold() {
        let mut state = GameState::new(Tuning::default());
        state.select_mode(true);
        assert!(state.ai_mode);
        assert_eq!(state.max_score, 100);
        state.select_mode(false);
        assert!(!state.ai_mode);
        assert_eq!(state.max_score, 11);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any key mashing leaves the paddle center inside the table
            #[test]
            fn paddle_stays_in_bounds(moves in proptest::collection::vec(0u8..3, 1..200)) {
                let state = GameState::new(Tuning::default());
                let mut paddle = state.player1.clone();
                let mut input = FrameInput::new();

                for m in moves {
                    input.begin_frame();
                    match m {
                        0 => {}
                        1 => {
                            input.release(paddle.down);
                            input.press(paddle.up);
                        }
                        _ => {
                            input.release(paddle.up);
                            input.press(paddle.down);
                        }
                    }
                    paddle.advance(&input, WINDOW_HEIGHT);
                    prop_assert!(paddle.pos.y >= paddle.height / 2.0);
                    prop_assert!(paddle.pos.y <= WINDOW_HEIGHT - paddle.height / 2.0);
                }
            }

            /// The wall clamp keeps the ball inside the vertical bounds
            /// from the first frame on
            #[test]
            fn ball_stays_in_vertical_bounds(
                x in 50.0f32..750.0,
                y in 10.0f32..590.0,
                vx in -12.0f32..12.0,
                vy in -12.0f32..12.0,
            ) {
                let state = GameState::new(Tuning::default());
                let mut ball = state.ball.clone();
                ball.pos = Vec2::new(x, y);
                ball.vel = Vec2::new(vx, vy);

                for _ in 0..100 {
                    ball.advance(&state.player1, &state.player2, WINDOW_HEIGHT);
                    prop_assert!(ball.pos.y >= ball.radius);
                    prop_assert!(ball.pos.y <= WINDOW_HEIGHT - ball.radius);
                }
            }
        }
    }
}
