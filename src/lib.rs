//! Duel Pong - a two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, input latching, game screens)
//! - `render`: Platform-agnostic draw surface boundary
//! - `ui`: Presentation adapter (captions, menus, score display)
//! - `tuning`: Data-driven game balance
//! - `app`: Host-facing facade (fixed-tick update + layout contract)

pub mod app;
pub mod render;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size, fixed regardless of host window size
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const INIT_BALL_VELOCITY: f32 = 5.0;
    pub const INIT_BALL_RADIUS: f32 = 10.0;

    /// Paddle defaults - position is the paddle center
    pub const INIT_PADDLE_SPEED: f32 = 10.0;
    pub const INIT_PADDLE_WIDTH: f32 = 20.0;
    pub const INIT_PADDLE_HEIGHT: f32 = 100.0;
    /// Margin from the screen edge to the paddle's near face
    pub const INIT_PADDLE_SHIFT: f32 = 50.0;

    /// Every this many rallies the difficulty level ratchets up
    pub const SPEED_UPDATE_COUNT: u32 = 6;
    /// Added to ball velocity magnitude and paddle speed per level
    pub const SPEED_INCREMENT: f32 = 0.5;

    /// Win thresholds; the AI paddle is a perfect tracker, so AI games
    /// only end when the human side racks up rally points
    pub const MAX_SCORE_VERSUS: u32 = 11;
    pub const MAX_SCORE_AI: u32 = 100;

    /// Text sizes used by the presentation adapter
    pub const FONT_SIZE: f32 = 30.0;
    pub const SMALL_FONT_SIZE: f32 = 15.0;
}

/// Center of a playing surface of the given size
#[inline]
pub fn screen_center(bounds: Vec2) -> Vec2 {
    bounds / 2.0
}
