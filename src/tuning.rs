//! Data-driven game balance
//!
//! Every gameplay number the simulation consumes lives here, so a host can
//! rebalance the game from a JSON blob without recompiling. Fields omitted
//! from the JSON keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance numbers for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Initial ball velocity on each axis, restored on every serve
    pub serve_speed: f32,
    /// Initial human paddle speed per frame
    pub paddle_speed: f32,
    /// Rallies between difficulty ratchets
    pub speed_update_count: u32,
    /// Added to ball velocity magnitude and paddle speed per ratchet
    pub speed_increment: f32,
    /// Win threshold for human-vs-human games
    pub max_score_versus: u32,
    /// Win threshold for AI games (high on purpose: the tracker never
    /// misses, so the human wins on rally points or not at all)
    pub max_score_ai: u32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Margin from the screen edge to each paddle's near face
    pub paddle_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            serve_speed: INIT_BALL_VELOCITY,
            paddle_speed: INIT_PADDLE_SPEED,
            speed_update_count: SPEED_UPDATE_COUNT,
            speed_increment: SPEED_INCREMENT,
            max_score_versus: MAX_SCORE_VERSUS,
            max_score_ai: MAX_SCORE_AI,
            ball_radius: INIT_BALL_RADIUS,
            paddle_width: INIT_PADDLE_WIDTH,
            paddle_height: INIT_PADDLE_HEIGHT,
            paddle_margin: INIT_PADDLE_SHIFT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
