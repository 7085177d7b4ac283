//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only (no delta-time scaling)
//! - Input arrives as an abstract per-frame key snapshot
//! - No platform dependencies; entities only touch the abstract `Surface`
//!   boundary when asked to render

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::circle_overlaps_rect;
pub use input::{FrameInput, Key, KeyState};
pub use state::{Ball, GameState, MoveLatch, Paddle, Screen};
pub use tick::tick;
