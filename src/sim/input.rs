//! Per-frame input snapshot
//!
//! The host owns raw keyboard polling; the simulation only ever sees a
//! `FrameInput` snapshot built once per tick. Edge flags (`just_pressed`,
//! `just_released`) live for a single frame and are cleared by
//! `begin_frame`; `held` persists until the host reports a release.

/// The fixed key bindings the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Player 1 up
    W,
    /// Player 1 down
    S,
    /// Player 2 up
    O,
    /// Player 2 down
    K,
    /// Show controls (start menu)
    C,
    /// Start an AI game (start menu)
    A,
    /// Start a versus game (start menu)
    V,
    Space,
    R,
}

impl Key {
    pub const COUNT: usize = 9;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// State of a single key for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Key went down this frame
    pub just_pressed: bool,
    /// Key came up this frame
    pub just_released: bool,
    /// Key is currently down
    pub held: bool,
}

/// Snapshot of every bound key for one tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    keys: [KeyState; Key::COUNT],
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full state of a key
    #[inline]
    pub fn key(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    /// Key went down this frame
    #[inline]
    pub fn just_pressed(&self, key: Key) -> bool {
        self.keys[key.index()].just_pressed
    }

    /// Key came up this frame
    #[inline]
    pub fn just_released(&self, key: Key) -> bool {
        self.keys[key.index()].just_released
    }

    /// Key is currently down
    #[inline]
    pub fn held(&self, key: Key) -> bool {
        self.keys[key.index()].held
    }

    /// Host: report a key going down
    pub fn press(&mut self, key: Key) {
        let ks = &mut self.keys[key.index()];
        ks.just_pressed = true;
        ks.held = true;
    }

    /// Host: report a key coming up
    pub fn release(&mut self, key: Key) {
        let ks = &mut self.keys[key.index()];
        ks.just_released = true;
        ks.held = false;
    }

    /// Host: clear edge flags at the start of a frame, keeping held state
    pub fn begin_frame(&mut self) {
        for ks in &mut self.keys {
            ks.just_pressed = false;
            ks.just_released = false;
        }
    }
}
