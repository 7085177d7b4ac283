//! Duel Pong entry point
//!
//! The real windowing/font/input host lives outside this crate. The binary
//! runs a short headless AI session against the command recorder, which
//! exercises the full frame path: input snapshot -> tick -> draw commands.

use duel_pong::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use duel_pong::render::CommandRecorder;
use duel_pong::sim::{FrameInput, Key, Screen};
use duel_pong::ui::Theme;
use duel_pong::{Game, Tuning};

/// Safety cap in case the idle paddle keeps getting lucky
const MAX_DEMO_FRAMES: u32 = 20_000;

fn main() {
    env_logger::init();
    log::info!("Duel Pong (headless demo) starting...");

    let mut game = Game::new(Tuning::default(), Theme::default());
    let mut surface = CommandRecorder::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut input = FrameInput::new();

    // Pick the AI game from the start menu, then leave the left paddle idle
    input.press(Key::A);
    game.update(&input, &mut surface);
    input.release(Key::A);
    input.begin_frame();

    let mut frames = 1u32;
    while game.state().screen == Screen::Play && frames < MAX_DEMO_FRAMES {
        surface.take_commands();
        game.update(&input, &mut surface);
        frames += 1;
    }

    let state = game.state();
    log::info!("demo finished on {:?}", state.screen);
    println!(
        "ran {} frames: {:?}, score {} - {}, rally {}, {} draw commands in the last frame",
        frames,
        state.screen,
        state.player1.score,
        state.player2.score,
        state.rally,
        surface.commands.len()
    );
}
