//! Terminal runner (default binary).
//!
//! One loop serializes everything: render, wait for a key until the next
//! gravity tick is due, apply the key, then feed elapsed time to the gravity
//! clock. Each transition receives the latest state and returns its
//! replacement.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use blockfall::config::GameConfig;
use blockfall::core::{GameState, GravityClock};
use blockfall::input::{handle_key_event, is_restart, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll interval while the gravity clock is cancelled (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!("starting: {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut state = GameState::new(config.seed);
    let mut clock = GravityClock::new(config.tick_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&state, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = clock
            .until_next_tick_ms()
            .map(|ms| Duration::from_millis(ms as u64).saturating_sub(last_tick.elapsed()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit with score {}", state.score());
                        return Ok(());
                    }
                    if is_restart(key) {
                        state = state.restart();
                        clock.restart();
                        last_tick = Instant::now();
                    } else if let Some(command) = handle_key_event(key) {
                        state = state.apply_command(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Carry sub-millisecond remainders into the next iteration.
        let elapsed_ms = last_tick.elapsed().as_millis() as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);

        let was_over = state.is_game_over();
        state = clock.drive(&state, elapsed_ms);
        if !was_over && state.is_game_over() {
            debug!("gravity clock cancelled");
        }
    }
}
