//! Blockfall terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a
//! [`Session`] driving gravity from wall-clock time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{info, warn};

use blockfall::config::AppConfig;
use blockfall::core::{GameSnapshot, GameState, Session};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging::init_file_logger;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_file_logger(path, config.log_level)?;
    }
    info!(
        "starting: seed={} gravity_ms={}",
        config.seed, config.gravity_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("terminal restore failed: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::new(GameState::new(config.seed), config.gravity_ms);
    let view = GameView::default().with_palette(config.palette.clone());

    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Wait for input, but never past the next gravity tick.
        let wait_ms = session
            .until_next_tick_ms()
            .map_or(FRAME_MS, |ms| ms.min(FRAME_MS));

        if event::poll(Duration::from_millis(wait_ms as u64))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.handle(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        session.advance(elapsed);
    }

    session.shutdown();
    info!(
        "exit: lines={} pieces={}",
        session.game().lines(),
        session.game().piece_id()
    );
    Ok(())
}
