//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `blocktris-term`. The game starts on the attract screen; Enter starts a
//! game.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blocktris::config::{AppConfig, Args};
use blocktris::core::{GameSnapshot, ModeController};
use blocktris::input::{should_quit, KeyInput, KeyTracker};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_args(args)?;
    init_logging(&config)?;
    info!(seed = config.seed, tick_ms = config.tick_ms(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!(key_releases = term.key_releases(), "terminal ready");

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

/// Logs go to a file or nowhere; the terminal belongs to the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(file) = config.open_log_file()? else {
        return Ok(());
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut ctl = ModeController::new(config.seed);
    let mut keys = KeyTracker::new().with_release_timeout_ms(config.release_timeout_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = config.tick;
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        ctl.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    match keys.handle(key) {
                        Some(KeyInput::Down(action)) => {
                            let took = ctl.key_down(action);
                            debug!(action = action.as_str(), took, "key down");
                        }
                        Some(KeyInput::Up(action)) => {
                            ctl.key_up(action);
                        }
                        None => {}
                    }
                }
                // Releases typed into another window never reach us.
                Event::FocusLost => {
                    for action in keys.reset() {
                        ctl.key_up(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();

            for action in keys.update(config.tick_ms()) {
                ctl.key_up(action);
            }
            ctl.tick();
        }
    }
}
