//! Terminal 2048 runner (default binary).
//!
//! Wires crossterm key events to the board engine and redraws the board
//! through a framebuffer renderer whenever the engine reports a change.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_2048::config::AppConfig;
use tui_2048::core::{Game, GameSnapshot};
use tui_2048::input::{handle_key_event, resolve_start, should_quit};
use tui_2048::sink::RedrawSignal;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    // Validate before touching the terminal so errors print normally.
    let game = Game::with_config(config.game_config()).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `TUI_2048_LOG_PATH` since the terminal belongs to the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to open log file {}", path))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    info!("logging to {}", path);
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<()> {
    let signal = RedrawSignal::new();
    game.subscribe(Box::new(signal.clone()));
    signal.mark_dirty();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        if signal.take_dirty() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    match signal.outcome() {
                        Some(status) => info!("quit after {} with score {}", status, game.score()),
                        None => info!("quit mid-game with score {}", game.score()),
                    }
                    return Ok(());
                }

                if let Some(action) = handle_key_event(key) {
                    let action = resolve_start(action, game.status());
                    if action == GameAction::Restart {
                        signal.clear_outcome();
                    }
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                signal.mark_dirty();
            }
            // Auto-repeat and key release never move tiles.
            _ => {}
        }
    }
}
