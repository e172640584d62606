//! Terminal runner (default binary).
//!
//! Reads `BLOCKFALL_*` settings from the environment, takes over the terminal and runs
//! one game until the player quits.

use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::GameSnapshot;
use blockfall::engine::{Engine, EngineConfig};
use blockfall::input::TerminalInput;
use blockfall::term::{TerminalRenderer, TerminalSink};

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    init_logging(&config)?;

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let mut sink = TerminalSink::new(renderer);

    let result = run(&config, &mut sink);

    // Always try to restore terminal state.
    let restored = sink.renderer_mut().exit();
    result.and(restored)
}

fn run(config: &EngineConfig, sink: &mut TerminalSink) -> Result<()> {
    let hook = |snap: &GameSnapshot| {
        info!(pieces = snap.piece_id, "game over, press q to quit");
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07").and_then(|()| out.flush());
    };

    let mut engine = Engine::start(config, sink, hook)?;
    engine.run(&mut TerminalInput::new())?;

    let state = engine.teardown();
    info!(
        pieces = state.piece_id(),
        phase = state.phase().as_str(),
        "session ended"
    );
    Ok(())
}

/// Log to the configured file only; the terminal belongs to the game.
fn init_logging(config: &EngineConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
