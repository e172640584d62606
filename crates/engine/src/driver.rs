//! Game loop driver.
//!
//! [`Engine`] is the context object that owns one game: the [`GameState`], the render
//! sink, the game-over hook and the gravity timer. Everything runs on the caller's
//! thread; ticks and commands are applied one at a time and each renders a fresh
//! snapshot.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState, RandomSource, SimpleRng, TickOutcome};
use crate::io::{CommandSource, GameOverHook, InputEvent, RenderSink};
use crate::timer::GravityTimer;
use crate::types::{Command, GamePhase};

pub struct Engine<S, H, R = SimpleRng> {
    state: GameState<R>,
    sink: S,
    hook: H,
    timer: GravityTimer,
    snapshot: GameSnapshot,
    game_over_reported: bool,
}

impl<S: RenderSink, H: GameOverHook> Engine<S, H, SimpleRng> {
    /// Start a fresh game seeded from `config`.
    pub fn start(config: &EngineConfig, sink: S, hook: H) -> Result<Self> {
        let seed = config.resolve_seed();
        info!(seed, gravity_ms = config.gravity.as_millis() as u64, "starting game");
        Self::new(GameState::new(seed), sink, hook, config)
    }
}

impl<S: RenderSink, H: GameOverHook, R: RandomSource> Engine<S, H, R> {
    /// Take ownership of `state`, render the first frame and start the gravity timer.
    ///
    /// A state that is already over is reported to the hook right away and the timer
    /// never fires.
    pub fn new(state: GameState<R>, sink: S, hook: H, config: &EngineConfig) -> Result<Self> {
        let snapshot = state.snapshot();
        let mut engine = Self {
            state,
            sink,
            hook,
            timer: GravityTimer::start(config.gravity, Instant::now()),
            snapshot,
            game_over_reported: false,
        };
        let rendered = engine.sink.render(&engine.snapshot);
        if engine.state.game_over() {
            engine.finish();
        }
        rendered?;
        Ok(engine)
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// True while gravity is active (game running and not torn down).
    pub fn is_running(&self) -> bool {
        !self.timer.is_cancelled() && !self.state.game_over()
    }

    /// Advance gravity by one step and render.
    ///
    /// Does nothing (and renders nothing) once the game is over or torn down. The
    /// game-over hook fires even when rendering the final frame fails.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if !self.is_running() {
            return Ok(TickOutcome::Halted);
        }

        let outcome = self.state.tick();
        trace!(?outcome, "tick");
        if let Some(event) = self.state.take_last_event() {
            debug!(
                kind = event.kind.as_str(),
                x = event.x,
                y = event.y,
                lines = outcome.lines_cleared(),
                "piece locked"
            );
            if outcome.lines_cleared() > 0 {
                debug!(rows = ?event.cleared_rows.as_slice(), "rows cleared");
            }
        }

        let rendered = self.render();
        if self.state.game_over() {
            self.finish();
        }
        rendered?;
        Ok(outcome)
    }

    /// Apply one player command, rendering if it was accepted.
    pub fn handle_command(&mut self, command: Command) -> Result<bool> {
        if !self.is_running() {
            return Ok(false);
        }

        let accepted = self.state.apply_command(command);
        if accepted {
            self.render()?;
        } else if command == Command::Rotate {
            debug!(kind = self.state.active().kind.as_str(), "rotation rejected");
        }
        Ok(accepted)
    }

    /// Cooperative loop: wait for input until the next gravity deadline, tick when it
    /// passes. Returns when the source reports [`InputEvent::Quit`].
    ///
    /// After game over the timer is stopped and the loop only waits for quit.
    pub fn run<C: CommandSource>(&mut self, source: &mut C) -> Result<()> {
        loop {
            let now = Instant::now();
            if self.timer.is_due(now) {
                self.tick()?;
                self.timer.reschedule(now);
                continue;
            }

            match source.next_event(self.timer.remaining(now))? {
                Some(InputEvent::Quit) => {
                    info!(phase = self.phase().as_str(), "quit requested");
                    return Ok(());
                }
                Some(InputEvent::Command(command)) => {
                    self.handle_command(command)?;
                }
                None => {}
            }
        }
    }

    /// Stop the gravity timer and hand back the final state.
    pub fn teardown(mut self) -> GameState<R> {
        if self.timer.cancel() {
            info!("gravity timer cancelled on teardown");
        }
        self.state
    }

    fn render(&mut self) -> Result<()> {
        self.state.snapshot_into(&mut self.snapshot);
        self.sink.render(&self.snapshot)
    }

    fn finish(&mut self) {
        if self.timer.cancel() {
            debug!("gravity timer cancelled");
        }
        if !self.game_over_reported {
            self.game_over_reported = true;
            info!(pieces = self.state.piece_id(), "game over");
            self.hook.game_over(&self.snapshot);
        }
    }
}
