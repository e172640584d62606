//! The narrow interfaces between the engine and the outside world.
//!
//! The engine never draws or reads keys itself. It pushes snapshots into a
//! [`RenderSink`], reports the end of the game through a [`GameOverHook`] and pulls
//! player input from a [`CommandSource`].

use std::time::Duration;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::types::Command;

/// Receives the full state after every change.
pub trait RenderSink {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Notified exactly once when the game ends.
pub trait GameOverHook {
    fn game_over(&mut self, snapshot: &GameSnapshot);
}

impl<F: FnMut(&GameSnapshot)> GameOverHook for F {
    fn game_over(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// Hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl GameOverHook for NoopHook {
    fn game_over(&mut self, _snapshot: &GameSnapshot) {}
}

/// Render sink that drops every frame (headless runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _snapshot: &GameSnapshot) -> Result<()> {
        Ok(())
    }
}

/// An input event delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    Quit,
}

/// Source of player input.
pub trait CommandSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means the timeout elapsed without input. `timeout` is `None` when the
    /// gravity timer has stopped and the loop is only waiting for the player to quit.
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<InputEvent>>;
}

/// Recording sink for tests and tools.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames: Vec<GameSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&GameSnapshot> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frames.push(*snapshot);
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }
}

impl<C: CommandSource + ?Sized> CommandSource for &mut C {
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<InputEvent>> {
        (**self).next_event(timeout)
    }
}
