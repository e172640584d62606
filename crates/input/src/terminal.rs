//! Command source backed by crossterm's event queue.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::{CommandSource, InputEvent};
use crate::map::{handle_key_event, should_quit};

/// Upper bound for one blocking wait when the engine has no deadline.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Reads key presses from the terminal.
///
/// Only `Press` events are translated; terminal auto-repeat and key releases are
/// ignored, so one physical press is one command.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

/// Translate one key event into an engine input event.
pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    handle_key_event(key).map(InputEvent::Command)
}

impl CommandSource for TerminalInput {
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<InputEvent>> {
        let started = Instant::now();
        loop {
            let wait = match timeout {
                Some(t) => match t.checked_sub(started.elapsed()) {
                    Some(left) => left,
                    None => return Ok(None),
                },
                None => IDLE_POLL,
            };

            if !event::poll(wait)? {
                if timeout.is_some() {
                    return Ok(None);
                }
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if let Some(ev) = translate_key(key) {
                    return Ok(Some(ev));
                }
            }
        }
    }
}
