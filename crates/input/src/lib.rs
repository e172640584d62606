//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four game [`types::Command`]s and exposes the
//! terminal as an [`engine::CommandSource`].

pub mod map;
pub mod terminal;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use terminal::{translate_key, TerminalInput};
