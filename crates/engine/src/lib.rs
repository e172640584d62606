//! Game loop driver crate.
//!
//! Wraps a [`core::GameState`] in an [`Engine`] context object that owns the gravity
//! timer and talks to the outside world only through three small traits:
//!
//! - [`RenderSink`]: receives a [`core::GameSnapshot`] after every tick and every
//!   accepted command
//! - [`CommandSource`]: yields player commands (or a quit request)
//! - [`GameOverHook`]: notified exactly once when the game ends
//!
//! The engine is single-threaded and cooperative. [`Engine::run`] interleaves input
//! and gravity on the calling thread; tests drive [`Engine::tick`] and
//! [`Engine::handle_command`] directly.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Engine, EngineConfig, NoopHook, RecordingSink};
//! use blockfall_engine::types::Command;
//!
//! let config = EngineConfig { seed: Some(7), ..EngineConfig::default() };
//! let mut engine = Engine::start(&config, RecordingSink::new(), NoopHook).unwrap();
//!
//! engine.handle_command(Command::SoftDrop).unwrap();
//! engine.tick().unwrap();
//!
//! assert_eq!(engine.sink().frames.len(), 3);
//! ```

pub mod config;
pub mod driver;
pub mod io;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::EngineConfig;
pub use driver::Engine;
pub use io::{
    CommandSource, GameOverHook, InputEvent, NoopHook, NullSink, RecordingSink, RenderSink,
};
pub use timer::GravityTimer;
