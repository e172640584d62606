//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state with **zero dependencies** on UI,
//! timers or I/O, so it runs headless in tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of cell tags, piece placement and line clearing
//! - [`collision`]: the collision predicate shared by movement, rotation and spawning
//! - [`pieces`]: shape catalog and the rotatable cell matrix
//! - [`active`]: the falling piece and its speculative move/rotate operations
//! - [`rng`]: injectable random source and a seeded LCG
//! - [`generator`]: uniform piece selection at the spawn position
//! - [`game_state`]: the `Running`/`GameOver` state machine driven by gravity ticks
//! - [`snapshot`]: copyable view of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random from 7 shapes and spawn at (4, 0)
//! - Rotation is a plain 90° clockwise matrix rotation, rejected when blocked (no wall kicks)
//! - A piece locks as soon as a gravity tick cannot move it down (no lock delay)
//! - Complete rows are removed and empty rows inserted at the top
//! - The game ends when a freshly spawned piece overlaps settled cells
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//!
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! assert!(!game.game_over());
//! ```

pub mod active;
pub mod board;
pub mod collision;
pub mod game_state;
pub mod generator;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::ActivePiece;
pub use board::{Board, ClearedRows};
pub use collision::collides;
pub use game_state::{GameState, LockEvent, TickOutcome};
pub use generator::PieceGenerator;
pub use pieces::{template, PieceMatrix, ShapeTemplate, SHAPES};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{BoardGrid, GameSnapshot};
