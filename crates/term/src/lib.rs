//! Terminal presentation for the game.
//!
//! Snapshots are laid out by [`GameView`] into a [`FrameBuffer`] (two terminal columns
//! per board cell), then [`TerminalRenderer`] writes only the cells that changed.
//! [`TerminalSink`] glues both to the engine's render interface.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tag_color, GameView, Viewport};
pub use renderer::{
    encode_diff_into, encode_frame_into, encode_full_into, TerminalRenderer, TerminalSink,
    FALLBACK_VIEWPORT,
};
