//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be shared by
//! the core logic, the engine driver, the terminal renderer and the input layer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (4, 0), i.e. `BOARD_WIDTH / 2 - 1`
//!
//! # Cells
//!
//! A board cell is a plain integer tag: `0` is empty, `1..=7` is a settled block whose
//! tag identifies the piece kind (and therefore its color).
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! assert_eq!(PieceKind::T.tag(), 1);
//! assert_eq!(PieceKind::from_tag(7), Some(PieceKind::L));
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 4);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one row every 500ms)
pub const GRAVITY_MS: u64 = 500;

/// Spawn column for the top-left corner of a new piece matrix
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row for the top-left corner of a new piece matrix
pub const SPAWN_Y: i8 = 0;

/// Largest piece matrix side (the I piece is 4 long)
pub const MAX_PIECE_SIZE: usize = 4;

/// A cell on the game board
///
/// - `0`: empty
/// - `1..=7`: settled block, the value is [`PieceKind::tag`]
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// The seven piece kinds, in catalog order.
///
/// The catalog index decides the color tag (`index + 1`):
/// - **T**: 1, cyan
/// - **O**: 2, blue
/// - **I**: 3, orange
/// - **S**: 4, yellow
/// - **Z**: 5, green
/// - **J**: 6, purple
/// - **L**: 7, red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    I,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in the shape catalog.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::T => 0,
            PieceKind::O => 1,
            PieceKind::I => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Color tag stamped into every filled cell of this kind (`index + 1`).
    pub fn tag(&self) -> Cell {
        self.index() as Cell + 1
    }

    /// Inverse of [`PieceKind::tag`]. Returns `None` for `0` and unknown tags.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_tag(3), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_tag(0), None);
    /// assert_eq!(PieceKind::from_tag(8), None);
    /// ```
    pub fn from_tag(tag: Cell) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// The four logical player commands.
///
/// Mapping physical keys to commands is the input layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise, rejected outright when blocked
    Rotate,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }

    /// Offset delta for the movement commands, `None` for [`Command::Rotate`].
    pub fn delta(&self) -> Option<(i8, i8)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::SoftDrop => Some((0, 1)),
            Command::Rotate => None,
        }
    }
}

/// Game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Gravity ticks and commands are accepted
    #[default]
    Running,
    /// A freshly spawned piece collided; nothing is accepted any more
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Running => "running",
            GamePhase::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_column_is_left_of_center() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn tags_round_trip_through_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.tag() as usize, i + 1);
            assert_eq!(PieceKind::from_tag(kind.tag()), Some(*kind));
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn command_strings_and_deltas() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::MoveLeft.delta(), Some((-1, 0)));
        assert_eq!(Command::MoveRight.delta(), Some((1, 0)));
        assert_eq!(Command::SoftDrop.delta(), Some((0, 1)));
        assert_eq!(Command::Rotate.delta(), None);
        assert_eq!(Command::from_str("hold"), None);
    }

    #[test]
    fn phase_defaults_to_running() {
        assert_eq!(GamePhase::default(), GamePhase::Running);
    }
}
