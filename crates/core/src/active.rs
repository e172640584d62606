//! The falling, player-controlled piece.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::PieceMatrix;
use crate::types::{Cell, PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece: kind, current cell matrix and board offset of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub cells: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece in spawn orientation at an explicit offset
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            cells: PieceMatrix::for_kind(kind),
            x,
            y,
        }
    }

    /// Check the piece against walls, floor and settled cells at its current offset
    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.cells, self.x, self.y, board)
    }

    /// Shift the piece by (dx, dy).
    ///
    /// The delta is applied first and undone if the new position collides, in which
    /// case the offset is left exactly as it was and `false` is returned.
    pub fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        self.x += dx;
        self.y += dy;
        if self.collides(board) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }
        true
    }

    /// Rotate 90° clockwise in place, keeping the offset.
    ///
    /// A rotation that would collide is discarded; no alternative offsets are tried.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.cells.rotated_cw();
        if collides(&rotated, self.x, self.y, board) {
            return false;
        }
        self.cells = rotated;
        true
    }

    /// Every filled cell as `(x, y, tag)` in board coordinates
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells
            .filled()
            .map(move |(dx, dy, tag)| (self.x + dx, self.y + dy, tag))
    }
}
