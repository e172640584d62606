//! Collision detection between a piece matrix and the board.

use crate::board::Board;
use crate::pieces::PieceMatrix;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece` placed with its top-left corner at (x, y) overlaps the walls,
/// the floor or a settled cell.
///
/// Cells above the top edge (absolute y < 0) are only checked against the side walls,
/// which lets a piece sit partly above row 0.
pub fn collides(piece: &PieceMatrix, x: i8, y: i8, board: &Board) -> bool {
    piece.filled().any(|(dx, dy, _)| {
        let bx = x as i16 + dx as i16;
        let by = y as i16 + dy as i16;
        bx < 0
            || bx >= BOARD_WIDTH as i16
            || by >= BOARD_HEIGHT as i16
            || (by >= 0 && board.is_occupied(bx as i8, by as i8))
    })
}
