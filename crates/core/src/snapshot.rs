use crate::active::ActivePiece;
use crate::types::{Cell, GamePhase, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Everything a renderer needs after a state change: the settled grid, the active
/// piece (matrix + offset) and the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: ActivePiece,
    pub phase: GamePhase,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Settled cells with the active piece drawn on top.
    ///
    /// Active cells outside the grid are dropped.
    pub fn composite_into(&self, out: &mut BoardGrid) {
        *out = self.board;
        for (x, y, tag) in self.active.board_cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                out[y as usize][x as usize] = tag;
            }
        }
    }

    pub fn composite(&self) -> BoardGrid {
        let mut out = [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.composite_into(&mut out);
        out
    }
}
