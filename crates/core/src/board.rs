//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of integer cell tags (0 = empty).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::PieceMatrix;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one line clear pass, bottom to top.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows (row 0 first).
    pub fn from_rows(rows: &[[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and non-zero)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// One row of cells. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Iterate rows from top (row 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Number of completely filled rows
    pub fn full_row_count(&self) -> usize {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).count()
    }

    /// Write a piece's non-zero cells at board offset (x, y).
    ///
    /// Cells that fall outside the board are skipped; callers are expected to have
    /// ruled that out with a collision check first.
    pub fn place(&mut self, piece: &PieceMatrix, x: i8, y: i8) {
        for (dx, dy, tag) in piece.filled() {
            self.set(x + dx, y + dy, tag);
        }
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top).
    ///
    /// Every row that is full when the pass starts is removed and the rows above it
    /// shift down; the same number of empty rows appear at the top. Uses a two-pointer
    /// compaction, so adjacent full rows are all handled in a single pass.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        // Fill the vacated rows at the top
        self.cells[..write_y * WIDTH].fill(EMPTY);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a fixed 2D grid (used by snapshots).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, tag: Cell) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, tag);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        board.set(0, 0, 3);
        board.set(5, 10, 1);

        assert_eq!(board.get(0, 0), Some(3));
        assert_eq!(board.get(5, 10), Some(1));
        assert_eq!(board.cells[0], 3);
        assert_eq!(board.cells[10 * 10 + 5], 1);
    }

    #[test]
    fn test_place_skips_empty_matrix_cells() {
        let mut board = Board::new();
        let s = PieceMatrix::for_kind(PieceKind::S);
        board.place(&s, 2, 5);

        // .##
        // ##.
        assert_eq!(board.get(2, 5), Some(0));
        assert_eq!(board.get(3, 5), Some(4));
        assert_eq!(board.get(4, 5), Some(4));
        assert_eq!(board.get(2, 6), Some(4));
        assert_eq!(board.get(3, 6), Some(4));
        assert_eq!(board.get(4, 6), Some(0));
    }

    #[test]
    fn test_place_keeps_existing_cells_under_holes() {
        let mut board = Board::new();
        board.set(2, 5, 6);
        board.place(&PieceMatrix::for_kind(PieceKind::S), 2, 5);
        assert_eq!(board.get(2, 5), Some(6));
    }

    #[test]
    fn test_clear_adjacent_full_rows_in_one_pass() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 1);
        fill_row(&mut board, 18, 2);
        board.set(0, 17, 5);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(board.get(0, 19), Some(5));
        assert_eq!(board.full_row_count(), 0);
        assert!(board.row(0).iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_clear_more_than_four_rows() {
        let mut board = Board::new();
        for y in 10..20 {
            fill_row(&mut board, y, 2);
        }
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 10);
        assert!(board.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_write_u8_grid_matches_rows() {
        let mut board = Board::new();
        board.set(9, 19, 7);
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][9], 7);
        assert_eq!(Board::from_rows(&grid), board);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn board_rows() -> impl Strategy<Value = Vec<Vec<Cell>>> {
            let row = prop_oneof![
                Just(vec![1u8; WIDTH]),
                proptest::collection::vec(0u8..=7, WIDTH),
            ];
            proptest::collection::vec(row, HEIGHT)
        }

        fn build(rows: &[Vec<Cell>]) -> Board {
            let mut board = Board::new();
            for (y, row) in rows.iter().enumerate() {
                board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
            }
            board
        }

        proptest! {
            #[test]
            fn clearing_keeps_incomplete_rows_in_order(rows in board_rows()) {
                let mut board = build(&rows);
                let before = board.full_row_count();
                let kept: Vec<Vec<Cell>> = rows
                    .iter()
                    .filter(|r| r.iter().any(|&c| c == EMPTY))
                    .cloned()
                    .collect();

                let cleared = board.clear_full_rows();

                prop_assert_eq!(cleared.len(), before);
                prop_assert_eq!(board.full_row_count(), 0);
                prop_assert_eq!(board.cells().len(), WIDTH * HEIGHT);
                for y in 0..before {
                    prop_assert!(board.row(y).iter().all(|&c| c == EMPTY));
                }
                for (i, row) in kept.iter().enumerate() {
                    prop_assert_eq!(board.row(before + i), row.as_slice());
                }
            }
        }
    }
}
