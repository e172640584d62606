//! Pieces module - shape catalog and cell matrices
//!
//! Every piece is a small row-major matrix of cell tags (at most 4x4). The catalog
//! holds the seven immutable 0/1 templates; spawning stamps the filled entries with
//! the kind's color tag.
//!
//! Rotation is a plain 90° clockwise matrix rotation, `new[i][j] = old[rows-1-j][i]`,
//! anchored at the matrix's top-left corner. There are no wall kicks.

use crate::types::{Cell, PieceKind, EMPTY, MAX_PIECE_SIZE};

/// An immutable 0/1 shape definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub kind: PieceKind,
    pub cells: &'static [&'static [u8]],
}

/// The fixed catalog, indexed by [`PieceKind::index`].
pub const SHAPES: [ShapeTemplate; 7] = [
    ShapeTemplate {
        kind: PieceKind::T,
        cells: &[&[1, 1, 1], &[0, 1, 0]],
    },
    ShapeTemplate {
        kind: PieceKind::O,
        cells: &[&[1, 1], &[1, 1]],
    },
    ShapeTemplate {
        kind: PieceKind::I,
        cells: &[&[1, 1, 1, 1]],
    },
    ShapeTemplate {
        kind: PieceKind::S,
        cells: &[&[0, 1, 1], &[1, 1, 0]],
    },
    ShapeTemplate {
        kind: PieceKind::Z,
        cells: &[&[1, 1, 0], &[0, 1, 1]],
    },
    ShapeTemplate {
        kind: PieceKind::J,
        cells: &[&[1, 0, 0], &[1, 1, 1]],
    },
    ShapeTemplate {
        kind: PieceKind::L,
        cells: &[&[0, 0, 1], &[1, 1, 1]],
    },
];

/// Get the template for a piece kind
pub fn template(kind: PieceKind) -> &'static ShapeTemplate {
    &SHAPES[kind.index()]
}

/// A piece's cell matrix.
///
/// Stored inline (no allocation) in a 4x4 array; only the top-left `rows x cols`
/// region is meaningful, the rest stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    cells: [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
    rows: u8,
    cols: u8,
}

impl PieceMatrix {
    /// Build a matrix from row slices, copying values as they are.
    ///
    /// Rows longer than 4 entries (or more than 4 rows) are truncated. Short rows are
    /// padded with empty cells up to the widest row.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        let row_count = rows.len().min(MAX_PIECE_SIZE);
        let mut col_count = 0;
        for (y, row) in rows.iter().take(row_count).enumerate() {
            let w = row.len().min(MAX_PIECE_SIZE);
            col_count = col_count.max(w);
            cells[y][..w].copy_from_slice(&row[..w]);
        }
        Self {
            cells,
            rows: row_count as u8,
            cols: col_count as u8,
        }
    }

    /// Stamp a template: every non-zero entry becomes the kind's color tag.
    pub fn from_template(template: &ShapeTemplate) -> Self {
        let mut m = Self::from_rows(template.cells);
        let tag = template.kind.tag();
        for row in m.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell != EMPTY {
                    *cell = tag;
                }
            }
        }
        m
    }

    /// Spawn matrix for a piece kind
    pub fn for_kind(kind: PieceKind) -> Self {
        Self::from_template(template(kind))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell at matrix column `x`, row `y`. Returns None outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.cols as usize || y >= self.rows as usize {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// One row of the meaningful region.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y][..self.cols as usize]
    }

    /// Iterate non-zero cells as `(dx, dy, tag)`.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        (0..self.rows as usize).flat_map(move |y| {
            (0..self.cols as usize).filter_map(move |x| {
                let cell = self.cells[y][x];
                (cell != EMPTY).then_some((x as i8, y as i8, cell))
            })
        })
    }

    /// Rotate 90° clockwise. A `rows x cols` matrix becomes `cols x rows`.
    ///
    /// Computed as `new[i][j] = old[rows-1-j][i]`. Note that transposing and then
    /// reversing the row order gives the opposite, counter-clockwise turn.
    ///
    /// ```
    /// use blockfall_core::PieceMatrix;
    ///
    /// let j = PieceMatrix::from_rows(&[&[6, 0, 0], &[6, 6, 6]]);
    /// let r = j.rotated_cw();
    /// assert_eq!((r.rows(), r.cols()), (3, 2));
    /// assert_eq!(r.row(0), &[6, 6]);
    /// assert_eq!(r.row(1), &[6, 0]);
    /// assert_eq!(r.row(2), &[6, 0]);
    /// ```
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }
}
