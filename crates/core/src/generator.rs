//! Piece generator - uniform random selection from the shape catalog.

use crate::active::ActivePiece;
use crate::pieces::SHAPES;
use crate::rng::{RandomSource, SimpleRng};

/// Produces new active pieces at the spawn position.
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = SimpleRng> {
    rng: R,
}

impl PieceGenerator<SimpleRng> {
    /// Generator backed by [`SimpleRng`] with the given seed
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PieceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a template uniformly and return it as a piece at (`SPAWN_X`, `SPAWN_Y`).
    ///
    /// The returned piece is not checked against any board.
    pub fn spawn(&mut self) -> ActivePiece {
        let index = self.rng.next_index(SHAPES.len()) % SHAPES.len();
        ActivePiece::new(SHAPES[index].kind)
    }
}
