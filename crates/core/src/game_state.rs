//! Game state module - board, active piece and the gravity tick
//!
//! This module ties together the board, the active piece and the piece generator.
//! It is a two-state machine (`Running`, `GameOver`): a tick moves the piece down one
//! row or, when that is blocked, locks it, clears complete rows and spawns the next
//! piece. A spawn that collides immediately ends the game, after which every tick and
//! command is a no-op.

use crate::board::{Board, ClearedRows};
use crate::snapshot::BoardGrid;
use crate::types::{Command, GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};
use crate::{ActivePiece, GameSnapshot, PieceGenerator, RandomSource, SimpleRng};

/// Result of one gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece fell one row
    Moved,
    /// The piece locked and a new piece spawned cleanly
    Locked { lines_cleared: usize },
    /// The piece locked and the next spawn collided
    GameOver { lines_cleared: usize },
    /// The game was already over; nothing happened
    Halted,
}

impl TickOutcome {
    pub fn lines_cleared(&self) -> usize {
        match self {
            TickOutcome::Locked { lines_cleared } | TickOutcome::GameOver { lines_cleared } => {
                *lines_cleared
            }
            TickOutcome::Moved | TickOutcome::Halted => 0,
        }
    }
}

/// Emitted after a piece locks (consumed by observers such as the engine's logging).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub cleared_rows: ClearedRows,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: ActivePiece,
    generator: PieceGenerator<R>,
    phase: GamePhase,
    /// Monotonic id for spawned pieces (the first piece is 1).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game on an empty board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game on an empty board drawing pieces from `rng`
    pub fn with_source(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create a game on a prepared board.
    ///
    /// The first piece is spawned immediately; if it collides the game starts in
    /// [`GamePhase::GameOver`].
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut generator = PieceGenerator::new(rng);
        let active = generator.spawn();
        let mut state = Self {
            board,
            active,
            generator,
            phase: GamePhase::Running,
            piece_id: 1,
            last_event: None,
        };
        if state.active.collides(&state.board) {
            state.phase = GamePhase::GameOver;
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Replace the active piece (test setups and scripted scenarios).
    ///
    /// The piece is taken as is; no collision check is made.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active;
        out.phase = self.phase;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut board: BoardGrid = [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board.write_u8_grid(&mut board);
        GameSnapshot {
            board,
            active: self.active,
            phase: self.phase,
            piece_id: self.piece_id,
        }
    }

    /// Try to move the active piece. Always `false` once the game is over.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over() {
            return false;
        }
        self.active.try_move(dx, dy, &self.board)
    }

    /// Try to rotate the active piece clockwise. Always `false` once the game is over.
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        self.active.try_rotate(&self.board)
    }

    /// Apply a player command
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command.delta() {
            Some((dx, dy)) => self.move_piece(dx, dy),
            None => self.rotate(),
        }
    }

    /// Gravity tick: fall one row, or lock, clear and spawn.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Halted;
        }

        if self.active.try_move(0, 1, &self.board) {
            return TickOutcome::Moved;
        }

        let lines_cleared = self.lock_piece();
        if self.spawn_piece() {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::GameOver { lines_cleared }
        }
    }

    /// Copy the active piece into the board and clear complete rows.
    ///
    /// Returns the number of rows cleared.
    fn lock_piece(&mut self) -> usize {
        let piece = self.active;
        self.board.place(&piece.cells, piece.x, piece.y);
        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            cleared_rows,
        });

        lines_cleared
    }

    /// Spawn the next piece. Returns false (and ends the game) if it collides.
    fn spawn_piece(&mut self) -> bool {
        self.active = self.generator.spawn();
        self.piece_id = self.piece_id.wrapping_add(1);

        if self.active.collides(&self.board) {
            self.phase = GamePhase::GameOver;
            return false;
        }
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SPAWN_X, SPAWN_Y};

    /// Always picks the same catalog entry.
    struct Always(PieceKind);

    impl RandomSource for Always {
        fn next_index(&mut self, _len: usize) -> usize {
            self.0.index()
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.piece_id(), 1);
        assert_eq!((state.active().x, state.active().y), (SPAWN_X, SPAWN_Y));
        assert!(state.board().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_tick_moves_down() {
        let mut state = GameState::with_source(Always(PieceKind::O));
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn test_tick_locks_on_floor_and_spawns() {
        let mut state = GameState::with_source(Always(PieceKind::O));
        for _ in 0..18 {
            assert_eq!(state.tick(), TickOutcome::Moved);
        }
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 0 });

        assert_eq!(state.board().get(4, 18), Some(2));
        assert_eq!(state.board().get(5, 19), Some(2));
        assert_eq!(state.piece_id(), 2);
        assert_eq!((state.active().x, state.active().y), (SPAWN_X, SPAWN_Y));

        let event = state.take_last_event().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!((event.x, event.y), (4, 18));
        assert!(event.cleared_rows.is_empty());
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_lock_clears_completed_row() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            if x != 4 && x != 5 {
                board.set(x, 19, 6);
                board.set(x, 18, 6);
            }
        }
        let mut state = GameState::with_board(board, Always(PieceKind::O));
        let mut outcome = state.tick();
        while outcome == TickOutcome::Moved {
            outcome = state.tick();
        }
        assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 2 });
        assert!(state.board().cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut board = Board::new();
        board.set(4, 0, 1);
        let mut state = GameState::with_board(board, Always(PieceKind::O));
        assert!(state.game_over());

        let snapshot = state.snapshot();
        assert_eq!(state.tick(), TickOutcome::Halted);
        assert!(!state.apply_command(Command::MoveLeft));
        assert!(!state.apply_command(Command::Rotate));
        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn test_commands_map_to_moves() {
        let mut state = GameState::with_source(Always(PieceKind::T));
        assert!(state.apply_command(Command::MoveLeft));
        assert_eq!(state.active().x, SPAWN_X - 1);
        assert!(state.apply_command(Command::MoveRight));
        assert!(state.apply_command(Command::SoftDrop));
        assert_eq!((state.active().x, state.active().y), (SPAWN_X, 1));
        assert!(state.apply_command(Command::Rotate));
        assert_eq!(state.active().cells.rows(), 3);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut state = GameState::with_source(Always(PieceKind::O));
        while state.apply_command(Command::SoftDrop) {}
        assert_eq!(state.active().y, 18);
        assert_eq!(state.piece_id(), 1);
        assert!(state.board().cells().iter().all(|&c| c == 0));
    }
}
