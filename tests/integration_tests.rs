//! Whole-game scenarios driven through `GameState` and `Engine`.

use std::cell::Cell as Counter;

use blockfall::core::{ActivePiece, Board, GameSnapshot, GameState, RandomSource, TickOutcome};
use blockfall::engine::{Engine, EngineConfig, RecordingSink};
use blockfall::types::{Command, GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Always hands out the same shape.
struct Always(PieceKind);

impl RandomSource for Always {
    fn next_index(&mut self, _len: usize) -> usize {
        self.0.index()
    }
}

#[test]
fn vertical_i_completes_the_bottom_row() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 5 {
            board.set(x, 19, 7);
        }
    }
    let mut state = GameState::with_board(board, Always(PieceKind::I));
    assert!(!state.game_over());

    assert!(state.apply_command(Command::Rotate));
    assert!(state.apply_command(Command::MoveRight));
    assert_eq!((state.active().x, state.active().y), (5, 0));

    let mut moved = 0;
    let outcome = loop {
        match state.tick() {
            TickOutcome::Moved => moved += 1,
            other => break other,
        }
    };
    assert_eq!(moved, 16);
    assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 1 });

    let board = state.board();
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
    assert_eq!(board.full_row_count(), 0);
    assert!(board.row(0).iter().all(|&c| c == EMPTY));
    // The three upper I cells dropped by one row.
    let tag = PieceKind::I.tag();
    for y in 17..20 {
        assert_eq!(board.get(5, y), Some(tag));
    }
    assert_eq!(board.get(5, 16), Some(EMPTY));
    assert_eq!(board.get(0, 19), Some(EMPTY));
}

#[test]
fn blocked_spawn_ends_the_game_with_one_notification() {
    let mut board = Board::new();
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, 3);
        }
    }
    let state = GameState::with_board(board, Always(PieceKind::O));
    assert_eq!(state.phase(), GamePhase::GameOver);

    let calls = Counter::new(0);
    let hook = |snap: &GameSnapshot| {
        assert!(snap.game_over());
        calls.set(calls.get() + 1);
    };
    let mut engine = Engine::new(state, RecordingSink::new(), hook, &EngineConfig::default())
        .expect("engine starts");

    for _ in 0..5 {
        assert_eq!(engine.tick().unwrap(), TickOutcome::Halted);
    }
    assert!(!engine.handle_command(Command::Rotate).unwrap());
    assert!(engine.timer().is_cancelled());
    assert_eq!(engine.sink().frames.len(), 1);

    let state = engine.teardown();
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(calls.get(), 1);
}

#[test]
fn commands_are_no_ops_after_game_over() {
    let mut state = GameState::with_source(Always(PieceKind::O));
    let mut guard = 0;
    while !state.game_over() {
        state.tick();
        guard += 1;
        assert!(guard < 1000);
    }

    let before = state.snapshot();
    assert!(!state.apply_command(Command::MoveLeft));
    assert!(!state.apply_command(Command::SoftDrop));
    assert!(!state.rotate());
    assert_eq!(state.tick(), TickOutcome::Halted);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn soft_drop_moves_but_never_locks() {
    let mut state = GameState::with_source(Always(PieceKind::O));
    for _ in 0..18 {
        assert!(state.apply_command(Command::SoftDrop));
    }
    assert_eq!(state.active().y, 18);
    assert!(!state.apply_command(Command::SoftDrop));
    assert_eq!(state.active().y, 18);
    assert!(state.board().cells().iter().all(|&c| c == EMPTY));
    assert_eq!(state.piece_id(), 1);

    assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 0 });
    assert_eq!(state.piece_id(), 2);
    assert_eq!(*state.active(), ActivePiece::new(PieceKind::O));
}

#[test]
fn every_accepted_change_is_rendered() {
    let state = GameState::with_source(Always(PieceKind::T));
    let config = EngineConfig::default();
    let mut engine = Engine::new(state, RecordingSink::new(), |_: &GameSnapshot| {}, &config)
        .unwrap();

    engine.handle_command(Command::Rotate).unwrap();
    engine.handle_command(Command::MoveLeft).unwrap();
    engine.tick().unwrap();

    let frames = &engine.sink().frames;
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1].active.cells.rows(), 3);
    assert_eq!((frames[2].active.x, frames[2].active.y), (3, 0));
    assert_eq!((frames[3].active.x, frames[3].active.y), (3, 1));
    assert!(frames.iter().all(|f| f.phase == GamePhase::Running));
}

#[test]
fn rotation_against_the_right_wall_keeps_matrix_and_offset() {
    let mut state = GameState::with_source(Always(PieceKind::I));
    let mut upright = ActivePiece::at(PieceKind::I, 9, 10);
    upright.cells = upright.cells.rotated_cw();
    state.set_active(upright);

    assert!(!state.apply_command(Command::Rotate));
    assert_eq!(*state.active(), upright);
    assert_eq!(state.active().cells.rows(), 4);
    assert_eq!((state.active().x, state.active().y), (9, 10));

    // One step left is still too close: the flat I would reach x = 11.
    assert!(state.apply_command(Command::MoveLeft));
    assert!(!state.apply_command(Command::Rotate));
    assert_eq!(state.active().x, 8);
}
