//! Move validation and application. `apply_move` is the only path that
//! advances a game, and the only place the status can change.

use chrono::Utc;

use crate::board::{BOARD_SIZE, Board};
use crate::movegen;
use crate::types::{
    CapturedCount, Color, GameState, GameStatus, HistoryEntry, Move, MoveError, Position,
};

/// Builds the starting state for a fresh game. Light moves first.
pub fn initial_state(game_id: String) -> GameState {
    let now = Utc::now();
    GameState {
        board: Board::initial(),
        current_turn: Color::Light,
        status: GameStatus::InProgress,
        captured_pieces: CapturedCount::default(),
        last_move: None,
        moves_history: Vec::new(),
        game_id,
        created_at: now,
        last_updated: now,
    }
}

/// Validates `from -> to` for the side to move and derives the next
/// state. Rejection leaves the input state untouched; success returns a
/// fresh `GameState` with the move applied, the turn switched, the
/// history extended, and the status recomputed.
pub fn apply_move(state: &GameState, from: Position, to: Position) -> Result<GameState, MoveError> {
    if state.status.is_over() {
        return Err(MoveError::GameAlreadyOver);
    }
    check_bounds(from)?;
    check_bounds(to)?;

    let piece = state
        .board
        .get(from.row as usize, from.col as usize)
        .ok_or(MoveError::NoPieceAtSource {
            row: from.row,
            col: from.col,
        })?;
    if piece.color != state.current_turn {
        return Err(MoveError::NotPlayersTurn);
    }

    let requested = find_requested_move(&state.board, state.current_turn, from, to)?;

    let mut board = state.board.clone();
    let mut captured = state.captured_pieces;

    if requested.is_capture {
        let victim = jumped_square(&board, from, to);
        board.set(victim.row as usize, victim.col as usize, None);
        captured.increment(state.current_turn);
    }

    let mut moved = piece;
    if !moved.king && to.row as usize == moved.color.crowning_row() {
        moved.king = true;
    }
    board.set(from.row as usize, from.col as usize, None);
    board.set(to.row as usize, to.col as usize, Some(moved));

    let mover = state.current_turn;
    let next_turn = mover.opponent();
    let now = Utc::now();

    let mut history = state.moves_history.clone();
    history.push(HistoryEntry {
        from,
        to,
        player: mover,
        time: now,
    });

    let status = if side_has_any_move(&board, next_turn) {
        GameStatus::InProgress
    } else {
        GameStatus::won_by(mover)
    };

    Ok(GameState {
        board,
        current_turn: next_turn,
        status,
        captured_pieces: captured,
        last_move: Some(requested),
        moves_history: history,
        game_id: state.game_id.clone(),
        created_at: state.created_at,
        last_updated: now,
    })
}

/// Legal destinations for the piece on `from` under the full rule set,
/// including side-wide mandatory capture. This is what a UI move
/// preview must consult, so preview and validation can never disagree.
pub fn legal_destinations(state: &GameState, from: Position) -> Vec<Move> {
    if state.status.is_over() || check_bounds(from).is_err() {
        return Vec::new();
    }
    let Some(piece) = state.board.get(from.row as usize, from.col as usize) else {
        return Vec::new();
    };
    if piece.color != state.current_turn {
        return Vec::new();
    }

    let capture_sources = capture_squares(&state.board, state.current_turn);
    if !capture_sources.is_empty() && !capture_sources.contains(&from) {
        return Vec::new();
    }
    movegen::moves_from(&state.board, from)
}

/// Squares of `color` with at least one capture available.
pub fn capture_squares(board: &Board, color: Color) -> Vec<Position> {
    board
        .squares_of(color)
        .into_iter()
        .filter(|&pos| {
            movegen::moves_from(board, pos)
                .iter()
                .any(|m| m.is_capture)
        })
        .collect()
}

/// Whether `color` can make any legal move at all.
pub fn side_has_any_move(board: &Board, color: Color) -> bool {
    board
        .squares_of(color)
        .into_iter()
        .any(|pos| !movegen::moves_from(board, pos).is_empty())
}

/// Resolves the requested coordinates against the generated move set,
/// honoring the side-wide mandatory-capture rule: while any piece of
/// the moving side can capture, only that piece's capture moves are
/// acceptable.
fn find_requested_move(
    board: &Board,
    mover: Color,
    from: Position,
    to: Position,
) -> Result<Move, MoveError> {
    let capture_sources = capture_squares(board, mover);
    let moves = movegen::moves_from(board, from);

    if capture_sources.is_empty() {
        return moves
            .into_iter()
            .find(|m| m.to_row == to.row && m.to_col == to.col)
            .ok_or(MoveError::IllegalDestination);
    }

    if !capture_sources.contains(&from) {
        return Err(MoveError::MandatoryCaptureViolation);
    }
    moves
        .into_iter()
        .find(|m| m.is_capture && m.to_row == to.row && m.to_col == to.col)
        .ok_or(MoveError::MandatoryCaptureViolation)
}

/// The single occupied square strictly between `from` and `to` on the
/// traversed diagonal. Caller contract: `(from, to)` is a generated
/// capture move, so exactly one such square exists.
fn jumped_square(board: &Board, from: Position, to: Position) -> Position {
    let dr = (to.row as i32 - from.row as i32).signum();
    let dc = (to.col as i32 - from.col as i32).signum();
    let mut row = from.row as i32 + dr;
    let mut col = from.col as i32 + dc;

    while (row, col) != (to.row as i32, to.col as i32) {
        if board.get(row as usize, col as usize).is_some() {
            return Position::new(row as u8, col as u8);
        }
        row += dr;
        col += dc;
    }

    unreachable!("capture move without a jumped piece: {from} -> {to}");
}

fn check_bounds(pos: Position) -> Result<(), MoveError> {
    if (pos.row as usize) < BOARD_SIZE && (pos.col as usize) < BOARD_SIZE {
        Ok(())
    } else {
        Err(MoveError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        })
    }
}
