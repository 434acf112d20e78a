//! Legal-destination generation for a single square, independent of
//! whose turn it is. The turn-level rules live in `rules`.

use crate::board::Board;
use crate::types::{Move, Piece, Position};

/// Diagonal step order: NW, NE, SW, SE. Fixed so generated move order
/// is reproducible.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the legal destination moves for the piece on `pos`. When any
/// capture exists for this square, only captures are returned. Empty
/// when the square holds no piece.
pub fn moves_from(board: &Board, pos: Position) -> Vec<Move> {
    let Some(piece) = board.get(pos.row as usize, pos.col as usize) else {
        return Vec::new();
    };

    let moves = if piece.king {
        king_moves(board, pos, piece)
    } else {
        man_moves(board, pos, piece)
    };

    keep_captures_if_any(moves)
}

/// A man steps one square along its two forward diagonals, or jumps an
/// adjacent opposing piece into the empty square directly beyond it.
fn man_moves(board: &Board, pos: Position, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let row = pos.row as i32;
    let col = pos.col as i32;
    let forward = piece.color.forward();

    for dc in [-1, 1] {
        let step_row = row + forward;
        let step_col = col + dc;
        if !Board::is_in_bounds(step_row, step_col) {
            continue;
        }

        match board.get(step_row as usize, step_col as usize) {
            None => {
                let to = Position::new(step_row as u8, step_col as u8);
                moves.push(Move::new(pos, to, false));
            }
            Some(adjacent) if adjacent.color != piece.color => {
                let land_row = row + 2 * forward;
                let land_col = col + 2 * dc;
                if Board::is_in_bounds(land_row, land_col)
                    && board.get(land_row as usize, land_col as usize).is_none()
                {
                    let to = Position::new(land_row as u8, land_col as u8);
                    moves.push(Move::new(pos, to, true));
                }
            }
            Some(_) => {}
        }
    }

    moves
}

/// A king slides over empty squares in all four diagonal directions.
/// The first occupied square on a ray ends the slide; if it holds an
/// opposing piece, every empty square beyond it up to the next occupied
/// square or the edge is a capture landing. An own piece blocks the ray
/// outright, so two occupied squares are never jumped in one move.
fn king_moves(board: &Board, pos: Position, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();

    for (dr, dc) in DIAGONALS {
        let mut row = pos.row as i32 + dr;
        let mut col = pos.col as i32 + dc;

        while Board::is_in_bounds(row, col) && board.get(row as usize, col as usize).is_none() {
            let to = Position::new(row as u8, col as u8);
            moves.push(Move::new(pos, to, false));
            row += dr;
            col += dc;
        }

        if !Board::is_in_bounds(row, col) {
            continue;
        }
        let Some(blocker) = board.get(row as usize, col as usize) else {
            continue;
        };
        if blocker.color == piece.color {
            continue;
        }

        let mut land_row = row + dr;
        let mut land_col = col + dc;
        while Board::is_in_bounds(land_row, land_col)
            && board.get(land_row as usize, land_col as usize).is_none()
        {
            let to = Position::new(land_row as u8, land_col as u8);
            moves.push(Move::new(pos, to, true));
            land_row += dr;
            land_col += dc;
        }
    }

    moves
}

fn keep_captures_if_any(moves: Vec<Move>) -> Vec<Move> {
    if moves.iter().any(|m| m.is_capture) {
        moves.into_iter().filter(|m| m.is_capture).collect()
    } else {
        moves
    }
}
