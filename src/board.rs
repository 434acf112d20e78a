use serde::{Deserialize, Serialize};

use crate::types::{Color, Piece, Position};

pub const BOARD_SIZE: usize = 10;

/// 10x10 grid of cells. Row 0 is Light's far edge, row 9 is Dark's.
///
/// Serializes as the bare 10x10 array of `null | {color, king}` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard starting position: Dark men on rows 0-3,
    /// Light men on rows 6-9, dark squares only.
    pub fn initial() -> Self {
        let mut board = Self::empty();

        for row in 0..4 {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 1 {
                    board.cells[row][col] = Some(Piece::man(Color::Dark));
                }
            }
        }
        for row in 6..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 1 {
                    board.cells[row][col] = Some(Piece::man(Color::Light));
                }
            }
        }

        board
    }

    /// Reads one cell. Panics when the coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[row][col]
    }

    /// Writes one cell. Panics when the coordinate is off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Option<Piece>) {
        self.cells[row][col] = cell;
    }

    /// Bounds check for ray walks, which step with signed deltas.
    pub fn is_in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// All squares currently occupied by `color`, scanned row-major.
    pub fn squares_of(&self, color: Color) -> Vec<Position> {
        let mut out = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.cells[row][col]
                    && piece.color == color
                {
                    out.push(Position::new(row as u8, col as u8));
                }
            }
        }
        out
    }

    /// Returns `(light_count, dark_count)`.
    pub fn count(&self) -> (u8, u8) {
        let mut light = 0;
        let mut dark = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(piece) if piece.color == Color::Light => light += 1,
                    Some(_) => dark += 1,
                    None => {}
                }
            }
        }
        (light, dark)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
