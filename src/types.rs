use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;

/// The two sides. Light's far edge is row 0, Dark's is row 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row step a man of this color advances by.
    pub fn forward(self) -> i32 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// The opponent's home row, where a man of this color is crowned.
    pub fn crowning_row(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => crate::board::BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// A piece on the board. `king` flips to true exactly once, on promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    pub fn king(color: Color) -> Self {
        Self { color, king: true }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One destination produced by the move generator.
///
/// Contract:
/// - A capture jumps exactly one opposing piece on the traversed diagonal.
/// - `is_capture` stays inside the engine; on the wire `lastMove` carries
///   coordinates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    #[serde(skip)]
    pub is_capture: bool,
}

impl Move {
    pub fn new(from: Position, to: Position, is_capture: bool) -> Self {
        Self {
            from_row: from.row,
            from_col: from.col,
            to_row: to.row,
            to_col: to.col,
            is_capture,
        }
    }

    pub fn from_pos(&self) -> Position {
        Position::new(self.from_row, self.from_col)
    }

    pub fn to_pos(&self) -> Position {
        Position::new(self.to_row, self.to_col)
    }
}

/// Game status. Terminal once set to a won state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    LightWon,
    DarkWon,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn won_by(color: Color) -> Self {
        match color {
            Color::Light => GameStatus::LightWon,
            Color::Dark => GameStatus::DarkWon,
        }
    }
}

/// Capture tally indexed by the color that performed the captures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedCount {
    pub light: u32,
    pub dark: u32,
}

impl CapturedCount {
    pub fn increment(&mut self, color: Color) {
        match color {
            Color::Light => self.light += 1,
            Color::Dark => self.dark += 1,
        }
    }
}

/// One applied move in the game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub from: Position,
    pub to: Position,
    pub player: Color,
    pub time: DateTime<Utc>,
}

/// Full game snapshot matching the JSON wire shape consumed by the
/// frontend and the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub current_turn: Color,
    pub status: GameStatus,
    pub captured_pieces: CapturedCount,
    pub last_move: Option<Move>,
    pub moves_history: Vec<HistoryEntry>,
    pub game_id: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Why a requested move was rejected. All recoverable; the game state is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("no piece at ({row}, {col})")]
    NoPieceAtSource { row: u8, col: u8 },
    #[error("it is not that player's turn")]
    NotPlayersTurn,
    #[error("destination is not a legal move for that piece")]
    IllegalDestination,
    #[error("a capture is available and must be taken")]
    MandatoryCaptureViolation,
}
