//! Game-state classification for the side about to move

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

use super::legality::{is_in_check, legal_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }

    /// Checkmate and stalemate end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// False when `color` has no king on the board.
pub fn checkmate(board: &Board, color: Color) -> bool {
    status(board, color) == GameStatus::Checkmate
}

/// False when `color` has no king on the board.
pub fn stalemate(board: &Board, color: Color) -> bool {
    status(board, color) == GameStatus::Stalemate
}

/// Status for `color`, the player about to move.
///
/// Precedence is checkmate, stalemate, check, playing. A side without a king
/// is always `Playing`.
pub fn status(board: &Board, color: Color) -> GameStatus {
    if board.find_king(color).is_none() {
        return GameStatus::Playing;
    }
    let in_check = is_in_check(board, color);
    let stuck = legal_moves(board, color).is_empty();
    match (in_check, stuck) {
        (true, true) => GameStatus::Checkmate,
        (false, true) => GameStatus::Stalemate,
        (true, false) => GameStatus::Check,
        (false, false) => GameStatus::Playing,
    }
}
