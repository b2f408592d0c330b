//! Chess Opponent Core Library
//!
//! Rules engine (move generation, legality, check/checkmate/stalemate) and a
//! medium-strength automated opponent built on minimax with alpha-beta
//! pruning. Coordinates are `(row, col)` with row 0 on black's back rank and
//! col 0 on the a-file.

pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use error::{Error, Result};
pub use game::{GameSession, MoveRecord, Outcome};
pub use rules::{
    checkmate, is_in_check, is_legal_move, is_square_under_attack, is_valid_move, legal_moves,
    possible_moves, stalemate, status, GameStatus,
};
pub use search::{choose_move, Engine, EngineConfig, SearchOutcome};

/// Basic position information
#[derive(Debug)]
pub struct PositionInfo {
    pub piece_count: u32,
    pub legal_move_count: u32,
    pub side_to_move: Color,
    /// Material balance from the side to move's point of view
    pub material: i32,
    pub status: GameStatus,
}

/// Analyzes a position for the side about to move
pub fn analyze_position(board: &Board, side_to_move: Color) -> PositionInfo {
    PositionInfo {
        piece_count: board.occupied().count() as u32,
        legal_move_count: legal_moves(board, side_to_move).len() as u32,
        side_to_move,
        material: search::evaluate(board, side_to_move),
        status: status(board, side_to_move),
    }
}

/// Creates the standard starting position
pub fn initial() -> Board {
    Board::initial()
}

/// Moves the piece on `from` to `to` on a copy of `board`. No legality check.
pub fn apply(board: &Board, from: Square, to: Square) -> Board {
    board.apply(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let info = analyze_position(&initial(), Color::White);

        // Starting position should have 32 pieces
        assert_eq!(info.piece_count, 32);

        // 16 pawn moves + 4 knight moves
        assert_eq!(info.legal_move_count, 20);

        assert_eq!(info.material, 0);
        assert_eq!(info.status, GameStatus::Playing);
    }

    #[test]
    fn test_engine_reply_through_facade() {
        let board = apply(&initial(), "e2".parse().unwrap(), "e4".parse().unwrap());
        let mv = choose_move(&board, Color::Black).unwrap();

        assert!(is_valid_move(&board, mv.from, mv.to, Color::Black));
        assert!(legal_moves(&board, Color::Black).contains(&mv));
        let next = apply(&board, mv.from, mv.to);
        assert!(!is_in_check(&next, Color::Black));
        assert!(!checkmate(&next, Color::White));
        assert!(!stalemate(&next, Color::White));
    }
}
