//! Attack detection, check testing and legal-move filtering

use crate::board::{Board, Color, Move, Square};

use super::movegen::possible_moves;

/// True if `from` holds a piece of `mover` that can reach `to` by its
/// movement pattern. Self-check is not considered; see [`is_legal_move`].
pub fn is_valid_move(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    match board.piece_at(from) {
        Some(piece) if piece.color == mover => possible_moves(board, from).contains(&to),
        _ => false,
    }
}

/// [`is_valid_move`] plus the requirement that `mover`'s king is not left
/// under attack.
pub fn is_legal_move(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    is_valid_move(board, from, to, mover) && !is_in_check(&board.apply(from, to), mover)
}

/// True iff some piece of `by` has `target` among its possible moves.
pub fn is_square_under_attack(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, _)| possible_moves(board, from).contains(&target))
}

/// True iff `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_under_attack(board, king, color.opponent()),
        None => false,
    }
}

/// Pseudo-legal moves of `color` that do not leave its own king in check.
///
/// Each candidate is played on a scratch copy and re-tested, which makes this
/// the hot path of the search.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut legal = Vec::new();
    for (from, _) in board.pieces(color) {
        for to in possible_moves(board, from) {
            if !is_in_check(&board.apply(from, to), color) {
                legal.push(Move::new(from, to));
            }
        }
    }
    legal
}
