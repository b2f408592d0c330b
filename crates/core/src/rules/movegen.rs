//! Pseudo-legal move generation
//!
//! Moves here follow each piece's pattern and board occupancy but ignore
//! whether the mover's own king ends up attacked. Castling, en passant and
//! promotion are not part of this rule set.

use crate::board::{Board, Color, Move, PieceKind, Square};

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Destinations reachable by the piece on `from`, in generation order.
///
/// Empty when `from` holds no piece.
pub fn possible_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_JUMPS, &mut moves),
        PieceKind::King => step_moves(board, from, piece.color, &KING_STEPS, &mut moves),
        PieceKind::Rook => slide_moves(board, from, piece.color, &ORTHOGONALS, &mut moves),
        PieceKind::Bishop => slide_moves(board, from, piece.color, &DIAGONALS, &mut moves),
        PieceKind::Queen => {
            slide_moves(board, from, piece.color, &ORTHOGONALS, &mut moves);
            slide_moves(board, from, piece.color, &DIAGONALS, &mut moves);
        }
    }
    moves
}

/// Every pseudo-legal move for `color`, pieces scanned row by row
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            possible_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.piece_at(one).is_none() {
            moves.push(one);

            if from.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(target) = from.offset(forward, side) {
            if matches!(board.piece_at(target), Some(p) if p.color != color) {
                moves.push(target);
            }
        }
    }
}

fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(target) = from.offset(dr, dc) {
            if board.piece_at(target).map_or(true, |p| p.color != color) {
                moves.push(target);
            }
        }
    }
}

fn slide_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, dc) in directions {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, dc) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(blocker) => {
                    if blocker.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}
