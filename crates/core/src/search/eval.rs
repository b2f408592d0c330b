//! Static evaluation: material only

use crate::board::{Board, Color, PieceKind};

/// Material value in pawns. The king is never traded, so it counts for nothing.
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Material balance from `perspective`'s side: its pieces count positive,
/// the opponent's negative.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    board
        .occupied()
        .map(|(_, piece)| {
            let value = material_value(piece.kind);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}
