//! Minimax with alpha-beta pruning
//!
//! Scores are always from the automated side's point of view: that side
//! maximizes, its opponent minimizes.

use crate::board::{Board, Color};
use crate::rules::legal_moves;

use super::eval::evaluate;

/// Score of a node where the side to move has no legal moves.
///
/// Checkmate and stalemate are deliberately not told apart.
pub const TERMINAL_SCORE: i32 = 1000;

pub(crate) struct SearchContext {
    ai: Color,
    nodes: u64,
}

impl SearchContext {
    pub(crate) fn new(ai: Color) -> Self {
        Self { ai, nodes: 0 }
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board, self.ai);
        }

        let mover = if maximizing { self.ai } else { self.ai.opponent() };
        let moves = legal_moves(board, mover);

        if moves.is_empty() {
            return if maximizing { -TERMINAL_SCORE } else { TERMINAL_SCORE };
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let score = self.minimax(&board.apply_move(mv), depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let score = self.minimax(&board.apply_move(mv), depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
