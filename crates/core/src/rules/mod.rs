//! Chess rules: move generation, legality and game-state classification

mod legality;
mod movegen;
mod status;

pub use legality::{is_in_check, is_legal_move, is_square_under_attack, is_valid_move, legal_moves};
pub use movegen::{possible_moves, pseudo_legal_moves};
pub use status::{checkmate, stalemate, status, GameStatus};
