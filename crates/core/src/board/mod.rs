//! Board model: an immutable 8x8 grid of optional pieces

mod types;

pub use types::{Color, Move, Piece, PieceKind, Square};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A board position.
///
/// Transformations return a new `Board`; nothing mutates a board that has
/// already been handed out, so search can branch from any snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement, black on rows 0-1 and white on rows 6-7
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(*kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    /// Parses the piece-placement field of a FEN string.
    ///
    /// Ranks are listed from row 0 (rank 8) down to row 7 (rank 1).
    pub fn from_placement(placement: &str) -> Result<Self> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(Error::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(run) = ch.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(Error::InvalidPlacement(format!("bad empty run '{}'", ch)));
                    }
                    col += run as usize;
                } else {
                    let piece = Piece::from_fen_char(ch)
                        .ok_or_else(|| Error::InvalidPlacement(format!("unknown piece '{}'", ch)))?;
                    if col >= 8 {
                        return Err(Error::InvalidPlacement(format!("rank {} is too long", 8 - row)));
                    }
                    board.cells[row][col] = Some(piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(Error::InvalidPlacement(format!("rank {} is too long", 8 - row)));
                }
            }
            if col != 8 {
                return Err(Error::InvalidPlacement(format!(
                    "rank {} covers {} files",
                    8 - row,
                    col
                )));
            }
        }
        Ok(board)
    }

    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut run = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
        }
        out
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Returns a copy with `piece` placed on `square`.
    pub fn with_piece(&self, square: Square, piece: Piece) -> Self {
        let mut next = self.clone();
        next.cells[square.row() as usize][square.col() as usize] = Some(piece);
        next
    }

    /// Moves whatever stands on `from` to `to`, capturing any occupant.
    ///
    /// No legality check; callers validate first.
    pub fn apply(&self, from: Square, to: Square) -> Self {
        let mut next = self.clone();
        let piece = next.cells[from.row() as usize][from.col() as usize].take();
        next.cells[to.row() as usize][to.col() as usize] = piece;
        next
    }

    pub fn apply_move(&self, mv: Move) -> Self {
        self.apply(mv.from, mv.to)
    }

    /// Occupied squares in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major order, if any
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", 8 - row)?;
            for cell in cells {
                let c = cell.map(|p| p.fen_char()).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
