//! Game session: human against the automated opponent
//!
//! Holds the state a front end would otherwise keep in globals (board, side
//! to move, move list). Every move goes through `&mut self`, so only
//! one engine decision can be in flight per session.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Color, Move, Square};
use crate::error::{Error, Result};
use crate::rules::{is_legal_move, status, GameStatus};
use crate::search::Engine;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// One played move, with the side that made it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Color,
    pub mv: Move,
    /// Display form, e.g. `e2 → e4`
    pub notation: String,
}

/// Status is never stored: it is always derived from the board and the side
/// to move, so a loaded session cannot disagree with its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    to_move: Color,
    history: Vec<MoveRecord>,
    human: Color,
}

impl GameSession {
    /// New game from the starting position. White always moves first.
    pub fn new(human: Color) -> Self {
        Self {
            board: Board::initial(),
            to_move: Color::White,
            history: Vec::new(),
            human,
        }
    }

    /// Resumes from an arbitrary position with `to_move` to play.
    pub fn from_board(board: Board, to_move: Color, human: Color) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
            human,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        status(&self.board, self.to_move)
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn human(&self) -> Color {
        self.human
    }

    pub fn engine_color(&self) -> Color {
        self.human.opponent()
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Hands the human's color to the engine and vice versa.
    pub fn swap_sides(&mut self) {
        self.human = self.human.opponent();
    }

    /// Starts over with the same seating.
    pub fn reset(&mut self) {
        *self = Self::new(self.human);
    }

    /// Plays the human's move if it is legal, returning the status for the
    /// side now to move. On error nothing changes.
    pub fn play_human_move(&mut self, from: Square, to: Square) -> Result<GameStatus> {
        self.ensure_turn(self.human)?;
        if !is_legal_move(&self.board, from, to, self.human) {
            return Err(Error::IllegalMove(Move::new(from, to).to_string()));
        }
        Ok(self.commit(Move::new(from, to)))
    }

    /// Lets the engine reply. `Ok(None)` means it had no move to make.
    pub fn play_engine_move<R: Rng>(&mut self, engine: &Engine, rng: &mut R) -> Result<Option<Move>> {
        let color = self.engine_color();
        self.ensure_turn(color)?;
        let Some(mv) = engine.choose_move_with(&self.board, color, rng) else {
            return Ok(None);
        };
        self.commit(mv);
        Ok(Some(mv))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            GameStatus::Checkmate => Some(Outcome::Checkmate {
                winner: self.to_move.opponent(),
            }),
            GameStatus::Stalemate => Some(Outcome::Stalemate),
            GameStatus::Playing | GameStatus::Check => None,
        }
    }

    /// True once the engine has checkmated the human
    pub fn engine_won(&self) -> bool {
        self.outcome() == Some(Outcome::Checkmate { winner: self.engine_color() })
    }

    fn ensure_turn(&self, color: Color) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.to_move != color {
            return Err(Error::NotYourTurn(color));
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) -> GameStatus {
        let mover = self.to_move;
        self.board = self.board.apply_move(mv);
        self.history.push(MoveRecord {
            color: mover,
            mv,
            notation: format!("{} → {}", mv.from, mv.to),
        });
        self.to_move = mover.opponent();

        let status = self.status();
        debug!(color = %mover, %mv, status = status.as_str(), "move played");
        status
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Color::White)
    }
}
