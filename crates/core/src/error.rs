//! Error types for chess-opponent-core

use thiserror::Error;

use crate::board::Color;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid board placement: {0}")]
    InvalidPlacement(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Not {0}'s turn to move")]
    NotYourTurn(Color),

    #[error("Game is already over")]
    GameOver,

    #[error("Invalid engine configuration: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
