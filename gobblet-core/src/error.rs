//! Error types.

use thiserror::Error;

use crate::{Move, Outcome, Player};

/// A request the session refused. The game state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: Player },
    #[error("game is over: {0}")]
    GameOver(Outcome),
    #[error("waiting for the bot to move")]
    NotHumanTurn,
    #[error("no bot move is due")]
    NotBotTurn,
}

/// Failure to parse notation or configuration labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid move notation: {0:?}")]
    InvalidMove(String),
    #[error("invalid coordinates: {0:?}")]
    InvalidCoords(String),
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error("unknown starting player: {0:?}")]
    UnknownStartingPlayer(String),
}
