//! Game configuration read once at game start.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Difficulty, ParseError, Player};

/// Who controls the second player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Human plays X, the bot plays O.
    #[default]
    #[serde(alias = "single-player")]
    Single,
    /// Two humans share the board.
    #[serde(alias = "two-player")]
    Two,
}

impl Mode {
    /// The bot's side, if any.
    pub fn bot_player(self) -> Option<Player> {
        match self {
            Mode::Single => Some(Player::Two),
            Mode::Two => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Single => "single",
            Mode::Two => "two",
        })
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single-player" | "1" => Ok(Mode::Single),
            "two" | "two-player" | "2" => Ok(Mode::Two),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

/// Which player moves first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartingPlayer {
    #[default]
    First,
    Second,
}

impl StartingPlayer {
    pub fn player(self) -> Player {
        match self {
            StartingPlayer::First => Player::One,
            StartingPlayer::Second => Player::Two,
        }
    }
}

impl fmt::Display for StartingPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StartingPlayer::First => "first",
            StartingPlayer::Second => "second",
        })
    }
}

impl FromStr for StartingPlayer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "x" | "1" => Ok(StartingPlayer::First),
            "second" | "o" | "2" => Ok(StartingPlayer::Second),
            _ => Err(ParseError::UnknownStartingPlayer(s.to_string())),
        }
    }
}

/// Everything a session needs to start a game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_player: StartingPlayer,
    pub mode: Mode,
    pub difficulty: Difficulty,
}
