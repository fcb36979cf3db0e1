//! Difficulty tiers and the move-selection dispatcher.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::strategy::{find_blocking_move, find_winning_move, random_move};
use crate::{pick_best_move, Move, ParseError, Player, Position};

/// Bot strength.
///
/// `Medium` and `Hard` currently select moves the same way: win, else block,
/// else random. They stay separate tiers so `Hard` can diverge later without
/// changing the configuration surface.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    #[default]
    Medium,
    Hard,
    /// Depth-bounded minimax.
    #[serde(alias = "super")]
    Hardest,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Hardest,
    ];

    /// Pick a move for `player`, or None if it has no legal move.
    ///
    /// The position is probed in place and restored before returning.
    pub fn select_move<R: Rng + ?Sized>(
        self,
        position: &mut Position,
        player: Player,
        rng: &mut R,
    ) -> Option<Move> {
        let mov = match self {
            Difficulty::Easy => random_move(position, player, rng),
            Difficulty::Medium | Difficulty::Hard => find_winning_move(position, player)
                .or_else(|| find_blocking_move(position, player))
                .or_else(|| random_move(position, player, rng)),
            Difficulty::Hardest => pick_best_move(position, player),
        };
        debug!(difficulty = %self, %player, ?mov, "bot selected move");
        mov
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Hardest => "hardest",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "hardest" | "super" => Ok(Difficulty::Hardest),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}
