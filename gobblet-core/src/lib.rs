//! Gobblet Gobblers rules engine and opponent AI.
//!
//! Pieces come in three sizes and a larger piece may cover (gobble) a smaller
//! one. Only the top piece of each cell counts for win detection.
//!
//! # Layers
//!
//! ```text
//! board / inventory   dumb storage, no validation
//! rules               legality oracle and win oracle
//! moves               move type and move generator
//! position            board + inventory, apply / undo
//! strategy, search    heuristic tiers and depth-bounded minimax
//! difficulty          tier dispatcher
//! session             turn controller driven by a UI
//! ```
//!
//! # Board Encoding
//!
//! ```text
//! Bits 0-53: Board state (9 cells × 6 bits per cell)
//! Bits 54-63: Unused
//!
//! Each cell (6 bits) - indexed by SIZE, not stack position:
//!   Bits 0-1: Small piece owner (0=empty, 1=X, 2=O)
//!   Bits 2-3: Medium piece owner
//!   Bits 4-5: Large piece owner
//!
//! Cell indices (row-major order):
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```
//!
//! Because a piece can only land on a strictly smaller top piece, every stack
//! is strictly increasing bottom-to-top, so indexing by size loses nothing.

use serde::{Deserialize, Serialize};

pub mod board;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod inventory;
pub mod moves;
pub mod notation;
pub mod position;
pub mod rules;
pub mod search;
pub mod session;
pub mod strategy;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::Board;
pub use config::{GameConfig, Mode, StartingPlayer};
pub use difficulty::Difficulty;
pub use error::{GameError, ParseError};
pub use inventory::Inventory;
pub use moves::{generate_moves, Move, MoveList};
pub use position::{Outcome, Position};
pub use search::{pick_best_move, Searcher, SEARCH_DEPTH};
pub use session::{Phase, Session, Snapshot, Turn};

/// Player identifier. Player One plays X, Player Two plays O.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert from u8 (1 or 2) to Player.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Player> {
        match bits {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Zero-based index (0 for X, 1 for O).
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Board symbol.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Piece size, totally ordered Small < Medium < Large.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Size {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl Size {
    /// Check if this size can gobble (cover) another size.
    #[inline]
    pub fn can_gobble(self, other: Size) -> bool {
        (self as u8) > (other as u8)
    }

    /// Zero-based index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get all sizes as an iterator, smallest first.
    pub fn all() -> impl Iterator<Item = Size> {
        [Size::Small, Size::Medium, Size::Large].into_iter()
    }

    /// Notation letter (S, M, L).
    pub fn letter(self) -> char {
        match self {
            Size::Small => 'S',
            Size::Medium => 'M',
            Size::Large => 'L',
        }
    }
}

/// Position on the 3x3 board (0-8).
///
/// Layout:
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos(pub u8);

impl Pos {
    /// Create a position from row and column (0-2 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Pos {
        debug_assert!(row < 3 && col < 3);
        Pos(row * 3 + col)
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Check if this is a valid position (0-8).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 < 9
    }

    /// Iterate over all 9 positions.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..9).map(Pos)
    }
}

/// A placed piece: owner and size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub size: Size,
}

impl Piece {
    #[inline]
    pub fn new(owner: Player, size: Size) -> Piece {
        Piece { owner, size }
    }
}
