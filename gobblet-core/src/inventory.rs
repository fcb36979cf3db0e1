//! Per-player reserve counters.

use serde::{Deserialize, Serialize};

use crate::{Player, Size};

/// Pieces of each size a player starts with.
pub const PIECES_PER_SIZE: u8 = 2;

/// Remaining reserve pieces, indexed by player then size.
///
/// Counts only go down when a piece is placed from reserve; moving a piece on
/// the board leaves them alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Inventory {
    counts: [[u8; 3]; 2],
}

impl Inventory {
    /// Full reserves for both players.
    pub fn new() -> Inventory {
        Inventory {
            counts: [[PIECES_PER_SIZE; 3]; 2],
        }
    }

    #[inline]
    pub fn remaining(&self, player: Player, size: Size) -> u8 {
        self.counts[player.index()][size.index()]
    }

    /// Counts as [small, medium, large].
    #[inline]
    pub fn counts(&self, player: Player) -> [u8; 3] {
        self.counts[player.index()]
    }

    /// Take one piece out of reserve. Panics if none is left.
    pub fn decrement(&mut self, player: Player, size: Size) {
        let slot = &mut self.counts[player.index()][size.index()];
        assert!(*slot > 0, "{player} has no {size:?} piece left");
        *slot -= 1;
    }

    /// Return one piece to reserve. Panics if the reserve is already full.
    pub fn increment(&mut self, player: Player, size: Size) {
        let slot = &mut self.counts[player.index()][size.index()];
        assert!(*slot < PIECES_PER_SIZE, "{player} {size:?} reserve already full");
        *slot += 1;
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
