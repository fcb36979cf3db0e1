//! Moves and move generation.

use serde::{Deserialize, Serialize};

use crate::{rules, Player, Pos, Position, Size};

/// A move in the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a piece from reserve onto the board.
    Place { size: Size, to: Pos },
    /// Move the top piece of one cell to another cell.
    Relocate { from: Pos, to: Pos },
}

/// Upper bound on legal moves for one player.
///
/// With k own pieces on board: at most 8k relocations plus 9 per size still
/// in reserve. The worst case is k=3 with all sizes left: 24 + 27 = 51.
///
/// This assumes each player owns exactly two pieces per size across board
/// and reserve, which play preserves. Positions built by hand (for
/// [`Session::from_position`](crate::Session::from_position)) must keep that
/// count; [`MoveList::push`] panics past `MAX_MOVES`.
pub const MAX_MOVES: usize = 64;

/// A fixed-size move list that avoids heap allocation.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u8,
}

impl MoveList {
    const FILLER: Move = Move::Relocate { from: Pos(0), to: Pos(0) };

    /// Create an empty move list.
    #[inline]
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Self::FILLER; MAX_MOVES],
            len: 0,
        }
    }

    /// Add a move to the list.
    #[inline]
    pub fn push(&mut self, mov: Move) {
        debug_assert!((self.len as usize) < MAX_MOVES);
        self.moves[self.len as usize] = mov;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn contains(&self, mov: &Move) -> bool {
        self.as_slice().contains(mov)
    }

    pub fn to_vec(&self) -> Vec<Move> {
        self.as_slice().to_vec()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generate all legal moves for `player`.
///
/// Order: placements by size (Small → Large) then cell 0 → 8, followed by
/// relocations by source cell then destination cell. Heuristic tiers take the
/// first qualifying move, so this order doubles as their tie-break.
/// An empty list means `player` has no legal move.
pub fn generate_moves(position: &Position, player: Player) -> MoveList {
    let board = &position.board;
    let inventory = &position.inventory;
    let mut moves = MoveList::new();

    for size in Size::all() {
        if inventory.remaining(player, size) == 0 {
            continue;
        }
        for to in Pos::all() {
            if rules::can_place(board, inventory, to, player, size, false) {
                moves.push(Move::Place { size, to });
            }
        }
    }

    for from in Pos::all() {
        let Some(top) = board.top(from) else { continue };
        if top.owner != player {
            continue;
        }
        for to in Pos::all() {
            if from != to && rules::can_place(board, inventory, to, player, top.size, true) {
                moves.push(Move::Relocate { from, to });
            }
        }
    }

    moves
}
