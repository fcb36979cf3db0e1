//! The 9-cell stack array.
//!
//! No legality checks happen here; see [`crate::rules`]. Violating the
//! stacking order through this layer is a programming error and panics.

use serde::{Deserialize, Serialize};

use crate::{Piece, Player, Pos, Size};

/// Compact board state - fits in a single u64.
///
/// See crate documentation for encoding details.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board(u64);

impl Board {
    /// Bits per cell (6 bits = 3 sizes × 2 bits each).
    const CELL_BITS: u32 = 6;
    /// Mask for a single cell (0b111111).
    const CELL_MASK: u64 = 0b111111;
    /// Mask for a single layer (2 bits for player: 0=empty, 1=X, 2=O).
    const LAYER_MASK: u64 = 0b11;

    /// Create a new empty board.
    #[inline]
    pub fn new() -> Board {
        Board(0)
    }

    #[inline]
    fn cell(&self, pos: Pos) -> u64 {
        debug_assert!(pos.is_valid());
        (self.0 >> (pos.0 as u32 * Self::CELL_BITS)) & Self::CELL_MASK
    }

    #[inline]
    fn set_cell(&mut self, pos: Pos, value: u64) {
        let shift = pos.0 as u32 * Self::CELL_BITS;
        self.0 = (self.0 & !(Self::CELL_MASK << shift)) | ((value & Self::CELL_MASK) << shift);
    }

    /// Owner bits of the top piece at a cell (0=empty, 1=X, 2=O).
    #[inline]
    fn top_owner_bits(&self, pos: Pos) -> u8 {
        let cell = self.cell(pos);
        let large = (cell >> 4) & Self::LAYER_MASK;
        let medium = (cell >> 2) & Self::LAYER_MASK;
        let small = cell & Self::LAYER_MASK;

        if large != 0 {
            large as u8
        } else if medium != 0 {
            medium as u8
        } else {
            small as u8
        }
    }

    /// Get the top (visible) piece at a position, or None if the cell is empty.
    pub fn top(&self, pos: Pos) -> Option<Piece> {
        let cell = self.cell(pos);
        for size in [Size::Large, Size::Medium, Size::Small] {
            let bits = (cell >> (size.index() * 2)) & Self::LAYER_MASK;
            if let Some(owner) = Player::from_bits(bits as u8) {
                return Some(Piece::new(owner, size));
            }
        }
        None
    }

    /// Check if a cell is empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cell(pos) == 0
    }

    /// Push a piece on top of a cell.
    ///
    /// Panics if the piece does not strictly cover the current top.
    pub fn push(&mut self, pos: Pos, piece: Piece) {
        if let Some(top) = self.top(pos) {
            assert!(
                piece.size.can_gobble(top.size),
                "push of {:?} onto {:?} at {:?}",
                piece,
                top,
                pos
            );
        }
        let cell = self.cell(pos);
        let layer_shift = piece.size.index() * 2;
        self.set_cell(pos, cell | ((piece.owner as u64) << layer_shift));
    }

    /// Remove and return the top piece of a cell.
    ///
    /// Panics on an empty cell.
    pub fn pop(&mut self, pos: Pos) -> Piece {
        let top = self.top(pos).expect("pop from empty cell");
        let cell = self.cell(pos);
        let layer_shift = top.size.index() * 2;
        self.set_cell(pos, cell & !(Self::LAYER_MASK << layer_shift));
        top
    }

    /// The full stack at a cell, bottom to top.
    pub fn stack(&self, pos: Pos) -> Vec<Piece> {
        let cell = self.cell(pos);
        Size::all()
            .filter_map(|size| {
                let bits = (cell >> (size.index() * 2)) & Self::LAYER_MASK;
                Player::from_bits(bits as u8).map(|owner| Piece::new(owner, size))
            })
            .collect()
    }

    /// Top pieces of all 9 cells.
    pub fn tops(&self) -> [Option<Piece>; 9] {
        let mut tops = [None; 9];
        for pos in Pos::all() {
            tops[pos.0 as usize] = self.top(pos);
        }
        tops
    }

    /// Count pieces of each size on board for a player, covered ones included.
    /// Returns [small_count, medium_count, large_count].
    pub fn pieces_on_board(&self, player: Player) -> [u8; 3] {
        let mut counts = [0u8; 3];
        let player_bits = player as u64;

        for pos in Pos::all() {
            let cell = self.cell(pos);
            for size_idx in 0..3 {
                if (cell >> (size_idx * 2)) & Self::LAYER_MASK == player_bits {
                    counts[size_idx] += 1;
                }
            }
        }
        counts
    }

    /// Compute visibility masks for both players.
    /// Returns (x_mask, o_mask) where bit i is set if that player shows on top at cell i.
    #[inline]
    pub fn visibility_masks(&self) -> (u16, u16) {
        let mut x_mask = 0u16;
        let mut o_mask = 0u16;

        for pos in Pos::all() {
            match self.top_owner_bits(pos) {
                1 => x_mask |= 1 << pos.0,
                2 => o_mask |= 1 << pos.0,
                _ => {}
            }
        }

        (x_mask, o_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(owner: Player, size: Size) -> Piece {
        Piece::new(owner, size)
    }

    #[test]
    fn test_board_empty_cells() {
        let board = Board::new();
        for pos in Pos::all() {
            assert!(board.is_empty(pos));
            assert_eq!(board.top(pos), None);
            assert!(board.stack(pos).is_empty());
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_push_and_top() {
        let mut board = Board::new();

        board.push(Pos(0), piece(Player::One, Size::Small));
        assert_eq!(board.top(Pos(0)), Some(piece(Player::One, Size::Small)));

        // O Medium gobbles it
        board.push(Pos(0), piece(Player::Two, Size::Medium));
        assert_eq!(board.top(Pos(0)), Some(piece(Player::Two, Size::Medium)));

        assert_eq!(
            board.stack(Pos(0)),
            vec![piece(Player::One, Size::Small), piece(Player::Two, Size::Medium)]
        );
    }

    #[test]
    fn test_pop_order() {
        let mut board = Board::new();
        board.push(Pos(4), piece(Player::One, Size::Small));
        board.push(Pos(4), piece(Player::Two, Size::Medium));
        board.push(Pos(4), piece(Player::One, Size::Large));

        assert_eq!(board.pop(Pos(4)), piece(Player::One, Size::Large));
        assert_eq!(board.pop(Pos(4)), piece(Player::Two, Size::Medium));
        assert_eq!(board.pop(Pos(4)), piece(Player::One, Size::Small));
        assert!(board.is_empty(Pos(4)));
    }

    #[test]
    fn test_push_pop_roundtrip() {
        let mut board = Board::new();
        board.push(Pos(2), piece(Player::Two, Size::Small));
        let original = board;

        board.push(Pos(2), piece(Player::One, Size::Large));
        assert_ne!(board, original);
        board.pop(Pos(2));
        assert_eq!(board, original);
    }

    #[test]
    #[should_panic(expected = "pop from empty cell")]
    fn test_pop_empty_panics() {
        let mut board = Board::new();
        board.pop(Pos(3));
    }

    #[test]
    #[should_panic]
    fn test_push_equal_size_panics() {
        let mut board = Board::new();
        board.push(Pos(0), piece(Player::One, Size::Medium));
        board.push(Pos(0), piece(Player::Two, Size::Medium));
    }

    #[test]
    fn test_pieces_on_board_counts_covered() {
        let mut board = Board::new();
        board.push(Pos(0), piece(Player::One, Size::Small));
        board.push(Pos(0), piece(Player::Two, Size::Large));
        board.push(Pos(1), piece(Player::One, Size::Small));

        assert_eq!(board.pieces_on_board(Player::One), [2, 0, 0]);
        assert_eq!(board.pieces_on_board(Player::Two), [0, 0, 1]);
    }

    #[test]
    fn test_visibility_masks_gobbled() {
        let mut board = Board::new();
        board.push(Pos(0), piece(Player::One, Size::Small));
        board.push(Pos(0), piece(Player::Two, Size::Medium));
        board.push(Pos(8), piece(Player::One, Size::Large));

        let (x, o) = board.visibility_masks();
        assert_eq!(x, 1 << 8);
        assert_eq!(o, 1 << 0);
    }

    #[test]
    fn test_tops() {
        let mut board = Board::new();
        board.push(Pos(5), piece(Player::Two, Size::Small));
        let tops = board.tops();
        assert_eq!(tops[5], Some(piece(Player::Two, Size::Small)));
        assert_eq!(tops.iter().filter(|t| t.is_some()).count(), 1);
    }
}
