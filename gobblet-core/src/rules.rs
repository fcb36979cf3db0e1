//! Legality oracle and win oracle.
//!
//! Pure functions over a [`Board`] and [`Inventory`]; nothing here mutates.

use crate::{Board, Inventory, Player, Pos, Size};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[Pos; 3]; 8] = [
    [Pos(0), Pos(1), Pos(2)], // Row 0
    [Pos(3), Pos(4), Pos(5)], // Row 1
    [Pos(6), Pos(7), Pos(8)], // Row 2
    [Pos(0), Pos(3), Pos(6)], // Col 0
    [Pos(1), Pos(4), Pos(7)], // Col 1
    [Pos(2), Pos(5), Pos(8)], // Col 2
    [Pos(0), Pos(4), Pos(8)], // Main diagonal
    [Pos(2), Pos(4), Pos(6)], // Anti-diagonal
];

/// Bitmasks for winning lines, in the same order as `WIN_LINES`.
const WIN_MASKS: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

/// Can `player` put a piece of `size` on `pos`?
///
/// The piece must land on an empty cell or strictly cover the top piece.
/// Placements from reserve also need a piece of that size left; relocations
/// never touch the reserve.
pub fn can_place(
    board: &Board,
    inventory: &Inventory,
    pos: Pos,
    player: Player,
    size: Size,
    is_relocation: bool,
) -> bool {
    if !pos.is_valid() {
        return false;
    }
    if let Some(top) = board.top(pos) {
        if !size.can_gobble(top.size) {
            return false;
        }
    }
    is_relocation || inventory.remaining(player, size) > 0
}

/// First winning line in scan order, with its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [Pos; 3])> {
    let (x_mask, o_mask) = board.visibility_masks();

    for (line, &mask) in WIN_LINES.iter().zip(WIN_MASKS.iter()) {
        if x_mask & mask == mask {
            return Some((Player::One, *line));
        }
        if o_mask & mask == mask {
            return Some((Player::Two, *line));
        }
    }
    None
}

/// Owner of the first winning line, if any.
#[inline]
pub fn winning_player(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Does any line show three matching top pieces?
#[inline]
pub fn has_winner(board: &Board) -> bool {
    winning_line(board).is_some()
}

/// Number of lines `player` currently owns.
pub fn lines_won_by(board: &Board, player: Player) -> usize {
    let (x_mask, o_mask) = board.visibility_masks();
    let mask = match player {
        Player::One => x_mask,
        Player::Two => o_mask,
    };
    WIN_MASKS.iter().filter(|&&line| mask & line == line).count()
}
