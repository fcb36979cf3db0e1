//! Board plus inventory, and the apply/undo pair the search relies on.

use serde::{Deserialize, Serialize};

use crate::{generate_moves, rules, Board, Inventory, Move, MoveList, Piece, Player, Pos, Size};

/// The complete mutable state of one game.
///
/// Cheap to copy (a u64 plus six counters). Equality is bit-for-bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub inventory: Inventory,
}

/// Game result as seen from a position and the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    /// The side to move has no legal move.
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl Position {
    /// Empty board, full reserves.
    pub fn new() -> Position {
        Position {
            board: Board::new(),
            inventory: Inventory::new(),
        }
    }

    #[inline]
    pub fn top(&self, pos: Pos) -> Option<Piece> {
        self.board.top(pos)
    }

    #[inline]
    pub fn remaining(&self, player: Player, size: Size) -> u8 {
        self.inventory.remaining(player, size)
    }

    #[inline]
    pub fn can_place(&self, pos: Pos, player: Player, size: Size, is_relocation: bool) -> bool {
        rules::can_place(&self.board, &self.inventory, pos, player, size, is_relocation)
    }

    #[inline]
    pub fn winning_player(&self) -> Option<Player> {
        rules::winning_player(&self.board)
    }

    #[inline]
    pub fn has_winner(&self) -> bool {
        rules::has_winner(&self.board)
    }

    #[inline]
    pub fn legal_moves(&self, player: Player) -> MoveList {
        generate_moves(self, player)
    }

    /// Check a single move without generating the whole list.
    pub fn is_legal(&self, mov: Move, player: Player) -> bool {
        match mov {
            Move::Place { size, to } => self.can_place(to, player, size, false),
            Move::Relocate { from, to } => {
                if !from.is_valid() || from == to {
                    return false;
                }
                match self.top(from) {
                    Some(top) if top.owner == player => self.can_place(to, player, top.size, true),
                    _ => false,
                }
            }
        }
    }

    /// Outcome with `to_move` about to play: a line wins first, then an
    /// empty move list is a draw.
    pub fn outcome(&self, to_move: Player) -> Outcome {
        if let Some(winner) = self.winning_player() {
            Outcome::Win(winner)
        } else if generate_moves(self, to_move).is_empty() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Apply a move for `player`. Does NOT validate - caller must ensure the
    /// move is legal; see [`Position::is_legal`].
    pub fn apply(&mut self, mov: Move, player: Player) {
        match mov {
            Move::Place { size, to } => {
                self.board.push(to, Piece::new(player, size));
                self.inventory.decrement(player, size);
            }
            Move::Relocate { from, to } => {
                let piece = self.board.pop(from);
                debug_assert_eq!(piece.owner, player);
                self.board.push(to, piece);
            }
        }
    }

    /// Exact inverse of [`Position::apply`]. Calls must nest LIFO.
    pub fn undo(&mut self, mov: Move, player: Player) {
        match mov {
            Move::Place { size, to } => {
                let piece = self.board.pop(to);
                debug_assert_eq!(piece, Piece::new(player, size));
                self.inventory.increment(player, size);
            }
            Move::Relocate { from, to } => {
                let piece = self.board.pop(to);
                self.board.push(from, piece);
            }
        }
    }
}
