//! One-ply heuristics used by the lower difficulty tiers.
//!
//! Both finders probe by applying and undoing candidate moves on the given
//! position; it is restored before they return.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{Move, Player, Position};

/// First move (in generation order) after which the board shows a winning
/// line.
///
/// The line need not be `player`'s: a relocation that uncovers an opponent
/// line also ends the game and is returned.
pub fn find_winning_move(position: &mut Position, player: Player) -> Option<Move> {
    let moves = position.legal_moves(player);
    for mov in moves.iter() {
        position.apply(mov, player);
        let wins = position.has_winner();
        position.undo(mov, player);
        if wins {
            return Some(mov);
        }
    }
    None
}

/// First move that leaves the opponent without an immediate win.
///
/// Returns None when the opponent has no winning reply to begin with, or when
/// no candidate removes it. Single-ply only: forks are not detected.
pub fn find_blocking_move(position: &mut Position, player: Player) -> Option<Move> {
    let opponent = player.opponent();
    find_winning_move(position, opponent)?;

    let moves = position.legal_moves(player);
    for mov in moves.iter() {
        position.apply(mov, player);
        let blocked = find_winning_move(position, opponent).is_none();
        position.undo(mov, player);
        if blocked {
            return Some(mov);
        }
    }
    None
}

/// A uniformly random legal move.
pub fn random_move<R: Rng + ?Sized>(position: &Position, player: Player, rng: &mut R) -> Option<Move> {
    position.legal_moves(player).as_slice().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos, Size};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn put(position: &mut Position, pos: u8, owner: Player, size: Size) {
        position.apply(Move::Place { size, to: Pos(pos) }, owner);
    }

    #[test]
    fn test_no_winning_move_on_empty_board() {
        let mut position = Position::new();
        assert_eq!(find_winning_move(&mut position, Player::One), None);
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_finds_winning_placement() {
        let mut position = Position::new();
        put(&mut position, 0, Player::One, Size::Small);
        put(&mut position, 1, Player::One, Size::Medium);
        let before = position;

        let mov = find_winning_move(&mut position, Player::One);
        assert_eq!(mov, Some(Move::Place { size: Size::Small, to: Pos(2) }));
        assert_eq!(position, before);
    }

    #[test]
    fn test_finds_winning_gobble() {
        let mut position = Position::new();
        put(&mut position, 0, Player::One, Size::Small);
        put(&mut position, 1, Player::One, Size::Small);
        put(&mut position, 2, Player::Two, Size::Medium);

        // X has no smalls left; Medium cannot cover Medium, so Large it is
        let mov = find_winning_move(&mut position, Player::One);
        assert_eq!(mov, Some(Move::Place { size: Size::Large, to: Pos(2) }));
    }

    #[test]
    fn test_revealing_opponent_line_ends_game() {
        let mut position = Position::new();
        // O owns 3 and 4; O's medium at 5 is covered by X's large
        put(&mut position, 3, Player::Two, Size::Small);
        put(&mut position, 4, Player::Two, Size::Small);
        put(&mut position, 5, Player::Two, Size::Medium);
        put(&mut position, 5, Player::One, Size::Large);
        // Deplete X's reserve so only relocations remain
        position.inventory.decrement(Player::One, Size::Small);
        position.inventory.decrement(Player::One, Size::Small);
        position.inventory.decrement(Player::One, Size::Medium);
        position.inventory.decrement(Player::One, Size::Medium);
        position.inventory.decrement(Player::One, Size::Large);
        let before = position;

        // Lifting the large off 5 uncovers O's row; the first such move counts
        let mov = find_winning_move(&mut position, Player::One);
        assert_eq!(mov, Some(Move::Relocate { from: Pos(5), to: Pos(0) }));
        assert_eq!(position, before);

        position.apply(Move::Relocate { from: Pos(5), to: Pos(0) }, Player::One);
        assert_eq!(position.winning_player(), Some(Player::Two));
    }

    #[test]
    fn test_blocking_not_needed() {
        let mut position = Position::new();
        put(&mut position, 4, Player::Two, Size::Small);
        assert_eq!(find_blocking_move(&mut position, Player::One), None);
    }

    #[test]
    fn test_blocks_open_line() {
        let mut position = Position::new();
        // O threatens row 0 at cell 2
        put(&mut position, 0, Player::Two, Size::Large);
        put(&mut position, 1, Player::Two, Size::Large);
        let before = position;

        let mov = find_blocking_move(&mut position, Player::One).expect("block exists");
        assert_eq!(position, before);

        position.apply(mov, Player::One);
        assert_eq!(find_winning_move(&mut position, Player::Two), None);
        // Both O larges are already on the board, so a Medium at 2 holds
        assert_eq!(mov, Move::Place { size: Size::Medium, to: Pos(2) });
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut position = Position::new();
        put(&mut position, 4, Player::One, Size::Large);

        for _ in 0..50 {
            let mov = random_move(&position, Player::Two, &mut rng).unwrap();
            assert!(position.is_legal(mov, Player::Two));
        }
    }

    #[test]
    fn test_random_move_none_without_moves() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut position = Position::new();
        for size in Size::all() {
            position.inventory.decrement(Player::One, size);
            position.inventory.decrement(Player::One, size);
        }
        assert_eq!(random_move(&position, Player::One, &mut rng), None);
    }
}
