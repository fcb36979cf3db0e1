//! Plain-text board rendering.
//!
//! Only top pieces are drawn, as `X` / `O` followed by the size letter.

use gobblet_core::{Player, Pos, Size, Snapshot};

/// Render the board with row/column labels.
pub fn board(snapshot: &Snapshot, highlight: Option<[Pos; 3]>) -> String {
    let mut out = String::from("     0    1    2\n");
    for row in 0..3u8 {
        out.push_str(&format!("{row}  "));
        for col in 0..3u8 {
            let pos = Pos::from_row_col(row, col);
            let cell = match snapshot.cells[pos.0 as usize] {
                Some(piece) => format!("{}{}", piece.owner.symbol(), piece.size.letter()),
                None => "..".to_string(),
            };
            let marked = highlight.is_some_and(|line| line.contains(&pos));
            if marked {
                out.push_str(&format!("[{cell}] "));
            } else {
                out.push_str(&format!(" {cell}  "));
            }
        }
        out.push('\n');
    }
    out
}

/// One line of remaining reserve for a player, e.g. `X: S S M L L`.
pub fn reserve(snapshot: &Snapshot, player: Player) -> String {
    let counts = snapshot.inventory[player.index()];
    let pieces: Vec<String> = Size::all()
        .flat_map(|size| std::iter::repeat_n(size.letter().to_string(), counts[size.index()] as usize))
        .collect();
    if pieces.is_empty() {
        format!("{player}: (empty)")
    } else {
        format!("{player}: {}", pieces.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobblet_core::{GameConfig, Mode, Move, Session};

    fn session_after(moves: &[&str]) -> Session {
        let mut session = Session::with_seed(
            GameConfig {
                mode: Mode::Two,
                ..GameConfig::default()
            },
            0,
        );
        for notation in moves {
            let mv: Move = notation.parse().unwrap();
            session.attempt_human_move(mv).unwrap();
        }
        session
    }

    #[test]
    fn test_board_shows_top_pieces() {
        let session = session_after(&["S(1,1)", "L(1,1)"]);
        let text = board(&session.snapshot(), None);
        assert!(text.contains("OL"));
        assert!(!text.contains("XS"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_board_highlights_line() {
        let session = session_after(&["S(0,0)"]);
        let text = board(&session.snapshot(), Some([Pos(0), Pos(1), Pos(2)]));
        assert!(text.contains("[XS]"));
        assert!(text.contains("[..]"));
    }

    #[test]
    fn test_reserve_line() {
        let session = session_after(&["S(0,0)", "L(2,2)"]);
        let snap = session.snapshot();
        assert_eq!(reserve(&snap, Player::One), "X: S M M L L");
        assert_eq!(reserve(&snap, Player::Two), "O: S S M M L");
    }

    #[test]
    fn test_reserve_line_when_empty() {
        let mut snap = session_after(&[]).snapshot();
        snap.inventory[0] = [0, 0, 0];
        snap.inventory[1] = [0, 2, 1];
        assert_eq!(reserve(&snap, Player::One), "X: (empty)");
        assert_eq!(reserve(&snap, Player::Two), "O: M M L");
    }
}
