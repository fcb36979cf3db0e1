//! Text move notation.
//!
//! ```text
//! S(r,c), M(r,c), L(r,c)   place a Small / Medium / Large from reserve
//! (r,c)->(r,c)             relocate the top piece
//! ```
//!
//! Rows and columns run 0-2.

use std::fmt;
use std::str::FromStr;

use crate::{Move, ParseError, Pos, Size};

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { size, to } => write!(f, "{}{}", size.letter(), to),
            Move::Relocate { from, to } => write!(f, "{from}->{to}"),
        }
    }
}

impl FromStr for Pos {
    type Err = ParseError;

    /// Parse "(r,c)" into a position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoords(s.to_string());
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row: u8 = row.trim().parse().map_err(|_| invalid())?;
        let col: u8 = col.trim().parse().map_err(|_| invalid())?;
        if row < 3 && col < 3 {
            Ok(Pos::from_row_col(row, col))
        } else {
            Err(invalid())
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((from, to)) = s.split_once("->") {
            return Ok(Move::Relocate {
                from: from.parse()?,
                to: to.parse()?,
            });
        }

        let mut chars = s.chars();
        let size = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('S') => Size::Small,
            Some('M') => Size::Medium,
            Some('L') => Size::Large,
            _ => return Err(ParseError::InvalidMove(s.to_string())),
        };
        Ok(Move::Place {
            size,
            to: chars.as_str().parse()?,
        })
    }
}
