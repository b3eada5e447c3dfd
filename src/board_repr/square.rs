use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A coordinate on the 8x8 grid. Row 0 is White's back rank, row 7 Black's.
///
/// Constructing a `Square` always goes through a bounds check, so a value of
/// this type is guaranteed to address a real tile. Out-of-grid requests from
/// the UI therefore die at parse/construction time and never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

/// Failure to parse a `"RC"` coordinate string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("expected two characters, got {0:?}")]
    BadLength(String),
    #[error("coordinate out of range 0-7 in {0:?}")]
    OutOfRange(String),
}

impl Square {
    /// Checked constructor. Returns `None` when either axis falls outside 0-7.
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Flat index into the 64-tile mailbox, row-major.
    pub(crate) fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Inverse of [`Square::index`]. Callers must pass `idx < 64`.
    pub(crate) fn from_index(idx: usize) -> Square {
        debug_assert!(idx < 64);
        Square {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        }
    }

    /// The square `dr` rows and `dc` columns away, or `None` off the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses the canonical two-digit `"RC"` encoding, e.g. `"14"` = row 1, col 4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r, c) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => (r, c),
            _ => return Err(ParseSquareError::BadLength(s.to_string())),
        };
        match (r.to_digit(10), c.to_digit(10)) {
            (Some(row), Some(col)) if row < 8 && col < 8 => Ok(Square {
                row: row as u8,
                col: col as u8,
            }),
            _ => Err(ParseSquareError::OutOfRange(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}
