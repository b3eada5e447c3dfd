use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse a `"RC"` coordinate, panicking on typos in the test itself.
pub fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// An empty board, White to move.
pub fn empty_position() -> Position {
    Position::empty()
}

pub fn white(kind: Kind) -> Piece {
    Piece::new(Color::White, kind)
}

pub fn black(kind: Kind) -> Piece {
    Piece::new(Color::Black, kind)
}

/// Whether the destination set contains the given coordinate.
pub fn has_dest(dests: &Destinations, s: &str) -> bool {
    dests.contains(&sq(s))
}

// ==================== TEST MODULES ====================
