use super::piece::Piece;
use super::square::Square;

/// One tile of the board: an optional piece plus the transient UI highlight
/// flags. The flags are recomputed on every selection change and carry no
/// game-rule meaning; legality never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub piece: Option<Piece>,
    pub square: Square,
    pub selected: bool,
    pub legal_target: bool,
}

impl Tile {
    pub fn empty(square: Square) -> Self {
        Self {
            piece: None,
            square,
            selected: false,
            legal_target: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub(crate) fn clear_highlights(&mut self) {
        self.selected = false;
        self.legal_target = false;
    }
}
