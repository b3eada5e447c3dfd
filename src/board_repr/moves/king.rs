use crate::board_repr::position::Position;
use crate::board_repr::square::Square;

use super::Destinations;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    // No castling and no check-safety filter: the king may step onto an
    // attacked tile under this rule set.
    pub(crate) fn king_destinations(&self, from: Square, out: &mut Destinations) {
        self.offset_destinations(from, &KING_OFFSETS, out);
    }
}
