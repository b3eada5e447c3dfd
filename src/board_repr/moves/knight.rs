use crate::board_repr::position::Position;
use crate::board_repr::square::Square;

use super::Destinations;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Position {
    pub(crate) fn knight_destinations(&self, from: Square, out: &mut Destinations) {
        self.offset_destinations(from, &KNIGHT_OFFSETS, out);
    }
}
