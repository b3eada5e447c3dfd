use crate::board_repr::position::Position;
use crate::board_repr::square::Square;

use super::{Destinations, DIAGONALS, ORTHOGONALS};

impl Position {
    pub(crate) fn queen_destinations(&self, from: Square, out: &mut Destinations) {
        self.sliding_destinations(from, &ORTHOGONALS, out);
        self.sliding_destinations(from, &DIAGONALS, out);
    }
}
