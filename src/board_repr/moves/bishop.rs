use crate::board_repr::position::Position;
use crate::board_repr::square::Square;

use super::{Destinations, DIAGONALS};

impl Position {
    pub(crate) fn bishop_destinations(&self, from: Square, out: &mut Destinations) {
        self.sliding_destinations(from, &DIAGONALS, out);
    }
}
