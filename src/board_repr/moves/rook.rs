use crate::board_repr::position::Position;
use crate::board_repr::square::Square;

use super::{Destinations, ORTHOGONALS};

impl Position {
    pub(crate) fn rook_destinations(&self, from: Square, out: &mut Destinations) {
        self.sliding_destinations(from, &ORTHOGONALS, out);
    }
}
