use crate::board_repr::piece::Color;
use crate::board_repr::position::Position;
use crate::board_repr::square::Square;

use super::Destinations;

impl Position {
    pub(crate) fn pawn_destinations(&self, from: Square, out: &mut Destinations) {
        let pawn = match self.tile(from).piece {
            Some(p) => p,
            None => return,
        };

        // White pushes toward increasing rows, Black the other way.
        let (dir, home_rank) = match pawn.color {
            Color::White => (1, 1),
            Color::Black => (-1, 6),
        };

        let one_ahead = from.offset(dir, 0).filter(|&sq| self.tile(sq).is_empty());
        if let Some(sq) = one_ahead {
            out.push(sq);

            // Double push needs the home rank and both tiles free.
            if from.row() == home_rank {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if self.tile(two).is_empty() {
                        out.push(two);
                    }
                }
            }
        }

        // Diagonal steps are captures only.
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                if let Some(target) = self.tile(to).piece {
                    if target.color != pawn.color {
                        out.push(to);
                    }
                }
            }
        }
    }
}
