mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use smallvec::SmallVec;

use super::position::Position;
use super::square::Square;

/// Destination set for one piece. 27 is the queen's ceiling on an 8x8 board;
/// one extra slot keeps the array power-of-two friendly.
pub type Destinations = SmallVec<[Square; 28]>;

/// (row-step, col-step) direction vectors.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Shared ray-walk for the sliding pieces. Steps outward along each
    /// direction, collecting empty tiles; the first occupied tile ends the
    /// ray, and is collected only when it holds an opposing piece.
    pub(crate) fn sliding_destinations(
        &self,
        from: Square,
        directions: &[(i8, i8)],
        out: &mut Destinations,
    ) {
        let mover = match self.tile(from).piece {
            Some(p) => p,
            None => return,
        };

        for &(dr, dc) in directions {
            let mut cursor = from;
            while let Some(next) = cursor.offset(dr, dc) {
                match self.tile(next).piece {
                    None => out.push(next),
                    Some(p) => {
                        if p.color != mover.color {
                            out.push(next);
                        }
                        break;
                    }
                }
                cursor = next;
            }
        }
    }

    /// Shared offset-table walk for knight and king: every in-bounds offset
    /// not occupied by a same-color piece.
    pub(crate) fn offset_destinations(
        &self,
        from: Square,
        offsets: &[(i8, i8)],
        out: &mut Destinations,
    ) {
        let mover = match self.tile(from).piece {
            Some(p) => p,
            None => return,
        };

        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                match self.tile(to).piece {
                    Some(p) if p.color == mover.color => {}
                    _ => out.push(to),
                }
            }
        }
    }
}
