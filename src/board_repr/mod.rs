mod moves;
mod piece;
mod position;
mod square;
mod tile;

#[cfg(test)]
mod tests;

pub use moves::Destinations;
pub use piece::{Color, Kind, Piece};
pub use position::Position;
pub use square::{ParseSquareError, Square};
pub use tile::Tile;
