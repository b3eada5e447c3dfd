//! Board-state and move-generation engine for an interactive two-player,
//! same-device chessboard.
//!
//! The crate has two layers: [`board_repr`] holds the data model (squares,
//! pieces, tiles, the [`board_repr::Position`] mailbox) and the per-piece
//! destination generators; [`board::Board`] is the session facade a UI talks
//! to — select a tile, read the highlighted destinations, submit a move.
//!
//! The rule set is deliberately simplified: no check or checkmate detection,
//! no castling, en passant or promotion. Illegal requests are silently
//! absorbed so the render path never has to handle an error.

pub mod board;
pub mod board_repr;

pub use board::Board;
pub use board_repr::{Color, Destinations, Kind, ParseSquareError, Piece, Position, Square, Tile};
