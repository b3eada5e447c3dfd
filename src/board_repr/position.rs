use std::fmt;

use log::{debug, trace};
use once_cell::sync::Lazy;

use super::moves::Destinations;
use super::piece::{Color, Kind, Piece};
use super::square::Square;
use super::tile::Tile;

/// Piece-placement field of the standard starting position.
const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

static START: Lazy<Position> = Lazy::new(|| Position::from_fen(STARTING_PLACEMENT));

/// The full board state: 64 tiles in a row-major mailbox plus the side to
/// move. Row 0 is White's back rank, row 7 Black's, matching the coordinate
/// convention of [`Square`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    tiles: [Tile; 64],
    turn: Color,
}

impl Default for Position {
    fn default() -> Self {
        START.clone()
    }
}

impl Position {
    /// An empty board with White to move. Mostly useful for tests and
    /// programmatic setup via [`Position::relocate`].
    pub fn empty() -> Self {
        Self {
            tiles: std::array::from_fn(|i| Tile::empty(Square::from_index(i))),
            turn: Color::White,
        }
    }

    /// Builds a position from the piece-placement field of a FEN string.
    /// Ranks run from row 7 down to row 0, `/`-separated; digits skip empty
    /// tiles. Characters that are neither a digit nor a piece letter are
    /// ignored. Side to move is always White; the remaining FEN fields
    /// (castling, en passant, clocks) describe rules this engine does not
    /// implement and are not accepted.
    pub fn from_fen(placement: &str) -> Self {
        let mut position = Self::empty();
        let mut row: i8 = 7;
        let mut col: i8 = 0;

        for c in placement.chars() {
            match c {
                '/' => {
                    row -= 1;
                    col = 0;
                }
                '1'..='8' => {
                    col += c.to_digit(10).unwrap_or(0) as i8;
                }
                _ => {
                    if let Some(piece) = Piece::from_char(c) {
                        if (0..8).contains(&row) && (0..8).contains(&col) {
                            position.tiles[row as usize * 8 + col as usize].piece = Some(piece);
                        }
                        col += 1;
                    }
                }
            }
        }

        position
    }

    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    pub fn tiles(&self) -> &[Tile; 64] {
        &self.tiles
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tile(square).piece
    }

    /// The side currently permitted to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    fn tile_mut(&mut self, square: Square) -> &mut Tile {
        &mut self.tiles[square.index()]
    }

    /// All tiles the piece on `from` may move to under this engine's rules.
    /// Empty when `from` is empty or holds a piece of the side not on turn;
    /// a player may only query their own pieces.
    pub fn legal_destinations(&self, from: Square) -> Destinations {
        let mut out = Destinations::new();

        let piece = match self.piece_at(from) {
            Some(p) if p.is(self.turn) => p,
            _ => return out,
        };

        match piece.kind {
            Kind::Pawn => self.pawn_destinations(from, &mut out),
            Kind::Knight => self.knight_destinations(from, &mut out),
            Kind::Bishop => self.bishop_destinations(from, &mut out),
            Kind::Rook => self.rook_destinations(from, &mut out),
            Kind::Queen => self.queen_destinations(from, &mut out),
            Kind::King => self.king_destinations(from, &mut out),
        }

        out
    }

    /// Applies a turn-validated move. Illegal requests (empty source, piece
    /// of the side not on turn, destination outside the legal set) and
    /// `from == to` are absorbed as no-ops; the return value reports whether
    /// the position changed. An accepted move captures by overwrite, clears
    /// every highlight flag and hands the turn to the other side.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }

        match self.piece_at(from) {
            None => {
                debug!("move {from}->{to} rejected: no piece on {from}");
                return false;
            }
            Some(p) if !p.is(self.turn) => {
                debug!("move {from}->{to} rejected: not {:?}'s turn", p.color);
                return false;
            }
            Some(_) => {}
        }

        if !self.legal_destinations(from).contains(&to) {
            debug!("move {from}->{to} rejected: not a legal destination");
            return false;
        }

        let mut piece = self.tile_mut(from).piece.take();
        if let Some(p) = piece.as_mut() {
            p.has_moved = true;
        }
        self.tile_mut(to).piece = piece;
        self.clear_highlights();
        self.turn = self.turn.opposite();
        trace!("move {from}->{to} accepted, {:?} to play", self.turn);
        true
    }

    /// Relocates whatever the source tile holds, bypassing every legality
    /// and turn check. The destination is overwritten even when the source
    /// is empty, mirroring the forced-move behavior the UI relies on for
    /// programmatic setup. Highlights are cleared; the turn never changes.
    pub fn relocate(&mut self, from: Square, to: Square) {
        if from == to {
            return;
        }
        let piece = self.tile_mut(from).piece.take();
        self.tile_mut(to).piece = piece;
        self.clear_highlights();
        trace!("relocated {from}->{to}");
    }

    pub(crate) fn clear_highlights(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.clear_highlights();
        }
    }

    pub(crate) fn set_selected(&mut self, square: Square) {
        self.tile_mut(square).selected = true;
    }

    pub(crate) fn set_legal_target(&mut self, square: Square) {
        self.tile_mut(square).legal_target = true;
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, square: Square, piece: Piece) {
        self.tile_mut(square).piece = Some(piece);
    }

    #[cfg(test)]
    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }
}

impl fmt::Display for Position {
    /// ASCII board, row 7 on top, `.` for empty tiles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                let tile = &self.tiles[row * 8 + col];
                match tile.piece {
                    Some(p) => write!(f, "{} ", p.as_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{:?} to play", self.turn)
    }
}
