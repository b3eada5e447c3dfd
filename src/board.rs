use log::debug;

use crate::board_repr::{Color, Destinations, Piece, Position, Square};

/// Board component: the session-level state object one UI instance talks to.
///
/// Wraps a single [`Position`] and layers the selection/highlight workflow on
/// top of the move engine. The presentation collaborator maps pointer or drag
/// gestures to [`Square`] pairs, calls the commands here, then re-reads the
/// position to paint tiles and highlight overlays.
///
/// # Error policy
///
/// Malformed requests (empty source tile, wrong-turn piece, destination
/// outside the legal set, `from == to`) are absorbed as no-ops so a sloppy
/// drag gesture never produces an error while a frame is being painted.
/// Rejections are logged at debug level.
///
/// # Concurrency
///
/// Not thread-safe and not meant to be: one `Board` per UI session, every
/// call runs to completion on the caller's thread. Concurrent games get
/// independent instances.
pub struct Board {
    position: Position,
    /// Tile picked by the last accepted `select`, if any.
    selected: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board holding the standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            selected: None,
        }
    }

    /// A board set up from the piece-placement field of a FEN string.
    pub fn from_fen(placement: &str) -> Self {
        Self {
            position: Position::from_fen(placement),
            selected: None,
        }
    }

    // ===========================
    // Read access for rendering
    // ===========================

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations for the piece on `square`; empty for an empty tile
    /// or a piece whose side is not on turn.
    pub fn legal_destinations(&self, square: Square) -> Destinations {
        self.position.legal_destinations(square)
    }

    // ===========================
    // Commands
    // ===========================

    /// Selects the piece on `square` and highlights its legal destinations.
    ///
    /// Selecting an empty tile is a no-op that leaves any existing highlights
    /// in place. That mirrors the reference implementation's behavior; see
    /// DESIGN.md for the trade-off.
    pub fn select(&mut self, square: Square) {
        if self.position.tile(square).is_empty() {
            debug!("select {square} ignored: empty tile, highlights kept");
            return;
        }

        let destinations = self.position.legal_destinations(square);

        self.position.clear_highlights();
        self.position.set_selected(square);
        for dest in &destinations {
            self.position.set_legal_target(*dest);
        }
        self.selected = Some(square);
    }

    /// Drops the selection and every highlight flag.
    pub fn clear_selection(&mut self) {
        self.position.clear_highlights();
        self.selected = None;
    }

    /// Attempts a turn-validated move; returns whether the position changed.
    /// On success the selection is gone (an accepted move clears all flags)
    /// and the other side is on turn.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        let moved = self.position.try_move(from, to);
        if moved {
            self.selected = None;
        }
        moved
    }

    /// Moves whatever sits on `from` to `to` without any validation and
    /// without touching the turn. For programmatic setup, not gameplay.
    pub fn relocate(&mut self, from: Square, to: Square) {
        self.position.relocate(from, to);
        self.selected = None;
    }

    /// Replaces the position with a fresh standard layout, White to move.
    pub fn reset(&mut self) {
        self.position = Position::default();
        self.selected = None;
        debug!("board reset to starting position");
    }
}
