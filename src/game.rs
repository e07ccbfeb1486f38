use log::{debug, trace};
use shakmaty::{Bitboard, Color, Square};
use thiserror::Error;

use crate::BoardGrid;
use crate::codec::{self, CodecError, START_PLACEMENT};
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rules;

/// Settings the host engine needs when building the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Edge length of a piece sprite, in pixels.
    pub piece_size: u32,
    /// Texture used for every board square.
    pub square_texture: String,
    /// Placement loaded by [`ChessGame::set_up_board`].
    pub start_placement: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            piece_size: 64,
            square_texture: "boardsquare.png".to_string(),
            start_placement: START_PLACEMENT.to_string(),
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("piece on {0} belongs to the other player")]
    NotYourPiece(Square),
    #[error("illegal move {from}{to}")]
    Illegal { from: Square, to: Square },
}

/// Whether a piece may be picked up: only the player to move may touch
/// their own pieces.
#[inline]
pub fn can_pick_up(piece: &Piece, current_player: Color) -> bool {
    piece.color() == current_player
}

/// A two-player game on a board grid.
///
/// Owns the grid and tracks whose turn it is. Legality is always decided
/// on the unchanged board before anything is moved.
#[derive(Debug, Clone)]
pub struct ChessGame<G = Grid> {
    grid: G,
    turn: Color,
    options: GameOptions,
}

impl ChessGame<Grid> {
    /// Creates a game on an empty in-memory grid with default options.
    #[inline]
    pub fn new() -> Self {
        Self::with_grid(Grid::new(), GameOptions::default())
    }
}

impl Default for ChessGame<Grid> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: BoardGrid> ChessGame<G> {
    /// Creates a game on the host's grid. White moves first.
    pub fn with_grid(grid: G, options: GameOptions) -> Self {
        Self {
            grid,
            turn: Color::White,
            options,
        }
    }

    #[inline]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    #[inline]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.turn
    }

    /// Clear the board, place the starting pieces and give white the move.
    pub fn set_up_board(&mut self) {
        self.grid.clear();
        codec::load_placement(&mut self.grid, &self.options.start_placement);
        self.turn = Color::White;
        debug!("Board set up, white to move");
    }

    /// Destroy every piece on the board.
    pub fn stop_game(&mut self) {
        self.grid.clear();
        debug!("Game stopped, board cleared");
    }

    /// Hand the move to the other player.
    pub fn end_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Whether the piece on `square` may be picked up by the current player.
    pub fn can_pick_up(&self, square: Square) -> bool {
        let allowed = self
            .grid
            .piece_at(square)
            .is_some_and(|piece| can_pick_up(piece, self.turn));
        trace!("pick up {square} by {:?}: {allowed}", self.turn);
        allowed
    }

    /// Whether the piece on `from` may move to `to`.
    ///
    /// Only the destination is judged here; whose turn it is is checked by
    /// [`Self::can_pick_up`].
    pub fn can_move_from_to(&self, from: Square, to: Square) -> bool {
        self.grid
            .piece_at(from)
            .is_some_and(|piece| rules::can_move(&self.grid, piece, from, to))
    }

    /// All destinations of the piece on `from`, for move hints.
    pub fn destinations(&self, from: Square) -> Bitboard {
        rules::destinations(&self.grid, from)
    }

    /// Play a move for the current player and pass the turn.
    ///
    /// Returns the captured piece, if any. A refused move leaves the game
    /// untouched.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let piece = self
            .grid
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if !can_pick_up(piece, self.turn) {
            return Err(MoveError::NotYourPiece(from));
        }
        if !rules::can_move(&self.grid, piece, from, to) {
            return Err(MoveError::Illegal { from, to });
        }

        let moving = self.grid.take_piece(from);
        let captured = self.grid.set_piece(to, moving);
        debug!("{:?} played {from}{to}", self.turn);
        self.end_turn();
        Ok(captured)
    }

    /// Owner of the piece at a coordinate; `None` if empty or off the board.
    #[inline]
    pub fn owner_at(&self, col: i32, row: i32) -> Option<Color> {
        self.grid.owner_at(col, row)
    }

    /// Notation character of the piece at a coordinate.
    #[inline]
    pub fn piece_notation(&self, col: i32, row: i32) -> char {
        codec::piece_notation(&self.grid, col, row)
    }

    /// Board as a 64-character notation string.
    #[inline]
    pub fn state_string(&self) -> String {
        codec::dump_notation(&self.grid)
    }

    /// Board state right after setup, as a notation string.
    #[inline]
    pub fn initial_state_string(&self) -> String {
        self.state_string()
    }

    /// Board as a 64-character simplified string.
    #[inline]
    pub fn simplified_state_string(&self) -> String {
        codec::dump_simplified(&self.grid)
    }

    /// Restore the board from a notation string.
    pub fn set_state_string(&mut self, s: &str) -> Result<(), CodecError> {
        codec::restore_notation(&mut self.grid, s)
    }

    /// Restore the board from a simplified string; every piece becomes a pawn.
    pub fn set_simplified_state_string(&mut self, s: &str) -> Result<(), CodecError> {
        codec::restore_simplified(&mut self.grid, s)
    }
}
