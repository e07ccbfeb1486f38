use shakmaty::{Color, Square};

pub mod codec;
pub mod game;
pub mod grid;
pub mod piece;
pub mod rules;

pub use game::{ChessGame, GameOptions, MoveError};
pub use grid::Grid;
pub use piece::Piece;

/// Trait for the square container a game is played on.
///
/// Abstracts over the host engine's own board grid and the in-memory
/// [`Grid`], providing a uniform interface for the codec and the rules.
/// Every square holds at most one [`Piece`], which the grid owns.
pub trait BoardGrid {
    /// Get the piece on a square, if any.
    fn piece_at(&self, square: Square) -> Option<&Piece>;

    /// Put a piece on (or clear) a square, returning the piece it replaced.
    ///
    /// Dropping the returned piece destroys it along with its sprite.
    fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece>;

    /// Remove and return the piece on a square.
    fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.set_piece(square, None)
    }

    #[inline]
    fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Owner of the piece at a (column, row) coordinate.
    ///
    /// Off-board coordinates and empty squares both yield `None`.
    fn owner_at(&self, col: i32, row: i32) -> Option<Color> {
        grid::square_at(col, row)
            .and_then(|square| self.piece_at(square))
            .map(Piece::color)
    }

    /// Visit every square in the canonical traversal order.
    ///
    /// The order is ascending square index (a1, b1, .., h1, a2, .., h8),
    /// so the n-th visited square is the square with index n. State dumps
    /// and restores both rely on this.
    fn for_each_square<F>(&self, mut f: F)
    where
        F: FnMut(Square, Option<&Piece>),
    {
        for square in Square::ALL {
            f(square, self.piece_at(square));
        }
    }

    /// Destroy every piece on the board.
    fn clear(&mut self) {
        for square in Square::ALL {
            self.set_piece(square, None);
        }
    }
}
