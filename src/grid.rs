use shakmaty::Square;

use crate::BoardGrid;
use crate::piece::Piece;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Square at a (column, row) coordinate, or `None` if it is off the board.
#[inline]
pub fn square_at(col: i32, row: i32) -> Option<Square> {
    if (0..BOARD_SIZE).contains(&col) && (0..BOARD_SIZE).contains(&row) {
        Some(Square::new((row * BOARD_SIZE + col) as u32))
    } else {
        None
    }
}

/// Column (0-7) of a square.
#[inline]
pub fn column(square: Square) -> i32 {
    u32::from(square) as i32 % BOARD_SIZE
}

/// Row (0-7) of a square; row 0 is white's back rank.
#[inline]
pub fn row(square: Square) -> i32 {
    u32::from(square) as i32 / BOARD_SIZE
}

/// In-memory 8×8 board: one slot per square, each owning at most one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(|_| None),
        }
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }
}

impl BoardGrid for Grid {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[usize::from(square)].as_ref()
    }

    #[inline]
    fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[usize::from(square)], piece)
    }
}
