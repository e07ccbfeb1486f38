//! Move legality under simplified chess rules.
//!
//! Pawns, knights and kings move as in chess, minus en passant, promotion,
//! castling and any check detection. Bishops, rooks and queens have no
//! movement rule yet and can never move.

pub mod attacks;

use log::trace;
use shakmaty::{Bitboard, Color, Role, Square};

use crate::BoardGrid;
use crate::grid::{column, row, square_at};
use crate::piece::Piece;

pub use attacks::{king_attacks, knight_attacks};

/// Whether `piece`, standing on `from`, may move to `to`.
///
/// Moving onto a piece of the same owner is never legal, whatever the kind.
/// The board is only read.
pub fn can_move(grid: &impl BoardGrid, piece: &Piece, from: Square, to: Square) -> bool {
    if let Some(target) = grid.piece_at(to)
        && target.color() == piece.color()
    {
        trace!("{from}{to}: blocked by own piece");
        return false;
    }

    let legal = match piece.role() {
        Role::Pawn => can_pawn_move(grid, piece.color(), from, to),
        Role::Knight => knight_attacks(from).contains(to),
        Role::King => king_attacks(from).contains(to),
        Role::Bishop | Role::Rook | Role::Queen => false,
    };

    trace!("{from}{to}: {:?} move legal = {legal}", piece.role());
    legal
}

/// All squares the piece on `from` may move to.
///
/// Empty if `from` holds no piece.
pub fn destinations(grid: &impl BoardGrid, from: Square) -> Bitboard {
    let Some(piece) = grid.piece_at(from) else {
        return Bitboard::EMPTY;
    };

    Square::ALL
        .into_iter()
        .filter(|&to| can_move(grid, piece, from, to))
        .fold(Bitboard::EMPTY, |bb, to| bb | Bitboard::from_square(to))
}

/// Row delta of a pawn advance: up for white, down for black.
#[inline]
const fn pawn_step(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Row pawns start on and may double step from.
#[inline]
const fn pawn_start_row(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

fn can_pawn_move(grid: &impl BoardGrid, color: Color, from: Square, to: Square) -> bool {
    let step = pawn_step(color);
    let (from_col, from_row) = (column(from), row(from));
    let (to_col, to_row) = (column(to), row(to));
    let target_empty = !grid.is_occupied(to);

    if to_col == from_col && target_empty {
        if to_row == from_row + step {
            return true;
        }
        if from_row == pawn_start_row(color) && to_row == from_row + 2 * step {
            // The square jumped over must be empty too
            return square_at(from_col, from_row + step)
                .is_some_and(|between| !grid.is_occupied(between));
        }
    }

    // Diagonal steps only capture; whose piece it is was checked by the caller
    (to_col - from_col).abs() == 1 && to_row == from_row + step && !target_empty
}
