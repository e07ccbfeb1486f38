//! Conversion between a board and its textual forms.
//!
//! Three formats are supported:
//! - placement strings, the board field of FEN (`rnbqkbnr/pppppppp/8/...`);
//! - notation state strings, 64 characters from `0PNBRQKpnbrqk`;
//! - simplified state strings, 64 characters from `012` that keep only
//!   occupancy and owner.
//!
//! State strings list squares in the grid's traversal order, see
//! [`BoardGrid::for_each_square`].

use log::{debug, warn};
use shakmaty::{Color, Role, Square};
use thiserror::Error;

use crate::BoardGrid;
use crate::grid::{BOARD_SIZE, NUM_SQUARES, square_at};
use crate::piece::{self, Piece};

/// Placement of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Error when restoring a board from a state string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("state string must be {expected} characters, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid character '{found}' at index {index}")]
    InvalidStateChar { index: usize, found: char },
}

/// Place the pieces described by a placement string onto the grid.
///
/// Only text up to the first space is read, so a full FEN is accepted.
/// Rows are filled from the top (row 7) down. The string is not validated:
/// unknown characters are skipped without advancing the column, and
/// pieces that would land off the board are dropped.
pub fn load_placement(grid: &mut impl BoardGrid, fen: &str) {
    let placement = fen.split(' ').next().unwrap_or_default();

    let mut row = BOARD_SIZE - 1;
    let mut col = 0;
    let mut placed = 0;

    for ch in placement.chars() {
        match ch {
            '/' => {
                row -= 1;
                col = 0;
            }
            '1'..='8' => col += ch as i32 - '0' as i32,
            _ => {
                let Some((color, role)) = piece::from_notation(ch) else {
                    warn!("Skipping unknown placement character '{ch}'");
                    continue;
                };
                match square_at(col, row) {
                    Some(square) => {
                        grid.set_piece(square, Some(Piece::new(color, role)));
                        placed += 1;
                    }
                    None => warn!("Dropping '{ch}' placed off the board at ({col}, {row})"),
                }
                col += 1;
            }
        }
    }

    debug!("Loaded placement '{placement}' ({placed} pieces)");
}

/// Notation character of the piece at a coordinate, `'0'` if there is none.
pub fn piece_notation(grid: &impl BoardGrid, col: i32, row: i32) -> char {
    square_at(col, row)
        .and_then(|square| grid.piece_at(square))
        .map_or('0', Piece::notation)
}

/// Dump the board as a 64-character notation string.
pub fn dump_notation(grid: &impl BoardGrid) -> String {
    let mut s = String::with_capacity(NUM_SQUARES);
    grid.for_each_square(|_, piece| s.push(piece.map_or('0', Piece::notation)));
    s
}

/// Dump the board as a 64-character simplified string.
///
/// Each square is `'0'` when empty, `'1'` for a white piece and `'2'` for a
/// black one. Piece kinds are not recorded.
pub fn dump_simplified(grid: &impl BoardGrid) -> String {
    let mut s = String::with_capacity(NUM_SQUARES);
    grid.for_each_square(|_, piece| {
        s.push(match piece.map(Piece::color) {
            None => '0',
            Some(Color::White) => '1',
            Some(Color::Black) => '2',
        });
    });
    s
}

/// Restore the board from a simplified string.
///
/// Every occupied square gets a pawn of the recorded owner, whatever kind
/// stood there when the string was dumped. The string is checked in full
/// before the board is touched.
pub fn restore_simplified(grid: &mut impl BoardGrid, s: &str) -> Result<(), CodecError> {
    let owners = parse_state(s, |ch| match ch {
        '0' => Some(None),
        '1' => Some(Some(Color::White)),
        '2' => Some(Some(Color::Black)),
        _ => None,
    })?;

    for (square, owner) in Square::ALL.into_iter().zip(owners) {
        grid.set_piece(square, owner.map(|color| Piece::new(color, Role::Pawn)));
    }

    debug!("Restored simplified state");
    Ok(())
}

/// Restore the board from a notation string, recreating exact kinds.
pub fn restore_notation(grid: &mut impl BoardGrid, s: &str) -> Result<(), CodecError> {
    let pieces = parse_state(s, |ch| match ch {
        '0' => Some(None),
        _ => piece::from_notation(ch).map(Some),
    })?;

    for (square, piece) in Square::ALL.into_iter().zip(pieces) {
        grid.set_piece(square, piece.map(|(color, role)| Piece::new(color, role)));
    }

    debug!("Restored notation state");
    Ok(())
}

/// Decode each character of a state string, failing on the first one
/// `decode` rejects or when the length is not one per square.
fn parse_state<T, F>(s: &str, decode: F) -> Result<Vec<T>, CodecError>
where
    F: Fn(char) -> Option<T>,
{
    let found = s.chars().count();
    if found != NUM_SQUARES {
        return Err(CodecError::WrongLength {
            expected: NUM_SQUARES,
            found,
        });
    }

    s.chars()
        .enumerate()
        .map(|(index, ch)| decode(ch).ok_or(CodecError::InvalidStateChar { index, found: ch }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use test_case::test_case;

    const START_NOTATION: &str = concat!(
        "RNBQKBNR", "PPPPPPPP", "00000000", "00000000", "00000000", "00000000", "pppppppp",
        "rnbqkbnr",
    );

    fn grid_from(placement: &str) -> Grid {
        let mut grid = Grid::new();
        load_placement(&mut grid, placement);
        grid
    }

    #[test]
    fn test_start_placement_dump() {
        let grid = grid_from(START_PLACEMENT);
        assert_eq!(dump_notation(&grid), START_NOTATION);
        assert_eq!(grid.piece_count(), 32);
    }

    #[test]
    fn test_start_placement_orientation() {
        let grid = grid_from(START_PLACEMENT);
        assert_eq!(
            grid.piece_at(Square::E1),
            Some(&Piece::new(Color::White, Role::King))
        );
        assert_eq!(
            grid.piece_at(Square::D8),
            Some(&Piece::new(Color::Black, Role::Queen))
        );
        assert_eq!(piece_notation(&grid, 0, 7), 'r');
        assert_eq!(piece_notation(&grid, 3, 0), 'Q');
        assert_eq!(piece_notation(&grid, 4, 4), '0');
    }

    #[test]
    fn test_full_fen_fields_are_ignored() {
        let grid = grid_from("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(grid.piece_count(), 1);
        assert_eq!(piece_notation(&grid, 4, 0), 'K');
    }

    #[test_case("4k3/8/8/8/8/8/8/8", 4, 7, 'k')]
    #[test_case("8/8/8/3N4/8/8/8/8", 3, 4, 'N')]
    #[test_case("8/8/8/8/8/8/8/7r", 7, 0, 'r')]
    fn test_digit_runs(placement: &str, col: i32, row: i32, expected: char) {
        let grid = grid_from(placement);
        assert_eq!(piece_notation(&grid, col, row), expected);
        assert_eq!(grid.piece_count(), 1);
    }

    #[test]
    fn test_unknown_characters_do_not_advance() {
        let grid = grid_from("8/8/8/8/8/8/8/x?K");
        assert_eq!(piece_notation(&grid, 0, 0), 'K');
        assert_eq!(grid.piece_count(), 1);
    }

    #[test]
    fn test_off_board_pieces_are_dropped() {
        let grid = grid_from("8/8/8/8/8/8/8/8/PP");
        assert_eq!(grid.piece_count(), 0);

        let grid = grid_from("8K/8/8/8/8/8/8/8");
        assert_eq!(grid.piece_count(), 0);
    }

    #[test]
    fn test_load_replaces_existing_piece() {
        let mut grid = grid_from("8/8/8/8/8/8/8/K7");
        load_placement(&mut grid, "8/8/8/8/8/8/8/q7");
        assert_eq!(piece_notation(&grid, 0, 0), 'q');
    }

    #[test]
    fn test_dump_simplified_start() {
        let grid = grid_from(START_PLACEMENT);
        let expected = format!("{}{}{}", "1".repeat(16), "0".repeat(32), "2".repeat(16));
        assert_eq!(dump_simplified(&grid), expected);
    }

    #[test]
    fn test_restore_simplified_single_pawn() {
        let mut grid = grid_from(START_PLACEMENT);
        let state = format!("1{}", "0".repeat(63));

        restore_simplified(&mut grid, &state).unwrap();

        assert_eq!(grid.piece_count(), 1);
        assert_eq!(
            grid.piece_at(Square::A1),
            Some(&Piece::new(Color::White, Role::Pawn))
        );
    }

    #[test]
    fn test_restore_simplified_loses_kinds() {
        let mut grid = grid_from(START_PLACEMENT);
        let state = dump_simplified(&grid);

        restore_simplified(&mut grid, &state).unwrap();

        assert_eq!(dump_simplified(&grid), state);
        assert_eq!(piece_notation(&grid, 4, 0), 'P');
        assert_eq!(piece_notation(&grid, 4, 7), 'p');
    }

    #[test_case("", 0; "empty")]
    #[test_case("1", 1; "too short")]
    #[test_case(&"0".repeat(65), 65; "too long")]
    fn test_restore_wrong_length(state: &str, found: usize) {
        let mut grid = grid_from(START_PLACEMENT);
        let before = grid.clone();

        let expected = Err(CodecError::WrongLength {
            expected: NUM_SQUARES,
            found,
        });
        assert_eq!(restore_simplified(&mut grid, state), expected);
        assert_eq!(restore_notation(&mut grid, state), expected);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_restore_simplified_invalid_char() {
        let mut grid = grid_from(START_PLACEMENT);
        let before = grid.clone();
        let state = format!("{}3{}", "0".repeat(10), "0".repeat(53));

        assert_eq!(
            restore_simplified(&mut grid, &state),
            Err(CodecError::InvalidStateChar {
                index: 10,
                found: '3'
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_restore_notation_keeps_kinds() {
        let mut grid = Grid::new();
        restore_notation(&mut grid, START_NOTATION).unwrap();
        assert_eq!(grid, grid_from(START_PLACEMENT));
    }

    #[test]
    fn test_restore_notation_invalid_char() {
        let mut grid = Grid::new();
        let state = format!("{}X", "0".repeat(63));
        assert_eq!(
            restore_notation(&mut grid, &state),
            Err(CodecError::InvalidStateChar {
                index: 63,
                found: 'X'
            })
        );
    }
}
