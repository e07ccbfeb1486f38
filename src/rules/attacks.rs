use shakmaty::{Bitboard, Square};

/// (column, row) offsets of a knight jump.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// (column, row) offsets of a king step.
const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Knight destinations from each square, indexed by square.
pub const KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_OFFSETS);

/// King destinations from each square, indexed by square.
pub const KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_OFFSETS);

#[inline]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[usize::from(square)]
}

#[inline]
pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[usize::from(square)]
}

/// Squares reachable by a knight on square `index` (0-63).
pub const fn knight_pattern(index: u32) -> Bitboard {
    leaper_pattern(index, &KNIGHT_OFFSETS)
}

/// Squares reachable by a king on square `index` (0-63).
pub const fn king_pattern(index: u32) -> Bitboard {
    leaper_pattern(index, &KING_OFFSETS)
}

const fn leaper_table(offsets: &[(i32, i32)]) -> [Bitboard; 64] {
    let mut table = [Bitboard(0); 64];
    let mut index = 0;
    while index < 64 {
        table[index] = leaper_pattern(index as u32, offsets);
        index += 1;
    }
    table
}

/// Every square one offset away from `index`, clipped to the board.
const fn leaper_pattern(index: u32, offsets: &[(i32, i32)]) -> Bitboard {
    let col = (index % 8) as i32;
    let row = (index / 8) as i32;

    let mut bits = 0u64;
    let mut i = 0;
    while i < offsets.len() {
        let (dc, dr) = offsets[i];
        let (new_col, new_row) = (col + dc, row + dr);
        if new_col >= 0 && new_col < 8 && new_row >= 0 && new_row < 8 {
            bits |= 1u64 << (new_row * 8 + new_col);
        }
        i += 1;
    }
    Bitboard(bits)
}
