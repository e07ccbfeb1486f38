use shakmaty::{Color, Role};

/// Bit of a tag that marks the piece as owned by player 1 (black).
pub const PLAYER_BIT: u8 = 128;

/// Mask selecting the kind (1..=6) out of a tag.
pub const KIND_MASK: u8 = 127;

/// Notation characters indexed by kind; index 0 means "no piece".
const WHITE_NOTATION: [char; 7] = ['0', 'P', 'N', 'B', 'R', 'Q', 'K'];
const BLACK_NOTATION: [char; 7] = ['0', 'p', 'n', 'b', 'r', 'q', 'k'];

/// Player number of a color: 0 for white, 1 for black.
#[inline]
pub const fn player_index(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

/// Encode a piece as a single tag: `kind + player * 128`.
///
/// White tags occupy 1..=6 and black tags 129..=134.
#[inline]
pub const fn encode(color: Color, role: Role) -> u8 {
    role as u8 + player_index(color) * PLAYER_BIT
}

/// Player number (0 or 1) stored in a tag.
#[inline]
pub const fn player_of(tag: u8) -> u8 {
    if tag & PLAYER_BIT != 0 { 1 } else { 0 }
}

/// Kind (1..=6 for valid tags) stored in a tag.
#[inline]
pub const fn kind_of(tag: u8) -> u8 {
    tag & KIND_MASK
}

/// Role for a kind number, if it names one.
pub const fn role_of_kind(kind: u8) -> Option<Role> {
    match kind {
        1 => Some(Role::Pawn),
        2 => Some(Role::Knight),
        3 => Some(Role::Bishop),
        4 => Some(Role::Rook),
        5 => Some(Role::Queen),
        6 => Some(Role::King),
        _ => None,
    }
}

/// Split a tag back into its owner and role.
///
/// Returns `None` if the low seven bits are not a valid kind.
pub const fn decode(tag: u8) -> Option<(Color, Role)> {
    let color = if player_of(tag) == 0 {
        Color::White
    } else {
        Color::Black
    };
    match role_of_kind(kind_of(tag)) {
        Some(role) => Some((color, role)),
        None => None,
    }
}

/// Notation character for a tag: uppercase for white, lowercase for black,
/// and `'0'` for anything that does not decode to a piece.
pub fn notation(tag: u8) -> char {
    let kind = kind_of(tag) as usize;
    if !(1..WHITE_NOTATION.len()).contains(&kind) {
        return '0';
    }
    if player_of(tag) == 0 {
        WHITE_NOTATION[kind]
    } else {
        BLACK_NOTATION[kind]
    }
}

/// Parse a notation letter (`PNBRQK` white, `pnbrqk` black).
pub fn from_notation(ch: char) -> Option<(Color, Role)> {
    let role = match ch.to_ascii_lowercase() {
        'p' => Role::Pawn,
        'n' => Role::Knight,
        'b' => Role::Bishop,
        'r' => Role::Rook,
        'q' => Role::Queen,
        'k' => Role::King,
        _ => return None,
    };
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some((color, role))
}

/// Sprite file name for a piece, e.g. `w_knight.png` or `b_queen.png`.
///
/// Only the path is built here; the host engine loads the texture.
pub fn sprite_path(color: Color, role: Role) -> String {
    let prefix = match color {
        Color::White => "w_",
        Color::Black => "b_",
    };
    let name = match role {
        Role::Pawn => "pawn",
        Role::Knight => "knight",
        Role::Bishop => "bishop",
        Role::Rook => "rook",
        Role::Queen => "queen",
        Role::King => "king",
    };
    format!("{prefix}{name}.png")
}

/// A piece standing on the board.
///
/// Owns its sprite resource; dropping the piece releases it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    role: Role,
    sprite: String,
}

impl Piece {
    /// Create a piece for a player, along with its sprite path.
    pub fn new(color: Color, role: Role) -> Self {
        Self {
            color,
            role,
            sprite: sprite_path(color, role),
        }
    }

    /// Create a piece from a tag, if the tag is valid.
    pub fn from_tag(tag: u8) -> Option<Self> {
        decode(tag).map(|(color, role)| Self::new(color, role))
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Player number (0 or 1) owning this piece.
    #[inline]
    pub fn player(&self) -> u8 {
        player_index(self.color)
    }

    #[inline]
    pub fn tag(&self) -> u8 {
        encode(self.color, self.role)
    }

    #[inline]
    pub fn notation(&self) -> char {
        notation(self.tag())
    }

    #[inline]
    pub fn sprite(&self) -> &str {
        &self.sprite
    }
}
