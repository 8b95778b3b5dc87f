//! Node color and child direction.
//!
//! `Color` round-trips through `u8` so it can be carried inside SSZ
//! records (see [`crate::types::SlotRecord`]): Red = 0, Black = 1.

// ============================================================================
// Color enum
// ============================================================================

/// Node color tag.
///
/// Absent children are never materialized; every algorithm treats a
/// missing child as [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Freshly inserted nodes start red
    #[default]
    Red,
    /// Root and NIL leaves are black
    Black,
}

impl Color {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Color::Red),
            1 => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

// ============================================================================
// Dir enum
// ============================================================================

/// Which child slot of a parent a node occupies.
///
/// The rebalancing code is written once against `Dir` and mirrored with
/// [`Dir::opposite`] instead of duplicating every left/right case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    /// Returns the mirror direction
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
