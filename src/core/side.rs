//! Side identification.
//!
//! The board has exactly two sides. `Player` is the side the UI collaborator
//! drives directly; `Opponent` is the side the search selectors play for.
//! Whichever side is to move at a given point is the *mover*; house tags and
//! sowing rules compare `Side` values explicitly rather than dispatching on
//! concrete types.

use serde::{Deserialize, Serialize};

/// One of the two sides of the board.
///
/// ```
/// use kalah_engine::Side;
///
/// assert_eq!(Side::Player.opposite(), Side::Opponent);
/// assert_eq!(Side::Opponent.opposite(), Side::Player);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-driven side.
    Player,
    /// The computer-driven side.
    Opponent,
}

impl Side {
    /// Get the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Side::Player.opposite().opposite(), Side::Player);
        assert_eq!(Side::Opponent.opposite().opposite(), Side::Opponent);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Player), "Player");
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }
}
