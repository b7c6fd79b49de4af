//! Player identification.
//!
//! Seats are 0-based and fixed for the lifetime of a game. The active
//! seat in a [`crate::core::TurnState`] is an `Option<PlayerId>`, so "no
//! active player" is type-distinguished from seat 0 rather than encoded
//! as a sentinel value.

use serde::{Deserialize, Serialize};

/// Type-safe 0-based seat index.
///
/// ```
/// use turn_engine::PlayerId;
///
/// let players: Vec<_> = PlayerId::all(4).collect();
/// assert_eq!(players.len(), 4);
/// assert_eq!(players[3], PlayerId::new(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `num_players` seats.
    pub fn all(num_players: usize) -> impl Iterator<Item = PlayerId> {
        (0..num_players as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
