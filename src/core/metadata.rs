//! Fixed per-game metadata.
//!
//! `GameMetadata` is owned by the surrounding synchronization layer and
//! is read-only for the lifetime of a game: the seat count never changes
//! and character assignments are fully populated before the first action
//! is processed. It may be shared freely across `apply` calls.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::characters::CharacterId;

use super::player::PlayerId;

/// Immutable game setup facts consumed by the turn machine.
///
/// Every seated player has an assignment entry; a `None` value means the
/// seat plays with no special ability. A *missing entry* is upstream
/// metadata corruption, which the machine reports as a fatal error
/// rather than guessing at an ability.
///
/// ```
/// use turn_engine::{GameMetadata, PlayerId};
/// use turn_engine::characters::catalog;
///
/// let metadata = GameMetadata::new(3).with_character(PlayerId::new(1), catalog::CONTRARIAN);
///
/// assert_eq!(metadata.assignment(PlayerId::new(0)), Some(None));
/// assert_eq!(metadata.assignment(PlayerId::new(1)), Some(Some(catalog::CONTRARIAN)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    num_players: usize,
    character_assignments: FxHashMap<PlayerId, Option<CharacterId>>,
}

impl GameMetadata {
    /// Create metadata for a game of `num_players` seats, none of them
    /// holding a special character ability.
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        assert!(
            (2..=6).contains(&num_players),
            "Player count must be 2-6"
        );

        let character_assignments = PlayerId::all(num_players).map(|p| (p, None)).collect();

        Self {
            num_players,
            character_assignments,
        }
    }

    /// Assign a character ability to a seat (builder pattern).
    #[must_use]
    pub fn with_character(mut self, player: PlayerId, character: CharacterId) -> Self {
        assert!(
            player.index() < self.num_players,
            "{player} is not seated in a {}-player game",
            self.num_players
        );
        self.character_assignments.insert(player, Some(character));
        self
    }

    /// Build metadata from a raw assignment map, e.g. one deserialized
    /// by the synchronization layer.
    ///
    /// The map is taken as-is: seats it omits stay omitted, and the
    /// machine will refuse to process actions for them.
    #[must_use]
    pub fn from_assignments(
        num_players: usize,
        character_assignments: FxHashMap<PlayerId, Option<CharacterId>>,
    ) -> Self {
        assert!(
            (2..=6).contains(&num_players),
            "Player count must be 2-6"
        );

        Self {
            num_players,
            character_assignments,
        }
    }

    /// Number of seats, fixed for the game's lifetime.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Look up a seat's character assignment.
    ///
    /// Returns `None` when the entry itself is missing (corrupt
    /// metadata), `Some(None)` for a seat with no special ability, and
    /// `Some(Some(id))` for an ability holder.
    #[must_use]
    pub fn assignment(&self, player: PlayerId) -> Option<Option<CharacterId>> {
        self.character_assignments.get(&player).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::catalog;

    #[test]
    fn test_new_populates_every_seat() {
        let metadata = GameMetadata::new(4);

        assert_eq!(metadata.num_players(), 4);
        for player in PlayerId::all(4) {
            assert_eq!(metadata.assignment(player), Some(None));
        }
    }

    #[test]
    fn test_with_character() {
        let metadata = GameMetadata::new(2).with_character(PlayerId::new(1), catalog::GENIUS);

        assert_eq!(metadata.assignment(PlayerId::new(0)), Some(None));
        assert_eq!(metadata.assignment(PlayerId::new(1)), Some(Some(catalog::GENIUS)));
    }

    #[test]
    fn test_from_assignments_can_omit_seats() {
        let mut raw = FxHashMap::default();
        raw.insert(PlayerId::new(0), None);

        let metadata = GameMetadata::from_assignments(3, raw);

        assert_eq!(metadata.assignment(PlayerId::new(0)), Some(None));
        assert_eq!(metadata.assignment(PlayerId::new(1)), None);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-6")]
    fn test_single_player_rejected() {
        GameMetadata::new(1);
    }

    #[test]
    #[should_panic(expected = "not seated")]
    fn test_assigning_unseated_player_panics() {
        let _ = GameMetadata::new(2).with_character(PlayerId::new(5), catalog::PANICKY);
    }

    #[test]
    fn test_serialization_round_trip() {
        let metadata = GameMetadata::new(3).with_character(PlayerId::new(2), catalog::PANICKY);

        let json = serde_json::to_string(&metadata).unwrap();
        let deserialized: GameMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, deserialized);
    }
}
