//! Character definitions - static ability data.
//!
//! A `CharacterDefinition` holds the immutable properties of one
//! ability, expressed entirely in terms the turn rules understand: how
//! many clues close the holder's turn, whether the turn end is deferred
//! to the draw step while clue tokens run low, and whether finishing a
//! turn reverses play direction.

use serde::{Deserialize, Serialize};

/// Unique identifier for a character ability.
///
/// Opaque to the machine; the ability subsystem assigns meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// Static definition of how one character ability alters the turn rules.
///
/// The defaults describe a player with no ability: one clue ends the
/// turn, the draw following a play or discard ends the turn, and play
/// direction never flips.
///
/// ## Example
///
/// ```
/// use turn_engine::characters::{CharacterDefinition, CharacterId};
///
/// let genius = CharacterDefinition::new(CharacterId::new(0), "Genius")
///     .with_clues_to_end_turn(2);
///
/// assert_eq!(genius.clues_to_end_turn, 2);
/// assert!(!genius.inverts_play_order);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    /// Unique identifier for this ability.
    pub id: CharacterId,

    /// Ability name (for display/debugging).
    pub name: String,

    /// Clues the holder gives before their turn ends.
    pub clues_to_end_turn: u32,

    /// While this many clue tokens or fewer remain, the holder's turn
    /// end is deferred until a second card has been played or discarded.
    /// `None` means the draw step follows the normal rule.
    pub extra_action_token_ceiling: Option<u32>,

    /// Whether finishing a turn flips the play direction.
    pub inverts_play_order: bool,
}

impl CharacterDefinition {
    /// Create a definition with no-ability defaults.
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            clues_to_end_turn: 1,
            extra_action_token_ceiling: None,
            inverts_play_order: false,
        }
    }

    /// Require `clues` clues before the holder's turn ends (builder
    /// pattern).
    #[must_use]
    pub fn with_clues_to_end_turn(mut self, clues: u32) -> Self {
        assert!(clues > 0, "A turn cannot end after zero clues");
        self.clues_to_end_turn = clues;
        self
    }

    /// Defer the holder's turn end to a second play or discard whenever
    /// `tokens` clue tokens or fewer remain.
    #[must_use]
    pub fn with_extra_action_at_or_below(mut self, tokens: u32) -> Self {
        self.extra_action_token_ceiling = Some(tokens);
        self
    }

    /// Flip play direction whenever the holder's turn ends.
    #[must_use]
    pub fn with_play_order_inversion(mut self) -> Self {
        self.inverts_play_order = true;
        self
    }
}
