//! Stock character catalog.
//!
//! The three turn-altering abilities the base game ships with. Games
//! with a richer ability roster build their own registry; anything not
//! registered behaves as a plain player.

use super::definition::{CharacterDefinition, CharacterId};
use super::registry::CharacterRegistry;

/// Must give two clues before their turn ends.
pub const GENIUS: CharacterId = CharacterId::new(0);

/// Plays or discards twice per turn while 4 or fewer clue tokens remain.
pub const PANICKY: CharacterId = CharacterId::new(1);

/// Reverses play direction whenever their turn ends.
pub const CONTRARIAN: CharacterId = CharacterId::new(2);

/// Clue-token ceiling at which [`PANICKY`] takes a second action.
pub const PANICKY_TOKEN_CEILING: u32 = 4;

/// Build a registry holding the stock abilities.
#[must_use]
pub fn standard_characters() -> CharacterRegistry {
    let mut registry = CharacterRegistry::new();

    registry.register(
        CharacterDefinition::new(GENIUS, "Genius").with_clues_to_end_turn(2),
    );
    registry.register(
        CharacterDefinition::new(PANICKY, "Panicky")
            .with_extra_action_at_or_below(PANICKY_TOKEN_CEILING),
    );
    registry.register(
        CharacterDefinition::new(CONTRARIAN, "Contrarian").with_play_order_inversion(),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_characters() {
        let registry = standard_characters();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(GENIUS).unwrap().clues_to_end_turn, 2);
        assert_eq!(
            registry.get(PANICKY).unwrap().extra_action_token_ceiling,
            Some(PANICKY_TOKEN_CEILING)
        );
        assert!(registry.get(CONTRARIAN).unwrap().inverts_play_order);
    }
}
