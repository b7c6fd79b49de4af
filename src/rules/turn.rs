//! When turns end, and who plays next.

use crate::characters::{CharacterId, CharacterRegistry};
use crate::core::PlayerId;

/// Does giving a clue end the active player's turn?
///
/// The clue being processed counts as the first clue of the turn, so a
/// plain player's turn ends immediately; an ability holder may need to
/// give more before `clues_given_this_turn` catches up to their
/// threshold.
#[must_use]
pub fn should_end_turn_after_clue(
    clues_given_this_turn: u32,
    character: Option<CharacterId>,
    characters: &CharacterRegistry,
) -> bool {
    let threshold = character
        .and_then(|id| characters.get(id))
        .map_or(1, |def| def.clues_to_end_turn);

    clues_given_this_turn + 1 >= threshold
}

/// Does drawing a replacement card end the active player's turn?
///
/// A draw that follows no play or discard this turn (the initial deal)
/// never ends a turn. Otherwise the draw closes the turn, unless the
/// active character defers their turn end to a second play or discard
/// while clue tokens are at or below the ability's ceiling.
#[must_use]
pub fn should_end_turn_after_draw(
    cards_played_or_discarded_this_turn: u32,
    character: Option<CharacterId>,
    characters: &CharacterRegistry,
    clue_tokens: u32,
) -> bool {
    if let Some(def) = character.and_then(|id| characters.get(id)) {
        if let Some(ceiling) = def.extra_action_token_ceiling {
            if clue_tokens <= ceiling {
                return cards_played_or_discarded_this_turn >= 2;
            }
        }
    }

    cards_played_or_discarded_this_turn >= 1
}

/// The seat that plays after `current`, one step along the current play
/// direction, wrapping around the table.
///
/// Only ever invoked while a player is active; an out-of-range seat is a
/// caller bug.
#[must_use]
pub fn next_player_index(current: PlayerId, num_players: usize, order_inverted: bool) -> PlayerId {
    assert!(
        current.index() < num_players,
        "{current} is out of range for a {num_players}-player game"
    );

    let next = if order_inverted {
        (current.index() + num_players - 1) % num_players
    } else {
        (current.index() + 1) % num_players
    };

    PlayerId::new(next as u8)
}

/// Does the finishing player's character flip play direction?
///
/// The result toggles `play_order_inverted` rather than setting it, so
/// the effect cancels out after an even number of the holder's turns.
#[must_use]
pub fn should_play_order_invert(
    character: Option<CharacterId>,
    characters: &CharacterRegistry,
) -> bool {
    character
        .and_then(|id| characters.get(id))
        .map_or(false, |def| def.inverts_play_order)
}
