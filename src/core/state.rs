//! The turn snapshot.
//!
//! ## TurnState
//!
//! One immutable-once-published value holding everything the machine
//! tracks between actions:
//! - Turn number and active player
//! - Play direction
//! - Per-turn counters (cleared at every turn boundary)
//! - The end-game countdown stamped at deck exhaustion
//!
//! The machine never mutates a published snapshot; each transition
//! clones the previous value and overwrites the fields that change.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Turn bookkeeping for one game, as of a single point in the action
/// stream.
///
/// `current_player` is `None` both before the turn cycle starts and once
/// the game has concluded; the two macro-states of the machine are
/// "a player is active" and "no player is active", and the latter is
/// terminal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Completed-turn count. Starts at 0 and never decreases.
    pub turn_num: u32,

    /// The seat whose turn it is, if any.
    pub current_player: Option<PlayerId>,

    /// Direction of seat advancement. Toggled, not set, by the
    /// order-reversing character ability.
    pub play_order_inverted: bool,

    /// Cards played or discarded since the last turn boundary.
    pub cards_played_or_discarded_this_turn: u32,

    /// Clues given since the last turn boundary. Maintained by the
    /// upstream clue-accounting collaborator; this machine only resets it.
    pub clues_given_this_turn: u32,

    /// The turn number at which the game must conclude, stamped exactly
    /// once when the deck runs out so every seat gets one final turn.
    pub end_turn_num: Option<u32>,
}

impl TurnState {
    /// Snapshot for a game that is about to start its first turn.
    #[must_use]
    pub fn new(starting_player: PlayerId) -> Self {
        Self {
            current_player: Some(starting_player),
            ..Self::default()
        }
    }

    /// True once no player is active. Also true for a pregame
    /// [`Default`] snapshot, which has no active player either.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.current_player.is_none()
    }

    /// True once the deck has been exhausted and the closing countdown
    /// has been stamped.
    #[must_use]
    pub fn in_final_round(&self) -> bool {
        self.end_turn_num.is_some()
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            turn_num: 0,
            current_player: None,
            play_order_inverted: false,
            cards_played_or_discarded_this_turn: 0,
            clues_given_this_turn: 0,
            end_turn_num: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = TurnState::new(PlayerId::new(0));

        assert_eq!(state.turn_num, 0);
        assert_eq!(state.current_player, Some(PlayerId::new(0)));
        assert!(!state.play_order_inverted);
        assert_eq!(state.cards_played_or_discarded_this_turn, 0);
        assert_eq!(state.clues_given_this_turn, 0);
        assert_eq!(state.end_turn_num, None);
        assert!(!state.is_game_over());
        assert!(!state.in_final_round());
    }

    #[test]
    fn test_default_has_no_active_player() {
        let state = TurnState::default();
        assert!(state.is_game_over());
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = TurnState {
            turn_num: 12,
            current_player: Some(PlayerId::new(3)),
            play_order_inverted: true,
            cards_played_or_discarded_this_turn: 1,
            clues_given_this_turn: 0,
            end_turn_num: Some(16),
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TurnState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
