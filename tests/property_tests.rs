//! Property tests for the transition laws.
//!
//! Each law quantifies over arbitrary (consistent) snapshots and
//! actions: the machine is deterministic, counters clear exactly at
//! boundaries, the endgame stamp is write-once, exhaustion always ends
//! play/discard turns, and a finished game stays finished.

use proptest::prelude::*;

use turn_engine::characters::catalog;
use turn_engine::{
    standard_characters, GameMetadata, PlayerId, TurnAction, TurnEngine, TurnState,
};

/// Metadata plus a snapshot whose active seat fits the roster.
fn game_inputs() -> impl Strategy<Value = (GameMetadata, TurnState)> {
    (2usize..=6, any::<bool>()).prop_flat_map(|(num_players, with_characters)| {
        let metadata = if with_characters {
            GameMetadata::new(num_players)
                .with_character(PlayerId::new(0), catalog::CONTRARIAN)
                .with_character(PlayerId::new(1), catalog::PANICKY)
        } else {
            GameMetadata::new(num_players)
        };

        let current_player = prop_oneof![
            1 => Just(None),
            4 => (0..num_players as u8).prop_map(|p| Some(PlayerId::new(p))),
        ];

        (
            Just(metadata),
            current_player,
            0u32..50,
            any::<bool>(),
            0u32..4,
            0u32..4,
            prop_oneof![Just(None), (1u32..60).prop_map(Some)],
        )
            .prop_map(
                |(metadata, current_player, turn_num, inverted, cards, clues, end_turn_num)| {
                    let state = TurnState {
                        turn_num,
                        current_player,
                        play_order_inverted: inverted,
                        cards_played_or_discarded_this_turn: cards,
                        clues_given_this_turn: clues,
                        end_turn_num,
                    };
                    (metadata, state)
                },
            )
    })
}

fn any_action() -> impl Strategy<Value = TurnAction> {
    prop_oneof![
        Just(TurnAction::Play),
        Just(TurnAction::Discard),
        Just(TurnAction::Clue),
        Just(TurnAction::Draw),
        Just(TurnAction::GameOver),
        (0u32..50, -1i32..6).prop_map(|(turn_num, who)| TurnAction::Turn { turn_num, who }),
    ]
}

proptest! {
    #[test]
    fn apply_is_deterministic(
        (metadata, state) in game_inputs(),
        action in any_action(),
        deck_size in 0u32..40,
        clue_tokens in 0u32..9,
    ) {
        let engine = TurnEngine::new(standard_characters());

        let first = engine.apply(&state, &action, &metadata, deck_size, clue_tokens);
        let second = engine.apply(&state, &action, &metadata, deck_size, clue_tokens);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn counters_are_zero_after_every_boundary(
        (metadata, state) in game_inputs(),
        action in any_action(),
        deck_size in 0u32..40,
        clue_tokens in 0u32..9,
    ) {
        let engine = TurnEngine::new(standard_characters());
        let t = engine.apply(&state, &action, &metadata, deck_size, clue_tokens).unwrap();

        if t.state.turn_num > state.turn_num {
            prop_assert_eq!(t.state.cards_played_or_discarded_this_turn, 0);
            prop_assert_eq!(t.state.clues_given_this_turn, 0);
        }
    }

    #[test]
    fn empty_deck_always_ends_play_and_discard_turns(
        (metadata, state) in game_inputs(),
        action in prop_oneof![Just(TurnAction::Play), Just(TurnAction::Discard)],
        clue_tokens in 0u32..9,
    ) {
        let engine = TurnEngine::new(standard_characters());
        let t = engine.apply(&state, &action, &metadata, 0, clue_tokens).unwrap();

        prop_assert!(t.state.turn_num > state.turn_num);
    }

    #[test]
    fn endgame_stamp_is_write_once(
        (metadata, state) in game_inputs(),
        action in any_action(),
        deck_size in 0u32..40,
        clue_tokens in 0u32..9,
    ) {
        let engine = TurnEngine::new(standard_characters());
        let t = engine.apply(&state, &action, &metadata, deck_size, clue_tokens).unwrap();

        if state.end_turn_num.is_some() {
            prop_assert_eq!(t.state.end_turn_num, state.end_turn_num);
        }
    }

    #[test]
    fn a_finished_game_stays_finished(
        (metadata, state) in game_inputs(),
        action in any_action(),
        deck_size in 0u32..40,
        clue_tokens in 0u32..9,
    ) {
        let engine = TurnEngine::new(standard_characters());
        let mut ended = state;
        ended.current_player = None;

        let t = engine.apply(&ended, &action, &metadata, deck_size, clue_tokens).unwrap();

        prop_assert_eq!(t.state.current_player, None);
    }

    #[test]
    fn turn_number_never_decreases(
        (metadata, state) in game_inputs(),
        action in any_action(),
        deck_size in 0u32..40,
        clue_tokens in 0u32..9,
    ) {
        let engine = TurnEngine::new(standard_characters());
        let t = engine.apply(&state, &action, &metadata, deck_size, clue_tokens).unwrap();

        prop_assert!(t.state.turn_num >= state.turn_num);
    }

    #[test]
    fn announcements_touch_nothing_but_the_active_seat(
        (metadata, state) in game_inputs(),
        server_turn in 0u32..50,
        who in -1i32..6,
    ) {
        let engine = TurnEngine::new(standard_characters());
        let action = TurnAction::Turn { turn_num: server_turn, who };
        let t = engine.apply(&state, &action, &metadata, 10, 8).unwrap();

        prop_assert_eq!(t.state.turn_num, state.turn_num);
        prop_assert_eq!(t.state.play_order_inverted, state.play_order_inverted);
        prop_assert_eq!(
            t.state.cards_played_or_discarded_this_turn,
            state.cards_played_or_discarded_this_turn
        );
        prop_assert_eq!(t.state.clues_given_this_turn, state.clues_given_this_turn);
        prop_assert_eq!(t.state.end_turn_num, state.end_turn_num);

        // The only permitted edit is the catch-up to a server game end.
        if who == -1 {
            prop_assert_eq!(t.state.current_player, None);
        } else {
            prop_assert_eq!(t.state.current_player, state.current_player);
        }
    }
}
