//! Transition dispatch and the turn-advancement algorithm.

use crate::characters::{CharacterId, CharacterRegistry};
use crate::core::{GameMetadata, TurnAction, TurnState, WHO_GAME_ENDED};
use crate::rules::turn as turn_rules;

use super::diagnostics::{Desync, Diagnostics};
use super::error::TurnError;

/// The result of applying one action: the successor snapshot plus any
/// desynchronization diagnostics observed along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The next published snapshot.
    pub state: TurnState,

    /// Mismatches detected against a server announcement, in emission
    /// order. Empty for every action kind except `Turn`.
    pub diagnostics: Diagnostics,
}

/// The turn state machine.
///
/// Holds only the injected character registry; all per-game data arrives
/// as `apply` arguments, so one engine can serve many games and is
/// trivially `Send + Sync`.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    characters: CharacterRegistry,
}

impl TurnEngine {
    /// Create an engine consulting the given ability registry.
    #[must_use]
    pub fn new(characters: CharacterRegistry) -> Self {
        Self { characters }
    }

    /// The injected ability registry.
    #[must_use]
    pub fn characters(&self) -> &CharacterRegistry {
        &self.characters
    }

    /// Apply one action to a snapshot, producing its successor.
    ///
    /// Pure with respect to its inputs: `state`, `action`, and
    /// `metadata` are never mutated, and identical inputs always produce
    /// an identical [`Transition`]. `deck_size` and `clue_tokens` are
    /// the collaborator facts queried fresh for this action; a
    /// `deck_size` of 0 signals exhaustion.
    ///
    /// # Errors
    ///
    /// [`TurnError::MissingCharacterAssignment`] if a player is active
    /// but the metadata has no assignment entry for them. Desyncs
    /// against server announcements are never errors; they are reported
    /// on the returned transition.
    pub fn apply(
        &self,
        state: &TurnState,
        action: &TurnAction,
        metadata: &GameMetadata,
        deck_size: u32,
        clue_tokens: u32,
    ) -> Result<Transition, TurnError> {
        let num_players = metadata.num_players();

        // The ability of the player whose turn this is, resolved from the
        // pre-transition snapshot. Turn advancement must consult the
        // finishing player, not whoever comes next.
        let character = match state.current_player {
            Some(player) => metadata
                .assignment(player)
                .ok_or(TurnError::MissingCharacterAssignment { player })?,
            None => None,
        };

        let mut next = state.clone();
        let mut diagnostics = Diagnostics::new();

        match *action {
            TurnAction::Play | TurnAction::Discard => {
                next.cards_played_or_discarded_this_turn += 1;

                // Deck exhaustion forces an end-of-turn on any play or
                // discard, bypassing the draw-step thresholds.
                if deck_size == 0 {
                    self.next_turn(&mut next, num_players, deck_size, character);
                }
            }

            TurnAction::Clue => {
                if turn_rules::should_end_turn_after_clue(
                    next.clues_given_this_turn,
                    character,
                    &self.characters,
                ) {
                    self.next_turn(&mut next, num_players, deck_size, character);
                }
            }

            TurnAction::Draw => {
                if turn_rules::should_end_turn_after_draw(
                    next.cards_played_or_discarded_this_turn,
                    character,
                    &self.characters,
                    clue_tokens,
                ) {
                    self.next_turn(&mut next, num_players, deck_size, character);
                }
            }

            TurnAction::GameOver => {
                next.current_player = None;
            }

            TurnAction::Turn { turn_num, who } => {
                self.reconcile(&mut next, turn_num, who, &mut diagnostics);
            }

            // Unknown action kinds added by newer servers are no-ops.
            #[allow(unreachable_patterns)]
            _ => {}
        }

        Ok(Transition {
            state: next,
            diagnostics,
        })
    }

    /// Check a server turn announcement against the local prediction.
    ///
    /// Announcements never advance the local turn; they can only end the
    /// game early when the server says it is over. A locally-ended game
    /// is never revived, so every check is gated on a player still being
    /// active.
    fn reconcile(
        &self,
        state: &mut TurnState,
        server_turn_num: u32,
        who: i32,
        diagnostics: &mut Diagnostics,
    ) {
        if state.turn_num != server_turn_num && state.current_player.is_some() {
            report(
                diagnostics,
                Desync::TurnNumberMismatch {
                    local: state.turn_num,
                    server: server_turn_num,
                },
            );
        }

        if who == WHO_GAME_ENDED {
            if let Some(local) = state.current_player {
                state.current_player = None;
                report(diagnostics, Desync::ForcedGameEnd { local });
            }
        }

        // Checked after the forced end above: once the game is over
        // (locally or by catch-up) there is no active player to compare.
        if let Some(local) = state.current_player {
            if i32::from(local.0) != who {
                report(diagnostics, Desync::ActivePlayerMismatch { local, server: who });
            }
        }
    }

    /// Advance to the next turn.
    ///
    /// `character` is the ability of the player ending their turn; the
    /// direction flip must fire for the finisher even though the active
    /// seat has already moved on by the time it is applied.
    fn next_turn(
        &self,
        state: &mut TurnState,
        num_players: usize,
        deck_size: u32,
        character: Option<CharacterId>,
    ) {
        state.turn_num += 1;

        state.current_player = state.current_player.map(|current| {
            turn_rules::next_player_index(current, num_players, state.play_order_inverted)
        });

        if turn_rules::should_play_order_invert(character, &self.characters) {
            state.play_order_inverted = !state.play_order_inverted;
        }

        // The countdown target is relative to the freshly incremented
        // turn number, so every remaining seat gets exactly one turn.
        if deck_size == 0 && state.end_turn_num.is_none() {
            state.end_turn_num = Some(state.turn_num + num_players as u32);
        }

        state.cards_played_or_discarded_this_turn = 0;
        state.clues_given_this_turn = 0;
    }
}

fn report(diagnostics: &mut Diagnostics, desync: Desync) {
    desync.warn();
    diagnostics.push(desync);
}
