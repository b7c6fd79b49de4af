//! # turn-engine
//!
//! Turn-progression core for a cooperative card game played by a fixed
//! roster of players under an authoritative server.
//!
//! The crate answers one question after every in-game action: whose turn
//! is it now? It decides when a turn ends, when the end-game countdown
//! begins (deck exhaustion), and reconciles the locally predicted turn
//! order against the server's announcements.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: applying an action never mutates its inputs.
//!    The machine clones the small snapshot and overwrites the fields
//!    that change, so callers can keep every published snapshot.
//!
//! 2. **Consulted, Never Owned**: character abilities live behind an
//!    injected `CharacterRegistry`. The machine asks the rule predicates;
//!    it never hardcodes ability branching, so new abilities slot in
//!    without touching transition dispatch.
//!
//! 3. **Authoritative Server**: the local machine predicts turn order;
//!    server `Turn` announcements are checked against it, and mismatches
//!    surface as structured diagnostics rather than panics.
//!
//! Legality checking, clue-token accounting, deck composition, and
//! transport all live upstream. This crate consumes their derived facts
//! (deck size, clue-token count, character assignments) and owns nothing
//! but turn bookkeeping.
//!
//! ## Example
//!
//! ```
//! use turn_engine::{
//!     standard_characters, GameMetadata, PlayerId, TurnAction, TurnEngine, TurnState,
//! };
//!
//! let engine = TurnEngine::new(standard_characters());
//! let metadata = GameMetadata::new(4);
//! let state = TurnState::new(PlayerId::new(0));
//!
//! // A discard is followed by a draw; the draw closes the turn.
//! let t = engine.apply(&state, &TurnAction::Discard, &metadata, 30, 8).unwrap();
//! let t = engine.apply(&t.state, &TurnAction::Draw, &metadata, 29, 8).unwrap();
//!
//! assert_eq!(t.state.turn_num, 1);
//! assert_eq!(t.state.current_player, Some(PlayerId::new(1)));
//! ```
//!
//! ## Modules
//!
//! - `core`: Player IDs, the turn snapshot, actions, game metadata
//! - `characters`: Ability identifiers, definitions, registry, stock catalog
//! - `rules`: Pure turn rule predicates
//! - `engine`: The turn state machine, errors, diagnostics

pub mod characters;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameMetadata, PlayerId, TurnAction, TurnState};

pub use crate::characters::{
    standard_characters, CharacterDefinition, CharacterId, CharacterRegistry,
};

pub use crate::engine::{Desync, Diagnostics, Transition, TurnEngine, TurnError};
