//! Core types: player identifiers, the turn snapshot, actions, metadata.
//!
//! These are the value types the state machine consumes and produces.
//! All of them are plain data; the transition logic lives in `engine`.

pub mod action;
pub mod metadata;
pub mod player;
pub mod state;

pub use action::{TurnAction, WHO_GAME_ENDED};
pub use metadata::GameMetadata;
pub use player::PlayerId;
pub use state::TurnState;
