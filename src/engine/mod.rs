//! The turn state machine.
//!
//! [`TurnEngine::apply`] is the single entry point: one action in, one
//! successor snapshot out. Every turn-ending branch funnels into the
//! same advancement algorithm, server announcements are reconciled into
//! structured [`Desync`] diagnostics, and the only fatal condition is
//! corrupt character metadata.

pub mod diagnostics;
pub mod error;
pub mod machine;

pub use diagnostics::{Desync, Diagnostics};
pub use error::TurnError;
pub use machine::{Transition, TurnEngine};
