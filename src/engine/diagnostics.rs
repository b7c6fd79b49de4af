//! Structured desynchronization diagnostics.
//!
//! When a server `Turn` announcement disagrees with the locally
//! predicted state, the machine does not panic and does not silently
//! drop the observation. Each mismatch becomes a [`Desync`] value on the
//! returned transition, so callers and tests can assert on it without
//! scraping log text, and is also emitted as a `tracing` warning for
//! operators.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Per-transition diagnostic buffer.
///
/// Inline capacity of two covers every reachable case: a single
/// announcement can report at most a turn-number mismatch plus one
/// player-level finding.
pub type Diagnostics = SmallVec<[Desync; 2]>;

/// A detected mismatch between local prediction and a server
/// announcement. Reported, never thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Desync {
    /// Local and server turn numbers disagree.
    TurnNumberMismatch {
        /// Locally predicted turn number.
        local: u32,
        /// Turn number the server announced.
        server: u32,
    },

    /// The server declared the game over while a player was still
    /// active locally; the local state was forced to catch up.
    ForcedGameEnd {
        /// The seat that was still active locally.
        local: PlayerId,
    },

    /// Local and server active seats disagree.
    ActivePlayerMismatch {
        /// Locally predicted active seat.
        local: PlayerId,
        /// Seat the server announced.
        server: i32,
    },
}

impl Desync {
    /// Emit this diagnostic as a structured `tracing` warning.
    pub(crate) fn warn(self) {
        match self {
            Desync::TurnNumberMismatch { local, server } => {
                tracing::warn!(local, server, "turn number differs from server announcement");
            }
            Desync::ForcedGameEnd { local } => {
                tracing::warn!(local = %local, "server ended the game before the local state did");
            }
            Desync::ActivePlayerMismatch { local, server } => {
                tracing::warn!(local = %local, server, "active player differs from server announcement");
            }
        }
    }
}
