//! Actions the turn machine reacts to.
//!
//! Actions arrive on an ordered feed from the surrounding client/server
//! synchronization layer. Play, discard, clue, and draw actions are
//! assumed to have passed legality checks upstream; the machine only
//! does turn bookkeeping for them. `Turn` is the server's authoritative
//! announcement of whose turn it believes it is, used purely for
//! reconciliation.

use serde::{Deserialize, Serialize};

/// Server-side sentinel in [`TurnAction::Turn::who`] announcing that the
/// game has ended.
pub const WHO_GAME_ENDED: i32 = -1;

/// One entry on the action feed.
///
/// The enum is non-exhaustive on purpose: action kinds added by future
/// server versions must flow through older clients as no-ops, so
/// dispatch always carries a wildcard arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TurnAction {
    /// The active player played a card.
    Play,
    /// The active player discarded a card.
    Discard,
    /// The active player gave a clue.
    Clue,
    /// The active player drew a replacement card.
    Draw,
    /// The game concluded (win, loss, or termination).
    GameOver,
    /// Server announcement of the turn it believes is starting.
    Turn {
        /// The server's turn number.
        turn_num: u32,
        /// The server's active seat, or [`WHO_GAME_ENDED`].
        who: i32,
    },
}
