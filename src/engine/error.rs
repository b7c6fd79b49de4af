//! Fatal transition faults.

use crate::core::PlayerId;

/// Errors that abort an action transition.
///
/// There is exactly one: metadata corruption. Everything else the
/// machine observes is either a normal transition or a non-fatal
/// [`crate::engine::Desync`] report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The active seat has no character assignment entry. Continuing
    /// would compute turn order from an undefined ability, so the
    /// transition is abandoned instead.
    #[error("no character assignment entry for active {player}")]
    MissingCharacterAssignment {
        /// The seat whose assignment entry is absent.
        player: PlayerId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_the_seat() {
        let err = TurnError::MissingCharacterAssignment {
            player: PlayerId::new(2),
        };
        assert_eq!(
            err.to_string(),
            "no character assignment entry for active Player 2"
        );
    }
}
