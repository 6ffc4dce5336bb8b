//! Match state types.

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// No hands dealt. A match must be started.
    #[default]
    AwaitingRoundStart,
    /// Hands are dealt and rounds remain to be played.
    RoundInProgress,
    /// Every round has been played and the result is available.
    MatchComplete,
}
