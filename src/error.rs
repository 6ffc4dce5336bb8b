//! Error types for game operations.

use thiserror::Error;

/// Errors from hierarchy lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// The card is not one of the 40 cards of the deck.
    #[error("unknown card")]
    UnknownCard,
}

/// Errors from parsing a card's string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card string")]
    Empty,
    /// Rank symbol is not part of the deck.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit symbol is missing or not recognized.
    #[error("invalid suit")]
    InvalidSuit,
    /// Extra characters after the suit.
    #[error("unexpected trailing input")]
    TrailingInput,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hand size is zero.
    #[error("hand size must be at least one card")]
    EmptyHand,
    /// Not enough cards in the deck for both hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The same card would be dealt twice.
    #[error("duplicate card in the deck")]
    DuplicateCard,
}

/// Errors that can occur when playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No match has been started.
    #[error("match not started")]
    MatchNotStarted,
    /// All rounds of the match have been played.
    #[error("match already complete")]
    MatchAlreadyComplete,
    /// Index is out of range or the card was already played.
    #[error("invalid card index")]
    InvalidCardIndex,
    /// A played card is missing from the hierarchy table.
    #[error("unknown card")]
    UnknownCard,
}

impl From<HierarchyError> for PlayError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::UnknownCard => Self::UnknownCard,
        }
    }
}

/// Errors that can occur when reading the match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    /// No match has been started.
    #[error("match not started")]
    MatchNotStarted,
    /// Rounds remain to be played.
    #[error("match not complete")]
    MatchNotComplete,
}
