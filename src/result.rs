//! Result types returned to the presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player's card was stronger.
    PlayerWins,
    /// The computer's card was stronger.
    ComputerWins,
    /// Both cards have the same strength. No point is awarded.
    Tie,
}

impl RoundOutcome {
    /// Returns the side that won the round, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::PlayerWins => Some(Side::Player),
            Self::ComputerWins => Some(Side::Computer),
            Self::Tie => None,
        }
    }
}

/// Round wins for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    /// Rounds won by the player.
    pub player: u8,
    /// Rounds won by the computer.
    pub computer: u8,
}

impl Scores {
    /// Adds the round's point to the winning side.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWins => self.player += 1,
            RoundOutcome::ComputerWins => self.computer += 1,
            RoundOutcome::Tie => {}
        }
    }
}

/// The player's view of a freshly dealt match.
///
/// The computer's hand is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStart {
    /// The player's cards, in slot order.
    pub player_hand: Vec<Card>,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u8,
    /// Slot the player played from.
    pub player_index: usize,
    /// The card the player played.
    pub player_card: Card,
    /// The card the computer played.
    pub computer_card: Card,
    /// Who won the round.
    pub outcome: RoundOutcome,
    /// Scores after this round.
    pub scores: Scores,
    /// Rounds played so far in the match, this one included.
    pub rounds_played: u8,
}

/// Winner of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    /// The player won more rounds.
    Player,
    /// The computer won more rounds.
    Computer,
    /// Both sides won the same number of rounds.
    Draw,
}

/// Result of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Who won the match.
    pub winner: MatchWinner,
    /// Final scores.
    pub scores: Scores,
}

impl MatchResult {
    /// Builds the result from final scores.
    #[must_use]
    pub const fn from_scores(scores: Scores) -> Self {
        let winner = if scores.player > scores.computer {
            MatchWinner::Player
        } else if scores.computer > scores.player {
            MatchWinner::Computer
        } else {
            MatchWinner::Draw
        };
        Self { winner, scores }
    }
}
