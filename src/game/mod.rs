//! Match engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::hand::Hand;
use crate::options::MatchOptions;
use crate::result::{RoundResult, Scores};

mod conclude;
mod deal;
mod round;
pub mod state;

pub use state::MatchState;

/// A player-versus-computer Truco match.
///
/// The match owns both hands, the scores and its random number generator,
/// so several matches can run side by side. Use [`MatchOptions`] to
/// configure the hand size.
pub struct Match {
    /// Match options.
    pub options: MatchOptions,
    /// Current match state.
    state: MatchState,
    /// Player's hand.
    player_hand: Hand,
    /// Computer's hand. Never exposed to the presentation layer.
    computer_hand: Hand,
    /// Round wins so far.
    scores: Scores,
    /// Rounds resolved in the current match.
    rounds_played: u8,
    /// Rounds in the current match, fixed when it is dealt.
    rounds_per_match: u8,
    /// Results of the rounds played so far.
    history: Vec<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Match {
    /// Creates a new match engine with the given seed.
    ///
    /// No cards are dealt until [`Match::start_match`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::{Match, MatchOptions, MatchState};
    ///
    /// let game = Match::new(MatchOptions::default(), 42);
    /// assert_eq!(game.state(), MatchState::AwaitingRoundStart);
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self {
            options,
            state: MatchState::AwaitingRoundStart,
            player_hand: Hand::new(),
            computer_hand: Hand::new(),
            scores: Scores::default(),
            rounds_played: 0,
            rounds_per_match: options.rounds_per_match(),
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current match state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns whether every round of the match has been played.
    #[must_use]
    pub fn is_match_complete(&self) -> bool {
        self.state == MatchState::MatchComplete
    }

    /// Returns the current scores.
    #[must_use]
    pub const fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the number of rounds resolved in the current match.
    #[must_use]
    pub const fn rounds_played(&self) -> u8 {
        self.rounds_played
    }

    /// Returns the number of rounds in the current match.
    #[must_use]
    pub const fn rounds_per_match(&self) -> u8 {
        self.rounds_per_match
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns how many cards the computer still holds.
    #[must_use]
    pub fn computer_cards_remaining(&self) -> usize {
        self.computer_hand.len()
    }

    /// Returns the results of the rounds played in the current match.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Clears hands and scores and returns to
    /// [`MatchState::AwaitingRoundStart`].
    ///
    /// A new match must be started before playing again.
    pub fn reset(&mut self) {
        self.clear_match();
        self.state = MatchState::AwaitingRoundStart;
    }

    fn clear_match(&mut self) {
        self.player_hand.clear();
        self.computer_hand.clear();
        self.scores = Scores::default();
        self.rounds_played = 0;
        self.history.clear();
    }
}
