use tracing::debug;

use crate::card::Card;
use crate::deck;
use crate::error::DealError;
use crate::result::MatchStart;

use super::{Match, MatchState};

impl Match {
    /// Starts a new match with a freshly shuffled deck.
    ///
    /// Any match in progress is discarded. Returns the player's hand; the
    /// computer's hand stays hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hand size cannot be dealt from a
    /// single deck.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::{Match, MatchOptions, MatchState};
    ///
    /// let mut game = Match::new(MatchOptions::default(), 7);
    /// let start = game.start_match().unwrap();
    /// assert_eq!(start.player_hand.len(), 3);
    /// assert_eq!(game.state(), MatchState::RoundInProgress);
    /// ```
    pub fn start_match(&mut self) -> Result<MatchStart, DealError> {
        let cards = deck::shuffle(deck::build_deck(), &mut self.rng);
        self.start_match_with_deck(&cards)
    }

    /// Starts a new match dealing from the given deck as is.
    ///
    /// The first cards go to the player and the next to the computer.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size is zero, the deck is too short, or a
    /// card would be dealt twice. The current match is left untouched.
    pub fn start_match_with_deck(&mut self, cards: &[Card]) -> Result<MatchStart, DealError> {
        let hand_size = usize::from(self.options.hand_size);
        let (player_hand, computer_hand) = deck::deal(cards, hand_size)?;

        self.clear_match();
        self.player_hand = player_hand;
        self.computer_hand = computer_hand;
        self.rounds_per_match = self.options.rounds_per_match();
        self.state = MatchState::RoundInProgress;

        debug!(hand_size, deck_len = cards.len(), "dealt new match");

        Ok(MatchStart {
            player_hand: self.player_hand.cards(),
        })
    }
}
