use core::cmp::Ordering;

use tracing::{debug, info, trace};

use crate::error::PlayError;
use crate::hierarchy;
use crate::result::{RoundOutcome, RoundResult};

use super::{Match, MatchState};

impl Match {
    fn ensure_round_in_progress(&self) -> Result<(), PlayError> {
        match self.state {
            MatchState::AwaitingRoundStart => Err(PlayError::MatchNotStarted),
            MatchState::RoundInProgress => Ok(()),
            MatchState::MatchComplete => Err(PlayError::MatchAlreadyComplete),
        }
    }

    /// Plays one round.
    ///
    /// The player plays the card in slot `player_index` and the computer
    /// answers with a uniformly random card from its own hand. The stronger
    /// card wins the round and earns its side one point. After the last
    /// round the match moves to [`MatchState::MatchComplete`].
    ///
    /// # Errors
    ///
    /// Returns an error if no match is in progress, the match is already
    /// complete, or `player_index` is out of range or was already played.
    /// Nothing changes when an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::{Match, MatchOptions, PlayError};
    ///
    /// let mut game = Match::new(MatchOptions::default(), 3);
    /// game.start_match().unwrap();
    ///
    /// let round = game.play_round(0).unwrap();
    /// assert_eq!(round.rounds_played, 1);
    /// assert_eq!(game.play_round(0).unwrap_err(), PlayError::InvalidCardIndex);
    /// ```
    pub fn play_round(&mut self, player_index: usize) -> Result<RoundResult, PlayError> {
        self.ensure_round_in_progress()?;

        let player_card = self
            .player_hand
            .get(player_index)
            .ok_or(PlayError::InvalidCardIndex)?;

        // Both hands shrink together, so the computer always has a card
        // while the match is in progress.
        let computer_index = self
            .computer_hand
            .choose_index(&mut self.rng)
            .ok_or(PlayError::MatchAlreadyComplete)?;
        let computer_card = self
            .computer_hand
            .get(computer_index)
            .ok_or(PlayError::MatchAlreadyComplete)?;
        trace!(computer_index, %computer_card, "computer picked card");

        let outcome = match hierarchy::compare(&player_card, &computer_card)? {
            Ordering::Greater => RoundOutcome::PlayerWins,
            Ordering::Less => RoundOutcome::ComputerWins,
            Ordering::Equal => RoundOutcome::Tie,
        };

        self.player_hand.play(player_index);
        self.computer_hand.play(computer_index);
        self.scores.record(outcome);
        self.rounds_played += 1;

        let result = RoundResult {
            round: self.rounds_played,
            player_index,
            player_card,
            computer_card,
            outcome,
            scores: self.scores,
            rounds_played: self.rounds_played,
        };
        self.history.push(result);

        debug!(
            round = self.rounds_played,
            %player_card,
            %computer_card,
            ?outcome,
            "round resolved"
        );

        if self.rounds_played >= self.rounds_per_match {
            self.state = MatchState::MatchComplete;
            info!(
                player = self.scores.player,
                computer = self.scores.computer,
                "match complete"
            );
        }

        Ok(result)
    }
}
