use crate::error::ResultError;
use crate::result::MatchResult;

use super::{Match, MatchState};

impl Match {
    /// Returns the match result.
    ///
    /// The side with more round wins takes the match; equal totals are a
    /// draw.
    ///
    /// # Errors
    ///
    /// Returns an error if no match has been started or rounds remain.
    pub fn match_result(&self) -> Result<MatchResult, ResultError> {
        match self.state {
            MatchState::AwaitingRoundStart => Err(ResultError::MatchNotStarted),
            MatchState::RoundInProgress => Err(ResultError::MatchNotComplete),
            MatchState::MatchComplete => Ok(MatchResult::from_scores(self.scores)),
        }
    }
}
