//! Match configuration options.

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use truco::MatchOptions;
///
/// let options = MatchOptions::default().with_hand_size(3);
/// assert_eq!(options.hand_size, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// Cards dealt to each side. A match lasts one round per card.
    pub hand_size: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { hand_size: 3 }
    }
}

impl MatchOptions {
    /// Sets the number of cards dealt to each side.
    ///
    /// Sizes that cannot be dealt from one deck are rejected when the match
    /// starts.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Returns the number of rounds in a match.
    #[must_use]
    pub const fn rounds_per_match(&self) -> u8 {
        self.hand_size
    }
}
