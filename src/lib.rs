//! A Truco Mineiro card game engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that deals three cards to a player
//! and to a computer opponent, resolves one card from each side per round
//! against a fixed card hierarchy, and declares a winner after the last
//! round. Rendering is left to the caller: every engine call returns a
//! result value to display.
//!
//! # Example
//!
//! ```
//! use truco::{Match, MatchOptions};
//!
//! let mut game = Match::new(MatchOptions::default(), 42);
//! game.start_match().unwrap();
//! while !game.is_match_complete() {
//!     let index = game.player_hand().playable_indices()[0];
//!     let round = game.play_round(index).unwrap();
//!     println!("{} vs {}: {:?}", round.player_card, round.computer_card, round.outcome);
//! }
//! let result = game.match_result().unwrap();
//! println!("{:?}", result.winner);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod hierarchy;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{DealError, HierarchyError, ParseCardError, PlayError, ResultError};
pub use game::{Match, MatchState};
pub use hand::Hand;
pub use options::MatchOptions;
pub use result::{MatchResult, MatchStart, MatchWinner, RoundOutcome, RoundResult, Scores, Side};
