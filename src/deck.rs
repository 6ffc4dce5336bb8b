//! Deck building, shuffling and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// Builds the 40-card deck in a fixed order: rank by rank, suits in
/// [`Suit::ALL`] order within each rank.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Returns the deck in a uniformly random order.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(mut deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    deck.shuffle(rng);
    deck
}

/// Deals two hands from the top of the deck.
///
/// The first `hand_size` cards form the first hand and the next `hand_size`
/// the second. The rest of the deck is not used.
///
/// # Errors
///
/// Returns an error if `hand_size` is zero, the deck is too short, or a card
/// would be dealt twice.
pub fn deal(deck: &[Card], hand_size: usize) -> Result<(Hand, Hand), DealError> {
    if hand_size == 0 {
        return Err(DealError::EmptyHand);
    }

    let dealt = deck
        .get(..hand_size * 2)
        .ok_or(DealError::NotEnoughCards)?;

    for (index, card) in dealt.iter().enumerate() {
        if dealt[..index].contains(card) {
            return Err(DealError::DuplicateCard);
        }
    }

    let (first, second) = dealt.split_at(hand_size);
    Ok((Hand::from_cards(first), Hand::from_cards(second)))
}
