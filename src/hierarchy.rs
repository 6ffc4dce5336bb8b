//! Fixed strength ordering of the Truco Mineiro deck.
//!
//! Rank values run from 0 (strongest) to 39 (weakest). The four manilhas
//! are pinned to ranks 0 through 3; every other card follows by rank
//! bucket, ordered by suit inside each bucket.

use core::cmp::Ordering;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::HierarchyError;

const fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// The fixed manilhas, strongest first.
pub const MANILHAS: [Card; 4] = [
    c(Rank::Four, Suit::Clubs),
    c(Rank::Seven, Suit::Hearts),
    c(Rank::Ace, Suit::Spades),
    c(Rank::Seven, Suit::Diamonds),
];

/// Every card of the deck, strongest first. A card's index is its rank value.
pub const HIERARCHY: [Card; DECK_SIZE] = [
    MANILHAS[0],
    MANILHAS[1],
    MANILHAS[2],
    MANILHAS[3],
    c(Rank::Three, Suit::Spades),
    c(Rank::Three, Suit::Hearts),
    c(Rank::Three, Suit::Diamonds),
    c(Rank::Three, Suit::Clubs),
    c(Rank::Two, Suit::Spades),
    c(Rank::Two, Suit::Hearts),
    c(Rank::Two, Suit::Diamonds),
    c(Rank::Two, Suit::Clubs),
    c(Rank::Ace, Suit::Diamonds),
    c(Rank::Ace, Suit::Hearts),
    c(Rank::Ace, Suit::Clubs),
    c(Rank::King, Suit::Spades),
    c(Rank::King, Suit::Hearts),
    c(Rank::King, Suit::Diamonds),
    c(Rank::King, Suit::Clubs),
    c(Rank::Jack, Suit::Spades),
    c(Rank::Jack, Suit::Hearts),
    c(Rank::Jack, Suit::Diamonds),
    c(Rank::Jack, Suit::Clubs),
    c(Rank::Queen, Suit::Spades),
    c(Rank::Queen, Suit::Hearts),
    c(Rank::Queen, Suit::Diamonds),
    c(Rank::Queen, Suit::Clubs),
    c(Rank::Seven, Suit::Spades),
    c(Rank::Seven, Suit::Clubs),
    c(Rank::Six, Suit::Spades),
    c(Rank::Six, Suit::Hearts),
    c(Rank::Six, Suit::Diamonds),
    c(Rank::Six, Suit::Clubs),
    c(Rank::Five, Suit::Spades),
    c(Rank::Five, Suit::Hearts),
    c(Rank::Five, Suit::Diamonds),
    c(Rank::Five, Suit::Clubs),
    c(Rank::Four, Suit::Spades),
    c(Rank::Four, Suit::Hearts),
    c(Rank::Four, Suit::Diamonds),
];

/// Returns the rank value of a card (0 = strongest).
///
/// # Errors
///
/// Returns [`HierarchyError::UnknownCard`] if the card is not in the table.
///
/// # Example
///
/// ```
/// use truco::{Card, Rank, Suit, hierarchy};
///
/// assert_eq!(hierarchy::rank(&Card::new(Rank::Four, Suit::Clubs)), Ok(0));
/// assert_eq!(hierarchy::rank(&Card::new(Rank::Four, Suit::Diamonds)), Ok(39));
/// ```
pub fn rank(card: &Card) -> Result<u8, HierarchyError> {
    HIERARCHY
        .iter()
        .position(|entry| entry == card)
        .map(|index| index as u8)
        .ok_or(HierarchyError::UnknownCard)
}

/// Returns the rank value of a card given in its string form, e.g. `"7♦"`.
///
/// Only the canonical rank+suit symbols are recognized.
///
/// # Errors
///
/// Returns [`HierarchyError::UnknownCard`] for any label outside the deck.
pub fn rank_of_label(label: &str) -> Result<u8, HierarchyError> {
    let mut chars = label.chars();
    let (Some(rank_symbol), Some(suit_symbol), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(HierarchyError::UnknownCard);
    };

    HIERARCHY
        .iter()
        .position(|entry| entry.rank.symbol() == rank_symbol && entry.suit.symbol() == suit_symbol)
        .map(|index| index as u8)
        .ok_or(HierarchyError::UnknownCard)
}

/// Returns whether the card is one of the four manilhas.
#[must_use]
pub fn is_manilha(card: &Card) -> bool {
    MANILHAS.contains(card)
}

/// Compares the strength of two cards.
///
/// `Ordering::Greater` means `a` beats `b`.
///
/// # Errors
///
/// Returns [`HierarchyError::UnknownCard`] if either card is not in the table.
pub fn compare(a: &Card, b: &Card) -> Result<Ordering, HierarchyError> {
    let a = rank(a)?;
    let b = rank(b)?;
    // Lower rank value is stronger.
    Ok(b.cmp(&a))
}
