//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::Card;

/// A side's hand.
///
/// Cards keep the slot they were dealt into. Playing a card empties its
/// slot, so indices stay valid for the rest of the match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    slots: Vec<Option<Card>>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            slots: cards.iter().copied().map(Some).collect(),
        }
    }

    /// Returns the card in a slot, or `None` if it is out of range or played.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    /// Plays the card in a slot.
    ///
    /// Returns `None` if the index is out of range or the card was already
    /// played.
    pub fn play(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Picks a uniformly random slot that still holds a card.
    ///
    /// Returns `None` if the hand is empty.
    pub fn choose_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.playable_indices().choose(rng).copied()
    }

    /// Returns the slot indices that still hold a card.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|_| index))
            .collect()
    }

    /// Returns the remaining cards with their slot indices.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|card| (index, card)))
    }

    /// Returns the remaining cards in slot order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Returns the number of cards still held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns whether every card has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns the number of slots the hand was dealt.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Clears the hand for a new match.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
