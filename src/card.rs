//! Card types for the 40-card Truco deck.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in the order used for deck building and tie-free ordering
    /// within a rank bucket.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' | 'S' | 's' => Some(Self::Spades),
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank.
///
/// Eights, nines and tens are not part of the Truco deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
}

impl Rank {
    /// All ranks, in the traditional ordering used to build the deck.
    pub const ALL: [Self; 10] = [
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Queen,
        Self::Jack,
        Self::King,
        Self::Ace,
        Self::Two,
        Self::Three,
    ];

    /// Returns the single-character rank symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::King => 'K',
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            'Q' | 'q' => Some(Self::Queen),
            'J' | 'j' => Some(Self::Jack),
            'K' | 'k' => Some(Self::King),
            'A' | 'a' => Some(Self::Ace),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            _ => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses the rank+suit form produced by [`Display`](fmt::Display), e.g.
/// `"4♣"`. ASCII suit letters (`S`, `H`, `D`, `C`) are accepted too.
///
/// ```
/// use truco::{Card, Rank, Suit};
///
/// let card: Card = "7♥".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Seven, Suit::Hearts));
/// assert_eq!("ad".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Diamonds));
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let rank = chars.next().ok_or(ParseCardError::Empty)?;
        let rank = Rank::from_char(rank).ok_or(ParseCardError::InvalidRank)?;
        let suit = chars.next().ok_or(ParseCardError::InvalidSuit)?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::InvalidSuit)?;
        if chars.next().is_some() {
            return Err(ParseCardError::TrailingInput);
        }
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards in a Truco deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
