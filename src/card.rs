//! Card types and parsing.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::CardError;

/// Card suit, declared in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the lowercase suit name, e.g. `"spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    /// Returns the suit glyph used in card art.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clubs" => Ok(Self::Clubs),
            "diamonds" => Ok(Self::Diamonds),
            "hearts" => Ok(Self::Hearts),
            "spades" => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Card rank, declared in ascending order (aces high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order, ace last.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the ordinal of the rank: 2 through 10 for numerals, then
    /// 11 = Jack, 12 = Queen, 13 = King, 14 = Ace.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8 + 2
    }

    /// Returns the short label printed on the card, e.g. `"10"` or `"K"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns whether the rank is a jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[(value - 2) as usize]),
            _ => Err(CardError::InvalidRank),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or(CardError::InvalidRank)
    }
}

/// A playing card with a visibility flag.
///
/// Equality, ordering and hashing only look at rank and suit; a hidden card
/// still compares equal to its visible twin.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    visible: bool,
}

impl Card {
    /// Creates a new visible card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::with_visibility(rank, suit, true)
    }

    /// Creates a card with the given visibility.
    #[must_use]
    pub const fn with_visibility(rank: Rank, suit: Suit, visible: bool) -> Self {
        Self {
            rank,
            suit,
            visible,
        }
    }

    /// Parses a visible card from its rank and suit text.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Card, Rank, Suit};
    ///
    /// let card = Card::parse("A", "spades").unwrap();
    /// assert_eq!(card.rank(), Rank::Ace);
    /// assert_eq!(card.suit(), Suit::Spades);
    /// assert!(Card::parse("1", "spades").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when
    /// either part is outside the standard deck.
    pub fn parse(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card face is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the card face.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

/// Compact form: `(A, spades)`, or `(?, ?)` while hidden.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "({}, {})", self.rank.label(), self.suit.name())
        } else {
            f.write_str("(?, ?)")
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
