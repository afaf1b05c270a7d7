//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::ScoreError;
use crate::score::score;

/// Who holds a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl Seat {
    /// Returns the name used in narration, `"Player"` or `"Dealer"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }
}

/// How a hand shows newly added cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Every card is shown and the hand stays sorted.
    Open,
    /// Only the first card ever added is shown; cards keep insertion order.
    Concealed,
}

impl Visibility {
    /// Restores the policy's invariant on `cards` after a mutation.
    fn settle(self, cards: &mut [Card]) {
        match self {
            Self::Open => {
                for card in cards.iter_mut() {
                    card.set_visible(true);
                }
                cards.sort();
            }
            Self::Concealed => {
                for card in cards.iter_mut().skip(1) {
                    card.set_visible(false);
                }
            }
        }
    }
}

/// An ordered collection of cards held by the player or the dealer.
///
/// Player hands are always [`Visibility::Open`]. Dealer hands start
/// [`Visibility::Concealed`] and switch to open once on [`Hand::reveal`];
/// they never conceal again.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Who holds the hand.
    seat: Seat,
    /// Current masking policy.
    visibility: Visibility,
}

impl Hand {
    /// Creates an empty, open player hand.
    #[must_use]
    pub const fn player() -> Self {
        Self {
            cards: Vec::new(),
            seat: Seat::Player,
            visibility: Visibility::Open,
        }
    }

    /// Creates an empty, concealed dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            cards: Vec::new(),
            seat: Seat::Dealer,
            visibility: Visibility::Concealed,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.add_cards([card]);
    }

    /// Adds several cards at once, then applies the hand's visibility policy.
    ///
    /// ```
    /// use bjsolo::{Card, Hand};
    ///
    /// let mut dealer = Hand::dealer();
    /// dealer.add_card(Card::parse("4", "hearts").unwrap());
    /// dealer.add_cards([
    ///     Card::parse("5", "spades").unwrap(),
    ///     Card::parse("K", "diamonds").unwrap(),
    /// ]);
    /// assert_eq!(dealer.to_string(), "(4, hearts) (?, ?) (?, ?)");
    ///
    /// dealer.reveal();
    /// assert_eq!(dealer.to_string(), "(4, hearts) (5, spades) (K, diamonds)");
    /// ```
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.visibility.settle(&mut self.cards);
    }

    /// Shows every card and sorts the hand.
    ///
    /// Calling it again, or on a player hand, changes nothing.
    pub fn reveal(&mut self) {
        self.visibility = Visibility::Open;
        self.visibility.settle(&mut self.cards);
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the current visibility policy.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns whether the hand still hides cards behind the first.
    #[must_use]
    pub fn is_concealed(&self) -> bool {
        self.visibility == Visibility::Concealed
    }

    /// Calculates the best score of the hand, hidden cards included.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand holds more than four aces.
    pub fn score(&self) -> Result<u16, ScoreError> {
        score(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Cards in compact form separated by single spaces.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
