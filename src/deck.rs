//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::shuffle::Shuffle;

/// An ordered deck whose first card is the top.
///
/// Cards only ever leave the deck, so it always holds a subset of the
/// standard 52 with no repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in ascending order: every suit of 2, then every
    /// suit of 3, and so on up to the aces.
    ///
    /// ```
    /// use bjsolo::Deck;
    ///
    /// let deck = Deck::new();
    /// let top: Vec<String> = deck.cards()[..5].iter().map(ToString::to_string).collect();
    /// assert_eq!(
    ///     top,
    ///     ["(2, clubs)", "(2, diamonds)", "(2, hearts)", "(2, spades)", "(3, clubs)"]
    /// );
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, top first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Reorders the deck by running each shuffle in turn with its count.
    ///
    /// ```
    /// use bjsolo::{Deck, Shuffle};
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&[(Shuffle::ModifiedOverhand, 2), (Shuffle::Mongean, 3)]);
    /// assert_eq!(deck.cards()[0].to_string(), "(A, clubs)");
    /// assert_eq!(deck.cards()[1].to_string(), "(Q, clubs)");
    /// ```
    pub fn shuffle(&mut self, plan: &[(Shuffle, usize)]) {
        for &(shuffle, count) in plan {
            log::debug!("shuffling deck: {shuffle:?} x{count}");
            self.cards = shuffle.apply(&self.cards, count);
        }
    }

    /// Like [`Deck::shuffle`], looking shuffles up with [`Shuffle::from_name`].
    ///
    /// Unrecognized names run the mongean shuffle.
    pub fn shuffle_named(&mut self, plan: &[(&str, usize)]) {
        let plan: Vec<(Shuffle, usize)> = plan
            .iter()
            .map(|&(name, count)| (Shuffle::from_name(name), count))
            .collect();
        self.shuffle(&plan);
    }

    /// Moves the top card into `hand` and returns it as it was dealt.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal_one(&mut self, hand: &mut Hand) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::EmptyDeck);
        }
        let card = self.cards.remove(0);
        hand.add_card(card);
        Ok(card)
    }

    /// Returns the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
