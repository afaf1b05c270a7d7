//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of 2 through 10, J, Q, K or A.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit is not one of clubs, diamonds, hearts or spades.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// More aces than a single deck holds.
    #[error("hand holds {0} aces, a single deck has at most 4")]
    TooManyAces(usize),
}

/// Errors that abort a run of rounds.
///
/// Running out of cards or money between rounds is not an error; it ends the
/// run with a [`Termination`](crate::Termination) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Dealing failed in the middle of a round.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A hand broke the scoring invariants.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
