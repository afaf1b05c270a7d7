//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Winner of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins the bet.
    PlayerWin,
    /// Dealer takes the bet.
    DealerWin,
    /// Nobody wins; the bet is returned.
    Tie,
}

impl Outcome {
    /// Returns the winner label used in game summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerWin => "Player",
            Self::DealerWin => "Dealer",
            Self::Tie => "Tied",
        }
    }
}

/// Why a run of rounds stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Every requested round was played.
    Completed,
    /// Fewer cards remained than a round needs.
    DeckExhausted,
    /// The wallet could not cover the current bet.
    BetExhausted,
}

/// Snapshot of a resolved round, handed to a
/// [`RoundReporter`](crate::RoundReporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// Round number, counted over the lifetime of the game.
    pub round: u32,
    /// The player's final cards.
    pub player_hand: Vec<Card>,
    /// The dealer's final cards, revealed.
    pub dealer_hand: Vec<Card>,
    /// The player's final score.
    pub player_score: u16,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// Who won.
    pub outcome: Outcome,
    /// Wallet after settling the round.
    pub wallet: i64,
    /// Bet for the next round.
    pub bet: i64,
}

/// Result of [`Game::play_rounds`](crate::Game::play_rounds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    /// Rounds resolved during this call.
    pub rounds_played: u32,
    /// Why the call stopped.
    pub termination: Termination,
    /// Wallet when the call returned.
    pub wallet: i64,
    /// Bet when the call returned.
    pub bet: i64,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
