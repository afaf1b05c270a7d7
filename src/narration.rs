//! Narrated round events and the journal that collects them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::hand::Seat;
use crate::result::{Outcome, Termination};

/// A single narrated event.
///
/// Hands and cards are carried as already formatted text so the event keeps
/// the masking that was in effect when it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    /// A round begins.
    RoundStart {
        /// Round number.
        round: u32,
        /// Wallet before the round.
        wallet: i64,
        /// Bet for the round.
        bet: i64,
    },
    /// Opening hands after the deal.
    Dealt {
        /// The player's hand.
        player: String,
        /// The dealer's hand, masked.
        dealer: String,
    },
    /// A hand drew a card.
    Draw {
        /// Who drew.
        seat: Seat,
        /// The card drawn.
        card: String,
    },
    /// The dealer turned their cards over.
    Reveal {
        /// The dealer's hand.
        dealer: String,
    },
    /// The round was decided.
    Resolution {
        /// The player's score.
        player: u16,
        /// The dealer's score.
        dealer: u16,
        /// Who won.
        outcome: Outcome,
    },
    /// Play stopped before a round could start.
    Stopped {
        /// Why play stopped.
        reason: Termination,
        /// Wallet at the time.
        wallet: i64,
        /// Bet at the time.
        bet: i64,
    },
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStart { round, wallet, bet } => {
                writeln!(f, "Round {round} of Blackjack!")?;
                writeln!(f, "wallet: {wallet}")?;
                writeln!(f, "bet: {bet}")
            }
            Self::Dealt { player, dealer } => {
                writeln!(f, "Player Cards: {player}")?;
                writeln!(f, "Dealer Cards: {dealer}")
            }
            Self::Draw { seat, card } => writeln!(f, "{} pulled a {card}", seat.name()),
            Self::Reveal { dealer } => writeln!(f, "Dealer Cards Revealed: {dealer}"),
            Self::Resolution {
                player,
                dealer,
                outcome,
            } => match outcome {
                Outcome::PlayerWin => writeln!(
                    f,
                    "Player won with a score of {player}. Dealer lost with a score of {dealer}."
                ),
                Outcome::DealerWin => writeln!(
                    f,
                    "Player lost with a score of {player}. Dealer won with a score of {dealer}."
                ),
                Outcome::Tie => writeln!(f, "Player and Dealer tie."),
            },
            // Stop lines close the journal and carry no trailing newline.
            Self::Stopped { reason, wallet, bet } => match reason {
                Termination::DeckExhausted => f.write_str("Not enough cards for a game."),
                Termination::BetExhausted => {
                    write!(f, "Wallet amount ${wallet} is less than bet amount ${bet}.")
                }
                Termination::Completed => Ok(()),
            },
        }
    }
}

/// Append-only record of narrated events.
///
/// Keeps both the structured events and their rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    events: Vec<Narration>,
    text: String,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            text: String::new(),
        }
    }

    /// Appends an event.
    pub fn record(&mut self, event: Narration) {
        // Writing into a String cannot fail.
        let _ = write!(self.text, "{event}");
        self.events.push(event);
    }

    /// Returns the structured events in order.
    #[must_use]
    pub fn events(&self) -> &[Narration] {
        &self.events
    }

    /// Returns the rendered journal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        self.events.clear();
        self.text.clear();
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
