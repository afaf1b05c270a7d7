//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::narration::Journal;
use crate::options::TableOptions;

mod dealer;
mod round;
pub mod state;

pub use state::RoundPhase;

/// A single-player blackjack game against an automated dealer.
///
/// The game owns the deck, the wallet and bet, the narration journal and the
/// random source used for the pre-round shuffle counts.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left in the deck.
    deck: Deck,
    /// Table options.
    options: TableOptions,
    /// Player money.
    wallet: i64,
    /// Bet for the next round.
    bet: i64,
    /// Rounds resolved so far.
    rounds_played: u32,
    /// Current phase of the round controller.
    phase: RoundPhase,
    /// Narrated events.
    journal: Journal,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a fresh deck, the given wallet and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 10, 20);
    /// assert_eq!(game.wallet(), 10);
    /// assert_eq!(game.bet(), 5);
    /// assert_eq!(game.deck().len(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, wallet: i64, seed: u64) -> Self {
        Self::from_rng(options, wallet, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game drawing shuffle counts from `rng`.
    #[must_use]
    pub fn from_rng(options: TableOptions, wallet: i64, rng: ChaCha8Rng) -> Self {
        Self::with_deck(options, wallet, Deck::new(), rng)
    }

    /// Creates a game around an existing deck.
    #[must_use]
    pub fn with_deck(options: TableOptions, wallet: i64, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            deck,
            options,
            wallet,
            bet: options.base_bet,
            rounds_played: 0,
            phase: RoundPhase::Idle,
            journal: Journal::new(),
            rng,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the player's money.
    #[must_use]
    pub const fn wallet(&self) -> i64 {
        self.wallet
    }

    /// Returns the bet for the next round.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of rounds resolved over the life of the game.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the journal.
    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Returns the narrated text recorded since the last reset.
    #[must_use]
    pub fn log(&self) -> &str {
        self.journal.as_str()
    }

    /// Clears the journal.
    pub fn reset_log(&mut self) {
        self.journal.clear();
    }
}
