//! A single-player blackjack simulation with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays betting rounds against an
//! automated dealer: it re-shuffles the deck with the deterministic
//! [`modified_overhand`] and [`mongean`] shuffles, deals, draws to stand
//! thresholds, scores hands and settles the bet. Each round is narrated into
//! a [`Journal`] and reported to a [`RoundReporter`].
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 100, 42);
//! let summary = game.play_rounds(3, 15, ()).unwrap();
//! assert!(summary.rounds_played <= 3);
//! println!("{}", game.log());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod narration;
pub mod options;
pub mod render;
pub mod report;
pub mod result;
pub mod score;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, GameError, ScoreError};
pub use game::{Game, RoundPhase};
pub use hand::{Hand, Seat, Visibility};
pub use narration::{Journal, Narration};
pub use options::TableOptions;
pub use render::{ascii_card, ascii_cards};
#[cfg(feature = "std")]
pub use report::SummaryWriter;
pub use report::{GameNumbers, RoundReporter};
pub use result::{Outcome, PlaySummary, RoundRecord, Termination};
pub use score::{BLACKJACK, card_value, determine, score};
pub use shuffle::{Shuffle, modified_overhand, mongean};
