use alloc::string::ToString;

use rand::Rng;

use crate::error::GameError;
use crate::hand::Hand;
use crate::narration::Narration;
use crate::report::RoundReporter;
use crate::result::{PlaySummary, RoundRecord, Termination};
use crate::shuffle::Shuffle;

use super::{Game, RoundPhase};

/// Cards dealt before anyone draws: two each to player and dealer.
const OPENING_CARDS: usize = 4;

impl Game {
    /// Plays up to `rounds` rounds, the player standing once their score
    /// reaches `stand_threshold`.
    ///
    /// Before each round the game checks that the deck still holds
    /// [`min_cards`](crate::TableOptions::min_cards) (at least the four opening
    /// cards) and that the wallet covers the bet. If either check fails, play
    /// stops, the reason is narrated and the bet resets to the base bet. Every resolved round is passed to
    /// `reporter`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, RoundRecord, TableOptions, Termination};
    ///
    /// let mut game = Game::new(TableOptions::default(), 10, 7);
    /// let mut records: Vec<RoundRecord> = Vec::new();
    /// let summary = game.play_rounds(1, 15, &mut records).unwrap();
    ///
    /// assert_eq!(summary.termination, Termination::Completed);
    /// assert_eq!(records.len(), 1);
    /// assert!([5, 10, 15].contains(&game.wallet()));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error only if an engine invariant breaks: a deal from an
    /// empty deck or a hand with more than four aces.
    pub fn play_rounds<R: RoundReporter>(
        &mut self,
        rounds: u32,
        stand_threshold: u16,
        mut reporter: R,
    ) -> Result<PlaySummary, GameError> {
        let mut played = 0;
        let mut termination = Termination::Completed;

        for _ in 0..rounds {
            if let Some(reason) = self.exhaustion() {
                log::warn!(
                    "stopping after {played} rounds: {reason:?} (wallet {}, bet {}, {} cards left)",
                    self.wallet,
                    self.bet,
                    self.deck.len()
                );
                self.journal.record(Narration::Stopped {
                    reason,
                    wallet: self.wallet,
                    bet: self.bet,
                });
                self.bet = self.options.base_bet;
                termination = reason;
                break;
            }

            let record = self.play_round(stand_threshold)?;
            reporter.record(&record);
            played += 1;
        }

        Ok(PlaySummary {
            rounds_played: played,
            termination,
            wallet: self.wallet,
            bet: self.bet,
            cards_remaining: self.deck.len(),
        })
    }

    /// Returns why the next round cannot start, if it cannot.
    fn exhaustion(&self) -> Option<Termination> {
        if self.deck.len() < self.options.min_cards.max(OPENING_CARDS) {
            Some(Termination::DeckExhausted)
        } else if self.wallet < self.bet {
            Some(Termination::BetExhausted)
        } else {
            None
        }
    }

    /// Runs one round through every phase and returns its record.
    fn play_round(&mut self, stand_threshold: u16) -> Result<RoundRecord, GameError> {
        let round = self.rounds_played + 1;

        self.phase = RoundPhase::Dealing;
        log::info!(
            "round {round}: wallet {}, bet {}, {} cards left",
            self.wallet,
            self.bet,
            self.deck.len()
        );
        self.journal.record(Narration::RoundStart {
            round,
            wallet: self.wallet,
            bet: self.bet,
        });

        self.shuffle_deck();

        let mut player = Hand::player();
        let mut dealer = Hand::dealer();
        for _ in 0..2 {
            self.deck.deal_one(&mut player)?;
            self.deck.deal_one(&mut dealer)?;
        }
        self.journal.record(Narration::Dealt {
            player: player.to_string(),
            dealer: dealer.to_string(),
        });

        self.phase = RoundPhase::PlayerTurn;
        self.hit_or_stand(&mut player, stand_threshold)?;

        self.phase = RoundPhase::DealerReveal;
        dealer.reveal();
        self.journal.record(Narration::Reveal {
            dealer: dealer.to_string(),
        });

        self.phase = RoundPhase::DealerTurn;
        self.hit_or_stand(&mut dealer, self.options.dealer_stand_threshold)?;

        self.phase = RoundPhase::Resolve;
        let player_score = player.score()?;
        let dealer_score = dealer.score()?;
        let outcome = self.determine_winner(player_score, dealer_score);
        self.settle(outcome);
        self.rounds_played = round;
        log::info!("round {round}: {outcome:?} ({player_score} vs {dealer_score})");

        self.phase = RoundPhase::Idle;

        Ok(RoundRecord {
            round,
            player_hand: player.cards().to_vec(),
            dealer_hand: dealer.cards().to_vec(),
            player_score,
            dealer_score,
            outcome,
            wallet: self.wallet,
            bet: self.bet,
        })
    }

    /// Re-shuffles the deck with random counts of each shuffle.
    fn shuffle_deck(&mut self) {
        let max = self.options.max_shuffle_count;
        let mongean = self.rng.random_range(0..=max);
        let overhand = self.rng.random_range(0..=max);
        self.deck.shuffle(&[
            (Shuffle::ModifiedOverhand, overhand),
            (Shuffle::Mongean, mongean),
        ]);
    }
}
