use alloc::string::ToString;

use crate::error::GameError;
use crate::hand::Hand;
use crate::narration::Narration;
use crate::result::Outcome;
use crate::score::determine;

use super::Game;

impl Game {
    /// Deals to `hand` until its score reaches `stand_threshold` or the deck
    /// runs out, narrating every card drawn.
    ///
    /// Returns the number of cards drawn.
    pub(super) fn hit_or_stand(
        &mut self,
        hand: &mut Hand,
        stand_threshold: u16,
    ) -> Result<usize, GameError> {
        let mut drawn = 0;

        while hand.score()? < stand_threshold && !self.deck.is_empty() {
            let card = self.deck.deal_one(hand)?;
            log::debug!("{} drew {card}", hand.seat().name());
            self.journal.record(Narration::Draw {
                seat: hand.seat(),
                card: card.to_string(),
            });
            drawn += 1;
        }

        Ok(drawn)
    }

    /// Decides the round from both scores and narrates the decision.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, Outcome, TableOptions};
    ///
    /// let mut game = Game::new(TableOptions::default(), 10, 1);
    /// assert_eq!(game.determine_winner(10, 12), Outcome::DealerWin);
    /// assert_eq!(game.determine_winner(21, 21), Outcome::Tie);
    /// assert_eq!(
    ///     game.log(),
    ///     "Player lost with a score of 10. Dealer won with a score of 12.\n\
    ///      Player and Dealer tie.\n"
    /// );
    /// ```
    pub fn determine_winner(&mut self, player_score: u16, dealer_score: u16) -> Outcome {
        let outcome = determine(player_score, dealer_score);
        self.journal.record(Narration::Resolution {
            player: player_score,
            dealer: dealer_score,
            outcome,
        });
        outcome
    }

    /// Pays out or collects the bet and moves the bet for the next round.
    ///
    /// The bet is not clamped; repeated losses can take it to zero or below.
    pub(super) const fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => {
                self.wallet += self.bet;
                self.bet += self.options.bet_increment;
            }
            Outcome::DealerWin => {
                self.wallet -= self.bet;
                self.bet -= self.options.bet_increment;
            }
            Outcome::Tie => {}
        }
    }
}
