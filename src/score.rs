//! Hand scoring and winner determination.

use crate::card::{Card, Rank};
use crate::error::ScoreError;
use crate::result::Outcome;

/// Highest score that does not bust.
pub const BLACKJACK: u16 = 21;

/// Most aces a single-deck hand can hold.
pub const MAX_ACES: usize = 4;

/// Returns the fixed value of a non-ace rank.
///
/// Numerals count their face value and J, Q, K count 10. Aces have no fixed
/// value and return `None`.
#[must_use]
pub const fn card_value(rank: Rank) -> Option<u16> {
    match rank {
        Rank::Ace => None,
        Rank::Jack | Rank::Queen | Rank::King => Some(10),
        numeral => Some(numeral.ordinal() as u16),
    }
}

/// Computes the best blackjack total for a set of cards.
///
/// Every ace counts as 1 or 11. All `2^k` valuations of the `k` aces are
/// tried: the highest total not above 21 wins, and if every total busts the
/// smallest one is taken. Visibility is ignored.
///
/// ```
/// use bjsolo::{Card, score};
///
/// let ace = Card::parse("A", "diamonds").unwrap();
/// let jack = Card::parse("J", "spades").unwrap();
/// let other_ace = Card::parse("A", "spades").unwrap();
///
/// assert_eq!(score(&[]).unwrap(), 0);
/// assert_eq!(score(&[ace, jack]).unwrap(), 21);
/// assert_eq!(score(&[ace, other_ace]).unwrap(), 12);
/// assert_eq!(score(&[ace, other_ace, jack]).unwrap(), 12);
/// ```
///
/// # Errors
///
/// Returns [`ScoreError::TooManyAces`] when more than four aces are present,
/// which a single deck can never produce.
pub fn score(cards: &[Card]) -> Result<u16, ScoreError> {
    let aces = cards.iter().filter(|c| c.rank() == Rank::Ace).count();
    if aces > MAX_ACES {
        return Err(ScoreError::TooManyAces(aces));
    }

    let base = cards
        .iter()
        .filter_map(|c| card_value(c.rank()))
        .fold(0u16, u16::saturating_add);

    let mut best_under: Option<u16> = None;
    let mut best_over: Option<u16> = None;

    // Bit i set means ace i counts as 11.
    for mask in 0u32..(1 << aces) {
        let high = mask.count_ones() as u16;
        let total = base.saturating_add(aces as u16 + high * 10);

        if total <= BLACKJACK {
            if best_under.is_none_or(|best| total > best) {
                best_under = Some(total);
            }
        } else if best_over.is_none_or(|best| total < best) {
            best_over = Some(total);
        }
    }

    Ok(best_under.or(best_over).unwrap_or(0))
}

/// Decides the round from both final scores.
///
/// Two non-bust hands are compared by distance to 21, a lone bust loses and
/// a double bust ties. Exactly 21 is checked on its own: it beats any other
/// total and ties only with another 21.
///
/// ```
/// use bjsolo::{Outcome, determine};
///
/// assert_eq!(determine(10, 12), Outcome::DealerWin);
/// assert_eq!(determine(21, 21), Outcome::Tie);
/// assert_eq!(determine(22, 23), Outcome::Tie);
/// assert_eq!(determine(12, 2), Outcome::PlayerWin);
/// assert_eq!(determine(22, 2), Outcome::DealerWin);
/// assert_eq!(determine(2, 22), Outcome::PlayerWin);
/// assert_eq!(determine(21, 25), Outcome::PlayerWin);
/// assert_eq!(determine(20, 21), Outcome::DealerWin);
/// ```
#[must_use]
pub const fn determine(player: u16, dealer: u16) -> Outcome {
    match (player, dealer) {
        (BLACKJACK, BLACKJACK) => Outcome::Tie,
        (BLACKJACK, _) => Outcome::PlayerWin,
        (_, BLACKJACK) => Outcome::DealerWin,
        (p, d) if p > BLACKJACK && d > BLACKJACK => Outcome::Tie,
        (p, _) if p > BLACKJACK => Outcome::DealerWin,
        (_, d) if d > BLACKJACK => Outcome::PlayerWin,
        // Both under 21: the higher total is closer.
        (p, d) if p > d => Outcome::PlayerWin,
        (p, d) if p < d => Outcome::DealerWin,
        _ => Outcome::Tie,
    }
}
