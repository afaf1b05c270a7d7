//! ASCII-art card rendering for game summaries.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::Card;

/// Draws a card as four lines of text, without a trailing newline.
///
/// Hidden cards show question marks in place of rank and suit.
///
/// ```
/// use bjsolo::{Card, ascii_card};
///
/// let mut card = Card::parse("A", "spades").unwrap();
/// assert_eq!(ascii_card(&card), "____\n|A  |\n| ♠ |\n|__A|");
///
/// card.set_visible(false);
/// assert_eq!(ascii_card(&card), "____\n|?  |\n| ? |\n|__?|");
/// ```
#[must_use]
pub fn ascii_card(card: &Card) -> String {
    if card.is_visible() {
        let rank = card.rank().label();
        let suit = card.suit().symbol();
        format!("____\n|{rank}  |\n| {suit} |\n|__{rank}|")
    } else {
        String::from("____\n|?  |\n| ? |\n|__?|")
    }
}

/// Draws every card of a hand, one card below the other.
#[must_use]
pub fn ascii_cards(cards: &[Card]) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&ascii_card(card));
    }
    out
}
