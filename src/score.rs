//! Blackjack score calculation.
//!
//! The calculator only ever sees the face of a card: a face-down card
//! contributes nothing to the total, not even an Ace to demote. The
//! dealer's true total becomes available once the hole card is revealed.

use crate::card::Card;

/// Blackjack value of a rank: Aces start at 11, face cards count 10.
pub(crate) const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Sums the visible cards and reports whether the total is soft.
///
/// A total is soft while at least one visible Ace is still counted as 11.
pub(crate) fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_hidden() {
            continue;
        }
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Calculates the blackjack score of a sequence of cards.
///
/// Face-down cards are excluded from the sum entirely. Aces count as 11
/// unless that would push the total over 21, in which case they are
/// demoted to 1 one at a time until the total fits or no Aces remain.
/// An empty (or fully face-down) sequence scores 0.
///
/// # Example
///
/// ```
/// use bjsolo::{Card, Suit, score};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Clubs, 13)];
/// assert_eq!(score(&cards), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate(cards).0
}
