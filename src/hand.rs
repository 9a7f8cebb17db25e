//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::{evaluate, score};

/// Which seat a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOwner {
    /// The player's hand.
    Player,
    /// The dealer's hand.
    Dealer,
}

/// An ordered hand of cards for one seat.
///
/// The score is derived from the current cards on every call, never
/// stored; face-down cards contribute nothing until revealed.
#[derive(Debug, Clone)]
pub struct Hand {
    /// The seat this hand belongs to.
    owner: HandOwner,
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand for the given seat.
    #[must_use]
    pub const fn new(owner: HandOwner) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Returns the seat this hand belongs to.
    #[must_use]
    pub const fn owner(&self) -> HandOwner {
        self.owner
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Turns the first card face up if it is currently face down.
    ///
    /// No-op on an empty hand or when the card is already visible, so
    /// calling this twice has the same effect as calling it once.
    pub fn reveal_hole_card(&mut self) {
        if let Some(hole) = self.cards.first_mut() {
            hole.reveal();
        }
    }

    /// Returns all cards for display, face-down flag intact.
    ///
    /// The presentation layer is responsible for rendering face-down
    /// cards with their back showing.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand over its visible cards.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (a visible Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is a natural blackjack: exactly two
    /// cards totalling 21. Only meaningful once every card is face up.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
