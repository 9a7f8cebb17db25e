//! Error types for round operations.
//!
//! Every error here is recoverable: the caller gets a typed value to
//! surface to the user and the round state is left as it was.

use thiserror::Error;

/// The deck has no cards left to draw.
///
/// Structurally unreachable in normal play, since every round deals from
/// a fresh 52-card deck and draws only a handful of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round phase for betting.
    #[error("invalid round phase for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur when dealing the initial cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeckError> for DealError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeckError> for ActionError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}
