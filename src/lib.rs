//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that manages one bet-to-resolution
//! cycle: betting, dealing with a face-down dealer hole card, the player
//! turn, dealer play, and settlement. Scores are computed over visible
//! cards only, so the hole card counts for nothing until it is revealed.
//!
//! # Example
//!
//! ```no_run
//! use bjsolo::{Round, RoundOptions};
//!
//! let options = RoundOptions::default();
//! let round = Round::new(options, 42);
//! let _ = round;
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
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, EmptyDeckError};
pub use hand::{Hand, HandOwner};
pub use options::{RoundOptions, RoundingMode};
pub use result::{RoundOutcome, RoundResult};
pub use round::{Phase, Round};
pub use score::score;
