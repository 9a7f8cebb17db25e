//! The round controller state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::{Hand, HandOwner};
use crate::options::RoundOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod phase;

pub use phase::Phase;

/// A single-seat blackjack round controller.
///
/// The round exclusively owns the deck and both hands and advances
/// through [`Phase`]s in response to synchronous calls. The presentation
/// layer reads the hands, scores and phase after every mutating call and
/// renders from what it finds; it takes no part in the game logic.
///
/// # Example
///
/// ```no_run
/// use bjsolo::{Round, RoundOptions};
///
/// let options = RoundOptions::default();
/// let round = Round::new(options, 42);
/// let _ = round;
/// ```
#[derive(Debug)]
pub struct Round {
    /// Round options.
    pub options: RoundOptions,
    /// Current phase.
    pub phase: Phase,
    /// The bet for the current round.
    pub bet: usize,
    /// The deck the round draws from.
    pub deck: Deck,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Settlement of the last resolved round.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new round in the betting phase with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjsolo::{Round, RoundOptions};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// let _ = round;
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self {
            options,
            phase: Phase::Betting,
            bet: 0,
            deck,
            player: Hand::new(HandOwner::Player),
            dealer: Hand::new(HandOwner::Dealer),
            result: None,
            rng,
        }
    }

    /// Returns the player's current score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the dealer's current score over visible cards only.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Returns the settlement of the round once it is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
