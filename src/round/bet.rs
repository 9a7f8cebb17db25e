use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::{Hand, HandOwner};

use super::{Phase, Round};

/// Cards drawn by the initial deal: two to the dealer, two to the player.
const INITIAL_DEAL_CARDS: usize = 4;

impl Round {
    /// Places the bet for this round.
    ///
    /// Valid in the betting phase or after a round has resolved, in
    /// which case the prior round's table state is discarded wholesale.
    /// On success the round holds a fresh shuffled 52-card deck and two
    /// empty hands, ready for [`Round::deal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or a round is in progress.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if !matches!(self.phase, Phase::Betting | Phase::Resolved) {
            return Err(BetError::InvalidState);
        }

        self.bet = amount;
        self.deck = Deck::standard();
        self.deck.shuffle(&mut self.rng);
        self.player = Hand::new(HandOwner::Player);
        self.dealer = Hand::new(HandOwner::Dealer);
        self.result = None;
        self.phase = Phase::Dealing;

        Ok(())
    }

    /// Deals the initial cards.
    ///
    /// The order is fixed: dealer (face down), dealer, player, player.
    /// The round then moves to the player's turn, unless the player
    /// holds a natural 21, which resolves the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or fewer than four
    /// cards remain in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_DEAL_CARDS {
            return Err(DealError::EmptyDeck);
        }

        let hole = self.deck.draw()?;
        self.dealer.add_card(hole.face_down());

        let up_card = self.deck.draw()?;
        self.dealer.add_card(up_card);

        let first = self.deck.draw()?;
        self.player.add_card(first);

        let second = self.deck.draw()?;
        self.player.add_card(second);

        self.phase = Phase::PlayerTurn;

        // A natural 21 leaves the player no decision to make.
        if self.player.is_natural() {
            self.finish(false)?;
        }

        Ok(())
    }
}
