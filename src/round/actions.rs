use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{Phase, Round};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card. Going bust resolves the round at once:
    /// the dealer reveals the hole card without drawing further and the
    /// round settles as a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.finish(false)?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Reveals the dealer's hole card before any final score is
    /// computed, plays out the dealer's hand, and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs
    /// out while the dealer must draw.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let result = self.finish(true)?;
        Ok(result)
    }
}
