use crate::error::EmptyDeckError;
use crate::options::RoundingMode;
use crate::result::{RoundOutcome, RoundResult};
use crate::score::evaluate;

use super::{Phase, Round};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Round {
    /// Plays out the dealer's turn and settles the round.
    ///
    /// The hole card is revealed first, so every score computed from
    /// here on is a true total. The dealer only draws when the player is
    /// still standing on a live hand: a player bust or natural ends the
    /// hand without further cards.
    pub(super) fn finish(&mut self, dealer_draws: bool) -> Result<RoundResult, EmptyDeckError> {
        self.phase = Phase::DealerTurn;
        self.dealer.reveal_hole_card();

        if dealer_draws {
            // Draw until 17 or higher (considering the soft 17 rule).
            loop {
                let (value, is_soft) = evaluate(self.dealer.cards());

                if value > 17 {
                    break;
                }
                if value == 17 && (!is_soft || self.options.stand_on_soft_17) {
                    break;
                }

                let card = self.deck.draw()?;
                self.dealer.add_card(card);
            }
        }

        let result = self.settle();
        self.result = Some(result);
        self.phase = Phase::Resolved;

        Ok(result)
    }

    /// Compares the two hands and computes the payout.
    fn settle(&self) -> RoundResult {
        let bet = self.bet;
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let dealer_bust = self.dealer.is_bust();
        let player_natural = self.player.is_natural();
        let dealer_natural = self.dealer.is_natural();

        let (outcome, payout) = if self.player.is_bust() {
            // Player busted, loses the bet regardless of the dealer.
            (RoundOutcome::Lose, 0)
        } else if player_natural {
            if dealer_natural {
                // Push - return the original bet
                (RoundOutcome::Push, bet)
            } else {
                // Blackjack pays extra
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (bet as f64) * self.options.blackjack_pays;
                let rounded = round_amount(winnings, self.options.rounding_blackjack);
                (RoundOutcome::Blackjack, bet + rounded)
            }
        } else if dealer_natural {
            (RoundOutcome::Lose, 0)
        } else if dealer_bust {
            (RoundOutcome::Win, bet * 2)
        } else if player_score > dealer_score {
            (RoundOutcome::Win, bet * 2)
        } else if player_score < dealer_score {
            (RoundOutcome::Lose, 0)
        } else {
            (RoundOutcome::Push, bet)
        };

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = payout as isize - bet as isize;

        RoundResult {
            outcome,
            bet,
            payout,
            net,
            player_score,
            dealer_score,
            dealer_bust,
        }
    }
}
