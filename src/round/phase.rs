//! Round phase types.

/// Phase of the round state machine.
///
/// Phases advance `Betting -> Dealing -> PlayerTurn -> DealerTurn ->
/// Resolved`; `Resolved` is terminal until the next bet restarts the
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting a bet for the next round.
    Betting,
    /// Bet accepted, initial cards not yet dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be read.
    Resolved,
}
