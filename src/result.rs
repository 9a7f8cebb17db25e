//! Round settlement types.

/// Outcome of the player's hand after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts or dealer has the higher score).
    Lose,
    /// Push (tie).
    Push,
    /// Player has a natural blackjack.
    Blackjack,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet amount.
    pub bet: usize,
    /// The total amount returned to the player, stake included.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score, hole card revealed.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
