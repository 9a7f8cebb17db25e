use bjsolo::{Card, Hand, HandOwner, Phase, Round, RoundOptions, RoundOutcome, RoundResult, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            round: Round::new(RoundOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.round = Round::new(RoundOptions::default(), seed as u64);
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.round.place_bet(amount as usize).map_err(js_err)
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.round.deal().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.round.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.round.stand().map(|_| ()).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            phase: phase_to_str(self.round.phase),
            bet: self.round.bet as u32,
            cards_remaining: self.round.cards_remaining() as u32,
            player: JsHand::from_hand(&self.round.player),
            dealer: JsHand::from_hand(&self.round.dealer),
            result: self.round.result().map(JsRoundResult::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    bet: u32,
    cards_remaining: u32,
    player: JsHand,
    dealer: JsHand,
    result: Option<JsRoundResult>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    hidden: bool,
}

#[derive(Serialize)]
struct JsHand {
    owner: &'static str,
    cards: Vec<JsCard>,
    score: u8,
    is_soft: bool,
}

impl JsHand {
    fn from_hand(hand: &Hand) -> Self {
        Self {
            owner: owner_to_str(hand.owner()),
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            score: hand.score(),
            is_soft: hand.is_soft(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    bet: u32,
    payout: u32,
    net: i32,
    player_score: u8,
    dealer_score: u8,
    dealer_bust: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            payout: result.payout as u32,
            net: result.net as i32,
            player_score: result.player_score,
            dealer_score: result.dealer_score,
            dealer_bust: result.dealer_bust,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        hidden: card.is_hidden(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn owner_to_str(owner: HandOwner) -> &'static str {
    match owner {
        HandOwner::Player => "Player",
        HandOwner::Dealer => "Dealer",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "Win",
        RoundOutcome::Lose => "Lose",
        RoundOutcome::Push => "Push",
        RoundOutcome::Blackjack => "Blackjack",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
