//! Round integration tests.

#![allow(clippy::float_cmp)]

use bjsolo::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Deck, Hand, HandOwner, Phase, Round,
    RoundOptions, RoundOutcome, RoundingMode, Suit, score,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(round: &mut Round, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    round.deck = Deck::from_cards(deck);
}

#[test]
fn score_sums_ranks_without_aces() {
    let cards = [
        card(Suit::Spades, 2),
        card(Suit::Clubs, 11),
        card(Suit::Hearts, 8),
    ];
    assert_eq!(score(&cards), 20);
}

#[test]
fn score_counts_single_ace_high() {
    let cards = [card(Suit::Spades, 1), card(Suit::Clubs, 13)];
    assert_eq!(score(&cards), 21);
}

#[test]
fn score_demotes_extra_aces() {
    let cards = [
        card(Suit::Spades, 1),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 1),
    ];
    assert_eq!(score(&cards), 15);
}

#[test]
fn score_excludes_face_down_cards() {
    let cards = [card(Suit::Spades, 10).face_down(), card(Suit::Clubs, 1)];
    assert_eq!(score(&cards), 11);
}

#[test]
fn score_of_nothing_is_zero() {
    assert_eq!(score(&[]), 0);
}

#[test]
fn reveal_hole_card_round_trip_and_idempotence() {
    let mut hand = Hand::new(HandOwner::Dealer);
    hand.add_card(card(Suit::Spades, 13).face_down());
    hand.add_card(card(Suit::Hearts, 1));

    assert_eq!(hand.score(), 11);
    assert!(hand.cards()[0].is_hidden());

    hand.reveal_hole_card();
    assert_eq!(hand.score(), 21);
    assert!(hand.is_natural());

    hand.reveal_hole_card();
    assert_eq!(hand.score(), 21);
    assert!(!hand.cards()[0].is_hidden());
}

#[test]
fn options_builder_sets_fields() {
    let options = RoundOptions::default()
        .with_blackjack_pays(1.2)
        .with_stand_on_soft_17(false)
        .with_rounding_blackjack(RoundingMode::Up);

    assert_eq!(options.blackjack_pays, 1.2);
    assert!(!options.stand_on_soft_17);
    assert_eq!(options.rounding_blackjack, RoundingMode::Up);
}

#[test]
fn bet_errors() {
    let mut round = Round::new(RoundOptions::default(), 1);

    assert_eq!(round.place_bet(0).unwrap_err(), BetError::ZeroBet);

    round.place_bet(10).unwrap();
    assert_eq!(round.place_bet(10).unwrap_err(), BetError::InvalidState);

    round.deal().unwrap();
    if round.phase == Phase::PlayerTurn {
        assert_eq!(round.place_bet(10).unwrap_err(), BetError::InvalidState);
    }
}

#[test]
fn deal_errors() {
    let mut round = Round::new(RoundOptions::default(), 1);

    assert_eq!(round.deal().unwrap_err(), DealError::InvalidState);

    round.place_bet(5).unwrap();
    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );

    assert_eq!(round.deal().unwrap_err(), DealError::EmptyDeck);
    assert_eq!(round.phase, Phase::Dealing);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut round = Round::new(RoundOptions::default(), 1);

    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn deal_order_and_hole_card() {
    let mut round = Round::new(RoundOptions::default(), 42);
    round.place_bet(30).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 9),   // dealer hole
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // player
        ],
    );

    round.deal().unwrap();
    assert_eq!(round.phase, Phase::PlayerTurn);

    assert_eq!(round.dealer.len(), 2);
    assert_eq!(round.player.len(), 2);
    assert!(round.deck.is_empty());

    let hole = round.dealer.cards()[0];
    assert!(hole.is_hidden());
    assert_eq!(hole.rank, 9);
    assert!(!round.dealer.cards()[1].is_hidden());

    assert_eq!(round.player.cards()[0].rank, 7);
    assert_eq!(round.player.cards()[1].rank, 10);

    // Only the up card counts until the hole card is revealed.
    assert_eq!(round.dealer_score(), 5);
    assert_eq!(round.player_score(), 17);
    assert!(round.dealer_score() > 0 && round.player_score() > 0);
}

#[test]
fn deal_from_fresh_deck_draws_four() {
    let mut round = Round::new(RoundOptions::default(), 7);
    round.place_bet(10).unwrap();
    assert_eq!(round.cards_remaining(), DECK_SIZE);

    round.deal().unwrap();
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);
    assert!(round.dealer.cards()[0].is_hidden());
    assert!(!round.player.is_empty());
}

#[test]
fn hit_busts_and_resolves_as_loss() {
    let mut round = Round::new(RoundOptions::default(), 3);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10),  // dealer hole
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 10), // player
            card(Suit::Spades, 6),   // player
            card(Suit::Hearts, 9),   // player hit -> 25
        ],
    );

    round.deal().unwrap();
    let hit_card = round.hit().unwrap();
    assert_eq!(hit_card.rank, 9);

    assert_eq!(round.phase, Phase::Resolved);
    assert!(!round.dealer.cards()[0].is_hidden());
    assert_eq!(round.dealer.len(), 2);

    let result = round.result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Lose);
    assert_eq!(result.payout, 0);
    assert_eq!(result.net, -10);
    assert_eq!(result.player_score, 25);
}

#[test]
fn stand_plays_dealer_and_settles_win() {
    let mut round = Round::new(RoundOptions::default(), 4);
    round.place_bet(20).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10), // dealer hole
            card(Suit::Clubs, 6),   // dealer up
            card(Suit::Diamonds, 10), // player
            card(Suit::Spades, 9),  // player -> 19
            card(Suit::Hearts, 2),  // dealer draw -> 18
        ],
    );

    round.deal().unwrap();
    let result = round.stand().unwrap();

    assert_eq!(round.phase, Phase::Resolved);
    assert_eq!(round.dealer.len(), 3);
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.player_score, 19);
    assert_eq!(result.dealer_score, 18);
    assert_eq!(result.payout, 40);
    assert_eq!(result.net, 20);
}

#[test]
fn stand_settles_push_on_equal_scores() {
    let mut round = Round::new(RoundOptions::default(), 5);
    round.place_bet(15).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10), // dealer hole
            card(Suit::Clubs, 7),   // dealer up -> 17, stands
            card(Suit::Diamonds, 10), // player
            card(Suit::Spades, 7),  // player -> 17
        ],
    );

    round.deal().unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, RoundOutcome::Push);
    assert_eq!(result.payout, 15);
    assert_eq!(result.net, 0);
}

#[test]
fn dealer_bust_pays_the_player() {
    let mut round = Round::new(RoundOptions::default(), 6);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10), // dealer hole
            card(Suit::Clubs, 6),   // dealer up -> 16, must draw
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 9),  // player -> 18
            card(Suit::Hearts, 10), // dealer draw -> 26, bust
        ],
    );

    round.deal().unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, RoundOutcome::Win);
    assert!(result.dealer_bust);
    assert_eq!(result.payout, 20);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let options = RoundOptions::default().with_stand_on_soft_17(false);
    let mut round = Round::new(options, 8);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 6),  // dealer hole
            card(Suit::Clubs, 1),   // dealer up -> soft 17 after reveal
            card(Suit::Diamonds, 10), // player
            card(Suit::Spades, 8),  // player -> 18
            card(Suit::Hearts, 10), // dealer draw -> hard 17
        ],
    );

    round.deal().unwrap();
    let result = round.stand().unwrap();

    assert_eq!(round.dealer.len(), 3);
    assert_eq!(result.dealer_score, 17);
    assert_eq!(result.outcome, RoundOutcome::Win);
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    let mut round = Round::new(RoundOptions::default(), 9);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 6),  // dealer hole
            card(Suit::Clubs, 1),   // dealer up -> soft 17 after reveal
            card(Suit::Diamonds, 10), // player
            card(Suit::Spades, 8),  // player -> 18
        ],
    );

    round.deal().unwrap();
    let result = round.stand().unwrap();

    assert_eq!(round.dealer.len(), 2);
    assert_eq!(result.dealer_score, 17);
    assert_eq!(result.outcome, RoundOutcome::Win);
}

#[test]
fn natural_blackjack_resolves_on_the_deal() {
    let mut round = Round::new(RoundOptions::default(), 10);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 9),  // dealer hole
            card(Suit::Clubs, 9),   // dealer up
            card(Suit::Diamonds, 1), // player
            card(Suit::Spades, 13), // player -> natural 21
        ],
    );

    round.deal().unwrap();

    assert_eq!(round.phase, Phase::Resolved);
    assert!(!round.dealer.cards()[0].is_hidden());
    assert_eq!(round.dealer.len(), 2);

    let result = round.result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Blackjack);
    assert_eq!(result.payout, 25);
    assert_eq!(result.net, 15);
}

#[test]
fn natural_against_dealer_natural_is_a_push() {
    let mut round = Round::new(RoundOptions::default(), 11);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 13), // dealer hole
            card(Suit::Clubs, 1),   // dealer up -> natural after reveal
            card(Suit::Diamonds, 1), // player
            card(Suit::Spades, 12), // player -> natural 21
        ],
    );

    round.deal().unwrap();

    let result = round.result().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Push);
    assert_eq!(result.payout, 10);
    assert_eq!(result.net, 0);
}

#[test]
fn dealer_natural_beats_a_standing_player() {
    let mut round = Round::new(RoundOptions::default(), 12);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 13), // dealer hole
            card(Suit::Clubs, 1),   // dealer up
            card(Suit::Diamonds, 10), // player
            card(Suit::Spades, 9),  // player -> 19
        ],
    );

    round.deal().unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, RoundOutcome::Lose);
    assert_eq!(result.dealer_score, 21);
    assert_eq!(result.payout, 0);
}

#[test]
fn new_bet_restarts_a_resolved_round() {
    let mut round = Round::new(RoundOptions::default(), 13);
    round.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 10),
            card(Suit::Spades, 7),
        ],
    );

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.phase, Phase::Resolved);

    round.place_bet(25).unwrap();
    assert_eq!(round.phase, Phase::Dealing);
    assert_eq!(round.bet, 25);
    assert_eq!(round.cards_remaining(), DECK_SIZE);
    assert!(round.player.is_empty());
    assert!(round.dealer.is_empty());
    assert!(round.result().is_none());

    round.deal().unwrap();
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);
}
