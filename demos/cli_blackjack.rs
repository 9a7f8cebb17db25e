//! CLI blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, Hand, Phase, Round, RoundOptions, RoundOutcome, Suit};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default();
    let mut round = Round::new(options, seed);

    loop {
        let Some(bet) = prompt_usize("Bet amount (0 to quit): ") else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = round.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = round.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while round.phase == Phase::PlayerTurn {
            print_table(&round);

            let action = prompt_line("Action (h)it / (s)tand: ");
            let result = match action.as_str() {
                "h" | "hit" => round.hit().map(|_| ()),
                "s" | "stand" => round.stand().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if round.phase == Phase::Resolved {
            print_table(&round);

            if let Some(result) = round.result() {
                let verdict = match result.outcome {
                    RoundOutcome::Win => "You win.",
                    RoundOutcome::Lose => "You lose.",
                    RoundOutcome::Push => "Push.",
                    RoundOutcome::Blackjack => "Blackjack!",
                };
                println!("{verdict} Payout: {} (net {})", result.payout, result.net);
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round) {
    println!(
        "\nDealer: {} (showing {})",
        format_hand(&round.dealer),
        round.dealer_score()
    );
    println!(
        "Player: {} (value {})",
        format_hand(&round.player),
        round.player_score()
    );
    println!();
}

fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    cards.join(" ")
}

fn format_card(card: &Card) -> String {
    if card.is_hidden() {
        return "[??]".to_string();
    }

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    format!("[{rank}{suit}]")
}
