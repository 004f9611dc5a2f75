//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjcore=debug` to watch the engine's events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{Card, Evaluation, Game, GameOptions, GameState, RoundResult, Totals};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let account = game.account();
        if account <= 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_amount(&format!(
            "Bet amount (account {account}, enter for {}, 0 to quit): ",
            game.bet()
        )) else {
            break;
        };

        if bet == Some(0) {
            println!("Goodbye.");
            break;
        }
        if let Some(bet) = bet {
            game.set_bet(bet);
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }

        while game.state() == GameState::InProgress {
            print_table(&game);

            if game.player_evaluation() == Evaluation::Blackjack {
                println!("Blackjack!");
            }

            let result = match prompt_line("Action: [h]it [s]tand: ").as_str() {
                "h" | "hit" => game.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => game.stand().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                return;
            }
        }

        print_table(&game);
        if let Some(result) = game.last_result() {
            print_result(result);
        }
        println!("Account: {}\n", game.account());
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

/// `None` quits, `Some(None)` keeps the current bet.
fn prompt_amount(prompt: &str) -> Option<Option<i64>> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(None);
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(Some(value)),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let dealer = game.dealer_cards();
    let dealer_value = if dealer.iter().all(Card::is_face_up) {
        format_totals(&game.dealer_totals())
    } else {
        "?".to_string()
    };
    println!("\nDealer: {} (value {dealer_value})", format_hand(&dealer));

    println!(
        "You:    {} (value {}) | bet {}",
        format_hand(&game.player_cards()),
        format_totals(&game.player_totals()),
        game.bet()
    );
    println!();
}

fn print_result(result: &RoundResult) {
    let outcome = match result.state {
        GameState::PlayerWon => "You win",
        GameState::DealerWon => "Dealer wins",
        GameState::Draw => "Push",
        GameState::NotStarted | GameState::InProgress => return,
    };
    if !result.dealer_drawn.is_empty() {
        println!("Dealer draws {} card(s).", result.dealer_drawn.len());
    }
    println!("{outcome}. Payout: {} (net {})", result.payout, result.net());
}

fn format_totals(totals: &Totals) -> String {
    match totals {
        Totals::Bust => "bust".to_string(),
        Totals::Values(values) => values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/"),
    }
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
