//! CLI blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Action, Hand, RandomSource, Round, RoundStatus};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut source = RandomSource::new(seed);
    let mut round = Round::new();
    let mut chips: usize = 1000;

    loop {
        if chips == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{chips}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = round.apply(Action::PlaceBet(bet), &mut chips, &mut source) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = round.apply(Action::Deal, &mut chips, &mut source) {
            println!("Deal error: {err}");
            round.reset();
            continue;
        }

        while round.status() == RoundStatus::Playing {
            print_table(&round, chips);

            let result = match prompt_line("Action (h)it / (s)tand: ").as_str() {
                "h" | "hit" => round.apply(Action::Hit, &mut chips, &mut source),
                "s" | "stand" => round.apply(Action::Stand, &mut chips, &mut source),
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

        print_table(&round, chips);

        match round.status() {
            RoundStatus::PlayerBust => println!("You busted!"),
            RoundStatus::RoundEnd => {
                if let Some(result) = round.last_result() {
                    println!(
                        "Result: {:?} | player {} vs dealer {} | chips change {:+}",
                        result.result, result.player_score, result.dealer_score, result.chips_won
                    );
                }
            }
            _ => {}
        }

        round.reset();
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

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_table(round: &Round, chips: usize) {
    let dealer = round.dealer_score();
    let player = round.player_score();

    println!("\nChips: {chips}");
    println!(
        "Dealer: {} (value {})",
        format_hand(round.dealer()),
        dealer.value
    );
    println!(
        "You:    {} (value {}{})",
        format_hand(round.player()),
        player.value,
        if player.is_soft { ", soft" } else { "" }
    );
    println!();
}
