//! CLI Truco example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use truco::{Card, Hand, Match, MatchOptions, MatchWinner, RoundOutcome, Suit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Truco Mineiro CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Match::new(MatchOptions::default(), seed);

    loop {
        if let Err(err) = game.start_match() {
            println!("Deal error: {err}");
            return;
        }

        while !game.is_match_complete() {
            print_hand(game.player_hand(), game.computer_cards_remaining());

            let prompt = format!("Play card (1-{}): ", game.player_hand().capacity());
            let Some(index) = prompt_index(&prompt) else {
                println!("Goodbye.");
                return;
            };

            match game.play_round(index) {
                Ok(round) => {
                    println!(
                        "\nYou played {}, computer played {}.",
                        format_card(&round.player_card),
                        format_card(&round.computer_card)
                    );
                    let message = match round.outcome {
                        RoundOutcome::PlayerWins => "You win this round!",
                        RoundOutcome::ComputerWins => "The computer wins this round.",
                        RoundOutcome::Tie => "Tie.",
                    };
                    println!(
                        "{message} (you {} x {} computer)",
                        round.scores.player, round.scores.computer
                    );
                }
                Err(err) => println!("Play error: {err}"),
            }
        }

        match game.match_result() {
            Ok(result) => {
                println!("\nFinal score:");
                println!("You: {} point(s)", result.scores.player);
                println!("Computer: {} point(s)", result.scores.computer);
                let message = match result.winner {
                    MatchWinner::Player => "You won the match!",
                    MatchWinner::Computer => "The computer won the match!",
                    MatchWinner::Draw => "The match ended in a draw!",
                };
                println!("{message}");
            }
            Err(err) => println!("Result error: {err}"),
        }

        match prompt_line("\nNew match? (y/n): ").as_str() {
            "y" | "yes" | "" => game.reset(),
            _ => {
                println!("Goodbye.");
                return;
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

fn prompt_index(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) if value >= 1 => return Some(value - 1),
            _ => println!("Please enter a card number."),
        }
    }
}

fn print_hand(hand: &Hand, computer_cards: usize) {
    println!("\nComputer: {}", vec!["??"; computer_cards].join(" "));

    let slots = (0..hand.capacity())
        .map(|index| {
            hand.get(index).map_or_else(
                || format!("[{}] --", index + 1),
                |card| format!("[{}] {}", index + 1, format_card(&card)),
            )
        })
        .collect::<Vec<_>>();
    println!("You:      {}", slots.join("  "));
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
