//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::engine::{GameEvent, GuessEngine};
use crate::output::formatters::guess_tiles;
use crate::output::{print_board, print_outcome, print_statistics};
use crate::stats::Statistics;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver};

/// Non-guess input in simple mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Hint,
    NewGame,
}

impl Command {
    /// Parse a command line
    ///
    /// A `:` prefix always marks a command. A bare command word is only a
    /// command when it could not be a guess, so `hint` stays guessable in a
    /// four-letter game.
    fn parse(line: &str, word_length: usize) -> Option<Self> {
        let name = match line.strip_prefix(':') {
            Some(name) => name,
            None if line.len() == word_length && line.chars().all(|c| c.is_ascii_alphabetic()) => {
                return None;
            }
            None => line,
        };

        match name {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "hint" | "h" => Some(Self::Hint),
            "new" | "n" => Some(Self::NewGame),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// The engine must already have a target (see `GuessEngine::initialize`).
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(engine: &mut GuessEngine<R>) -> Result<(), String> {
    let stdin = io::stdin();
    run_simple_with(engine, &mut stdin.lock())
}

/// Run the simple mode reading lines from `input`
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn run_simple_with<R: Rng>(
    engine: &mut GuessEngine<R>,
    input: &mut impl BufRead,
) -> Result<(), String> {
    let (tx, events) = mpsc::channel();
    let observer = engine.subscribe(tx);

    let result = play(engine, input, &events);
    engine.unsubscribe(observer);
    result
}

fn play<R: Rng>(
    engine: &mut GuessEngine<R>,
    input: &mut impl BufRead,
    events: &Receiver<GameEvent>,
) -> Result<(), String> {
    let word_length = engine.config().word_length();
    let max_attempts = engine.config().max_attempts();
    let mut stats = Statistics::new(max_attempts);
    let mut hint = engine.state().target_definition;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {word_length}-letter word in {max_attempts} tries.");
    println!("Commands: ':hint' to see the definition, ':new' for new game, ':quit' to exit\n");

    loop {
        let prompt = format!("Guess {}/{max_attempts}", engine.attempts() + 1);
        let Some(line) = get_user_input(input, &prompt)? else {
            break;
        };

        let line = line.to_lowercase();
        match Command::parse(&line, word_length) {
            Some(Command::Quit) => break,
            Some(Command::Hint) => {
                println!("💡 Hint: {hint}\n");
                continue;
            }
            Some(Command::NewGame) => {
                if let Err(err) = engine.new_game() {
                    println!("❌ {err}\n");
                } else {
                    println!("\n🔄 New game started!\n");
                }
            }
            None => {
                let guess = line.as_str();
                while engine.remove_letter() {}

                if !guess.chars().all(|c| engine.add_letter(c)) {
                    while engine.remove_letter() {}
                    println!("❌ Guesses must be exactly {word_length} letters (a-z)\n");
                    continue;
                }

                match engine.submit_guess() {
                    Some(feedback) => println!("   {}\n", guess_tiles(guess, &feedback)),
                    None => println!("❌ Guesses must be exactly {word_length} letters (a-z)\n"),
                }
            }
        }

        let mut game_ended = false;
        while let Ok(event) = events.try_recv() {
            stats.record(&event);
            match &event {
                GameEvent::TargetSelected { definition, .. } => hint.clone_from(definition),
                GameEvent::Won { .. } | GameEvent::Lost { .. } => {
                    print_board(&engine.state());
                    print_outcome(&event);
                    game_ended = true;
                }
            }
        }

        if game_ended {
            print_statistics(&stats);
            println!();

            let again = get_user_input(input, "Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                break;
            }
            engine.new_game().map_err(|e| e.to_string())?;
            while let Ok(event) = events.try_recv() {
                if let GameEvent::TargetSelected { definition, .. } = event {
                    hint = definition;
                }
            }
            println!("\n🔄 New game started!\n");
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
