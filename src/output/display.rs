//! Display functions for game results

use super::formatters::{create_progress_bar, guess_tiles, guesses_label};
use crate::commands::ScoreResult;
use crate::engine::{GameEvent, GameState};
use crate::stats::Statistics;
use colored::Colorize;

/// Print the result of scoring a guess against a target
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_tiles(&result.guess, &result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!(
        "\n  Correct: {}   Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print every submitted guess of a game
pub fn print_board(state: &GameState) {
    println!();
    for (i, (guess, feedback)) in state.guesses().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            guess_tiles(guess, feedback)
        );
    }
    println!();
}

/// Print the end-of-game banner for a Won or Lost event
pub fn print_outcome(event: &GameEvent) {
    match event {
        GameEvent::Won {
            word,
            definition,
            attempts,
        } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  Y O U   W I N !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  Solved {} in {}",
                word.to_uppercase().bright_yellow().bold(),
                guesses_label(*attempts).bright_cyan().bold()
            );
            println!("  Definition: {}", definition.bright_white());
        }
        GameEvent::Lost {
            word, definition, ..
        } => {
            println!("\n{}", "═".repeat(60).red());
            println!("{}", "    ❌  G A M E   O V E R  ❌    ".red().bold());
            println!("{}", "═".repeat(60).red());
            println!(
                "\n  The word was {}",
                word.to_uppercase().bright_yellow().bold()
            );
            println!("  Definition: {}", definition.bright_white());
        }
        GameEvent::TargetSelected { .. } => {}
    }
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:        {}", stats.total_games);
    println!("   Win rate:      {:.0}%", stats.win_rate());
    println!(
        "   Streak:        {} (best {})",
        stats.current_streak, stats.best_streak
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
