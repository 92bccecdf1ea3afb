//! Display functions for command results

use super::formatters::{distribution_bar, feedback_to_pegs, guess_to_swatches};
use crate::commands::{BenchmarkResult, SimulateResult};
use crate::session::Outcome;
use colored::Colorize;

/// Print the result of a network game
///
/// Only the round count goes to stdout so scripts can consume it.
pub fn print_outcome(outcome: &Outcome) {
    println!("{}", outcome.rounds);
}

/// Print every round of a simulated game
pub fn print_simulate_result(result: &SimulateResult) {
    let outcome = &result.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {} {}",
        result.secret.to_string().bright_yellow().bold(),
        guess_to_swatches(&result.secret)
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, feedback)) in outcome.history.iter().enumerate() {
        let round = i + 1;
        let phase = if round <= outcome.discovery_rounds as usize {
            "discover"
        } else {
            "place"
        };
        println!(
            "Round {round:2} [{phase:>8}]: {guess} {} {} (red {}, white {})",
            guess_to_swatches(guess),
            feedback_to_pegs(*feedback),
            feedback.red,
            feedback.white
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} rounds ({} discovery, {} placement)",
            outcome.rounds,
            outcome.discovery_rounds,
            outcome.rounds - outcome.discovery_rounds
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets played:   {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved < result.total_games {
        println!(
            "   {}",
            format!("Failed:           {}", result.total_games - result.solved).red()
        );
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    let mut rounds: Vec<u32> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    for n in rounds {
        let count = result.distribution.get(&n).copied().unwrap_or(0);
        let pct = count as f64 / result.total_games.max(1) as f64 * 100.0;
        println!(
            "   {n:2}: {} {count:4} ({pct:5.1}%)",
            distribution_bar(count, max_count, 40)
        );
    }
}
