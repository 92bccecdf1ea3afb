//! Test all secrets - comprehensive solver evaluation
//!
//! Plays a simulated game against every possible secret and generates statistics.

use super::simulate::play_simulated;
use crate::core::Guess;
use crate::output::formatters::{create_progress_bar, distribution_bar};
use crate::session::{MAX_ROUNDS, SessionConfig};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Worst secrets kept in the statistics
const WORST_KEPT: usize = 10;

/// Result from playing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Guess,
    /// Rounds and discovery rounds, or the error message
    pub result: Result<(u32, u32), String>,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub round_distribution: FxHashMap<u32, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub average_discovery_rounds: f64,
    pub max_rounds: u32,
    pub min_rounds: u32,
    pub worst_secrets: Vec<(Guess, u32)>,
    pub failures: Vec<(Guess, String)>,
}

impl TestAllStatistics {
    /// Secrets that did not end solved
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Play every secret (or the first `limit` in code order) in parallel
///
/// Each game runs its own sequential session against its own simulator.
pub fn run_test_all(
    config: SessionConfig,
    limit: Option<usize>,
    show_progress: bool,
) -> TestAllStatistics {
    let secrets: Vec<Guess> = Guess::all().take(limit.unwrap_or(usize::MAX)).collect();
    let pb = progress_bar(secrets.len(), show_progress);

    let total_start = Instant::now();
    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map(|&secret| {
            let result = play_simulated(secret, MAX_ROUNDS, config)
                .map(|outcome| (outcome.rounds, outcome.discovery_rounds))
                .map_err(|e| e.to_string());
            pb.inc(1);
            SecretTestResult { secret, result }
        })
        .collect();
    pb.finish_and_clear();

    summarize(&results, total_start.elapsed())
}

/// Aggregate per-secret results
#[must_use]
pub fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let mut round_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut solved_rounds: Vec<(Guess, u32)> = Vec::new();
    let mut failures = Vec::new();
    let mut total_rounds = 0u64;
    let mut total_discovery = 0u64;

    for r in results {
        match &r.result {
            Ok((rounds, discovery)) => {
                *round_distribution.entry(*rounds).or_insert(0) += 1;
                total_rounds += u64::from(*rounds);
                total_discovery += u64::from(*discovery);
                solved_rounds.push((r.secret, *rounds));
            }
            Err(message) => failures.push((r.secret, message.clone())),
        }
    }

    let solved = solved_rounds.len();
    let average = |total: u64| {
        if solved > 0 {
            total as f64 / solved as f64
        } else {
            0.0
        }
    };

    let max_rounds = solved_rounds.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let min_rounds = solved_rounds.iter().map(|&(_, n)| n).min().unwrap_or(0);

    let mut worst_secrets = solved_rounds;
    worst_secrets.sort_by_key(|&(secret, n)| (std::cmp::Reverse(n), secret.to_string()));
    worst_secrets.truncate(WORST_KEPT);

    TestAllStatistics {
        total_secrets: results.len(),
        solved,
        round_distribution,
        total_time,
        average_rounds: average(total_rounds),
        average_discovery_rounds: average(total_discovery),
        max_rounds,
        min_rounds,
        worst_secrets,
        failures,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed() > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed(),
            format!("({:.1}%)", stats.failed() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average rounds:       {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Average discovery:    {:.3}",
        stats.average_discovery_rounds
    );
    println!(
        "  Best / worst case:    {} / {}",
        stats.min_rounds.to_string().green(),
        stats.max_rounds.to_string().yellow()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Budget used (worst):  [{}] of {MAX_ROUNDS}",
        create_progress_bar(f64::from(stats.max_rounds), f64::from(MAX_ROUNDS), 30)
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(0);
    let mut rounds: Vec<u32> = stats.round_distribution.keys().copied().collect();
    rounds.sort_unstable();
    for n in rounds {
        let count = stats.round_distribution.get(&n).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        println!(
            "  {n:2} rounds: {} {count:6} ({percentage:5.1}%)",
            distribution_bar(count, max_count, 40)
        );
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, rounds) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({rounds} rounds)", secret.to_string().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (secret, message) in stats.failures.iter().take(10) {
            println!("  {}: {message}", secret.to_string().red());
        }
    }
}
