//! Benchmark command
//!
//! Tests solver performance across random secrets.

use super::simulate::play_simulated;
use crate::core::{COLOR_COUNT, Color, Guess, SLOTS};
use crate::session::{MAX_ROUNDS, SessionConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_rounds: u64,
    pub average_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw a uniformly random secret
#[must_use]
pub fn random_secret<R: Rng + ?Sized>(rng: &mut R) -> Guess {
    let mut slots = [Color::Beige; SLOTS];
    for slot in &mut slots {
        *slot = Color::from_code(rng.random_range(0..COLOR_COUNT as u8));
    }
    Guess::new(slots)
}

/// Draw `count` random secrets, reproducibly when a seed is given
#[must_use]
pub fn random_secrets(count: usize, seed: Option<u64>) -> Vec<Guess> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..count).map(|_| random_secret(&mut rng)).collect()
}

/// Run benchmark on a set of secrets
///
/// Games that end in an error count toward `total_games` but not toward
/// the round statistics.
pub fn run_benchmark(secrets: &[Guess], config: SessionConfig) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0u64;
    let mut min_rounds = u32::MAX;
    let mut max_rounds = 0;
    let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();

    for &secret in secrets {
        match play_simulated(secret, MAX_ROUNDS, config) {
            Ok(outcome) => {
                solved += 1;
                total_rounds += u64::from(outcome.rounds);
                min_rounds = min_rounds.min(outcome.rounds);
                max_rounds = max_rounds.max(outcome.rounds);
                *distribution.entry(outcome.rounds).or_insert(0) += 1;
            }
            Err(e) => tracing::warn!(%secret, error = %e, "benchmark game failed"),
        }
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    BenchmarkResult {
        total_games,
        solved,
        total_rounds,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}
