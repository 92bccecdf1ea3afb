//! Command implementations

pub mod benchmark;
pub mod play;
pub mod simulate;
pub mod test_all;

pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use play::{PlayConfig, play_server};
pub use simulate::{SimulateConfig, SimulateResult, play_simulated, simulate_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
