//! Offline simulation command
//!
//! Plays a game against the in-process simulator for a chosen secret.

use crate::core::Guess;
use crate::session::{GameError, GameSession, MAX_ROUNDS, Outcome, SessionConfig};
use crate::simulator::SimulatedServer;

/// Configuration for simulating a game
pub struct SimulateConfig {
    pub secret: String,
    pub server_rounds: u32,
    pub session: SessionConfig,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            server_rounds: MAX_ROUNDS,
            session: SessionConfig { max_rounds: None },
        }
    }
}

/// Result of a simulated game
pub struct SimulateResult {
    pub secret: Guess,
    pub outcome: Outcome,
}

/// Play one game against a simulated server holding `secret`
///
/// # Errors
///
/// Returns the session's `GameError` if the game does not end solved.
pub fn play_simulated(
    secret: Guess,
    server_rounds: u32,
    config: SessionConfig,
) -> Result<Outcome, GameError> {
    let server = SimulatedServer::new(secret).with_max_rounds(server_rounds);
    GameSession::new(server, config).play()
}

/// Parse the configured secret and simulate a game against it
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not 5 valid color symbols
/// - The game ends in a server error or hits the round limit
pub fn simulate_secret(config: &SimulateConfig) -> Result<SimulateResult, GameError> {
    let secret = Guess::parse(&config.secret)?;
    let outcome = play_simulated(secret, config.server_rounds, config.session)?;
    Ok(SimulateResult { secret, outcome })
}
