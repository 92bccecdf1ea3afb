//! Game orchestration
//!
//! A [`GameSession`] owns the connection to the server and plays one game
//! with the [`Solver`](crate::solver::Solver).

mod channel;
mod error;
mod game;

pub use channel::Channel;
pub use error::{
    EXIT_FAILURE, EXIT_GAME_LOST, EXIT_MULTIPLE_ERRORS, EXIT_PARITY_ERROR, EXIT_SUCCESS,
    GameError,
};
pub use game::{GameSession, MAX_ROUNDS, Outcome, SessionConfig, SessionState};
