//! Session errors and process exit codes

use super::SessionState;
use crate::protocol::ProtocolError;
use crate::solver::SolverError;
use std::io;

/// Exit code for a successful game
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for any failure without a dedicated code
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when the server reported a parity error
pub const EXIT_PARITY_ERROR: u8 = 2;
/// Exit code when the server reported the game lost
pub const EXIT_GAME_LOST: u8 = 3;
/// Exit code when the server reported both errors
pub const EXIT_MULTIPLE_ERRORS: u8 = 4;

/// Fatal errors ending a game session
///
/// None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A guess could not be encoded
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The server's feedback contradicts itself
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Writing a guess failed
    #[error("send failed")]
    Send(#[source] io::Error),

    /// Reading feedback failed
    #[error("receive failed")]
    Receive(#[source] io::Error),

    /// The server rejected a message's parity bit
    #[error("parity error")]
    ParityError,

    /// The server's round budget ran out
    #[error("game lost")]
    GameLost,

    /// The server reported a parity error and a lost game at once
    #[error("parity error and game lost")]
    MultipleErrors,

    /// The client-side round limit was reached
    #[error("round limit of {0} reached")]
    RoundLimit(u32),

    /// A round was requested after the session had already ended
    #[error("session already ended ({0:?})")]
    SessionOver(SessionState),
}

impl GameError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ParityError | Self::SessionOver(SessionState::ParityError) => EXIT_PARITY_ERROR,
            Self::GameLost | Self::SessionOver(SessionState::GameLost) => EXIT_GAME_LOST,
            Self::MultipleErrors | Self::SessionOver(SessionState::MultipleErrors) => {
                EXIT_MULTIPLE_ERRORS
            }
            Self::SessionOver(_)
            | Self::Protocol(_)
            | Self::Solver(_)
            | Self::Send(_)
            | Self::Receive(_)
            | Self::RoundLimit(_) => EXIT_FAILURE,
        }
    }
}
