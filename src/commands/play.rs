//! Network play command
//!
//! Connects to a game server and plays one game.

use crate::session::{GameSession, Outcome, SessionConfig};
use crate::transport::connect;
use anyhow::{Context, Result};

/// Configuration for playing against a server
pub struct PlayConfig {
    pub host: String,
    pub port: u16,
    pub session: SessionConfig,
}

/// Connect to the server and play until the secret is found
///
/// The connection is closed before this returns, on every path.
///
/// # Errors
///
/// Returns an error if the connection cannot be established, or wraps the
/// session's [`GameError`](crate::session::GameError) so callers can
/// downcast it for the exit code.
pub fn play_server(config: &PlayConfig) -> Result<Outcome> {
    let stream = connect(&config.host, config.port)
        .with_context(|| format!("connecting to {}:{}", config.host, config.port))?;

    let mut session = GameSession::new(stream, config.session);
    let outcome = session.play()?;

    if let Err(e) = session.close() {
        tracing::warn!(error = %e, "failed to close connection");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Guess};
    use crate::protocol::Message;
    use crate::session::GameError;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one connection, answering every message with `reply`
    fn serve(reply: impl Fn(Guess) -> u8 + Send + 'static) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 2];
            while stream.read_exact(&mut buf).is_ok() {
                let byte = reply(Message::from_bytes(buf).guess());
                if stream.write_all(&[byte]).is_err() {
                    break;
                }
            }
        });
        port
    }

    fn config(port: u16) -> PlayConfig {
        PlayConfig {
            host: "127.0.0.1".to_string(),
            port,
            session: SessionConfig::default(),
        }
    }

    #[test]
    fn solves_against_server() {
        let secret = Guess::parse("rrvvo").unwrap();
        let port = serve(move |guess| Feedback::score(&guess, &secret).encode());

        let outcome = play_server(&config(port)).unwrap();
        assert_eq!(outcome.solution, secret);
    }

    #[test]
    fn server_error_downcasts_to_game_error() {
        let port = serve(|_| 0x80);

        let err = play_server(&config(port)).unwrap_err();
        let game_error = err.downcast_ref::<GameError>().unwrap();
        assert_eq!(game_error.exit_code(), 3);
    }

    #[test]
    fn unreachable_server_is_generic_failure() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let err = play_server(&config(port)).unwrap_err();
        assert!(err.downcast_ref::<GameError>().is_none());
    }
}
