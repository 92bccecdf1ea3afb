//! In-process opponent
//!
//! Plays the server's side of the protocol against a fixed secret: it
//! checks each message's parity, scores the guess, and raises the game-lost
//! flag once its round budget is used up.

use crate::core::{Feedback, Guess};
use crate::protocol::{MESSAGE_SIZE, Message};
use crate::session::{Channel, MAX_ROUNDS};
use std::collections::VecDeque;
use std::io;

/// A server holding one secret, reachable as a [`Channel`]
#[derive(Debug, Clone)]
pub struct SimulatedServer {
    secret: Guess,
    max_rounds: u32,
    rounds: u32,
    pending: VecDeque<u8>,
    closed: bool,
}

impl SimulatedServer {
    /// Create a server with the reference round budget
    #[must_use]
    pub const fn new(secret: Guess) -> Self {
        Self {
            secret,
            max_rounds: MAX_ROUNDS,
            rounds: 0,
            pending: VecDeque::new(),
            closed: false,
        }
    }

    /// Use a different round budget
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// The hidden secret
    #[must_use]
    pub const fn secret(&self) -> Guess {
        self.secret
    }

    /// Messages received so far
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Check whether the client closed the channel
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Answer one message
    #[must_use]
    pub fn respond(&mut self, message: Message) -> Feedback {
        self.rounds += 1;

        let mut feedback = if message.has_valid_parity() {
            Feedback::score(&message.guess(), &self.secret)
        } else {
            Feedback {
                parity_error: true,
                ..Feedback::default()
            }
        };

        if self.rounds >= self.max_rounds && !feedback.is_solved() {
            feedback.game_lost = true;
        }
        feedback
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "simulated server closed",
            ))
        } else {
            Ok(())
        }
    }
}

impl Channel for SimulatedServer {
    fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.ensure_open()?;
        let bytes: [u8; MESSAGE_SIZE] = bytes.try_into().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("expected {MESSAGE_SIZE} bytes, got {}", bytes.len()),
            )
        })?;

        let feedback = self.respond(Message::from_bytes(bytes));
        self.pending.push_back(feedback.encode());
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.ensure_open()?;
        for byte in buf.iter_mut() {
            *byte = self
                .pending
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}
