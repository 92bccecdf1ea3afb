//! Game session
//!
//! Owns the channel for the lifetime of one game, runs the request/response
//! rounds, and turns server error flags into terminal states.

use super::{Channel, GameError};
use crate::core::{Feedback, Guess};
use crate::protocol::{FEEDBACK_SIZE, MESSAGE_SIZE, Message, encode_symbols};
use crate::solver::{Phase, Solver, SolverError};
use std::io;

/// Round budget of the reference server
pub const MAX_ROUNDS: u32 = 35;

/// Session configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Stop before sending more than this many rounds
    ///
    /// `None` leaves the budget to the server, which reports it through the
    /// game-lost flag.
    pub max_rounds: Option<u32>,
}

impl SessionConfig {
    /// Configuration with a client-side round limit
    #[must_use]
    pub const fn with_max_rounds(max_rounds: u32) -> Self {
        Self {
            max_rounds: Some(max_rounds),
        }
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Probing for the colors in the secret
    Discovering,
    /// Probing for the slot of each color
    Placing,
    /// The secret was found
    Done,
    /// The server rejected a message's parity
    ParityError,
    /// The server's round budget ran out
    GameLost,
    /// The server raised both error flags
    MultipleErrors,
    /// An I/O error, inconsistent feedback, or the client round limit
    Failed,
}

impl SessionState {
    /// Check whether no further round may be played
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Discovering | Self::Placing)
    }
}

impl From<Phase> for SessionState {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Discovering => Self::Discovering,
            Phase::Placing => Self::Placing,
            Phase::Solved => Self::Done,
        }
    }
}

/// Result of a solved game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Messages sent
    pub rounds: u32,
    /// Messages sent before placement started
    pub discovery_rounds: u32,
    /// The secret
    pub solution: Guess,
    /// Every guess with the feedback it received
    pub history: Vec<(Guess, Feedback)>,
}

/// One game against one server
///
/// The channel is closed exactly once: by [`GameSession::close`], or when
/// the session is dropped.
pub struct GameSession<C: Channel> {
    channel: Option<C>,
    config: SessionConfig,
    solver: Solver,
    state: SessionState,
    rounds: u32,
    discovery_rounds: Option<u32>,
    history: Vec<(Guess, Feedback)>,
}

impl<C: Channel> GameSession<C> {
    /// Start a session on an open channel
    pub fn new(channel: C, config: SessionConfig) -> Self {
        Self {
            channel: Some(channel),
            config,
            solver: Solver::new(),
            state: SessionState::Discovering,
            rounds: 0,
            discovery_rounds: None,
            history: Vec::new(),
        }
    }

    /// Messages sent so far
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Every guess sent with its feedback
    #[must_use]
    pub fn history(&self) -> &[(Guess, Feedback)] {
        &self.history
    }

    /// Play until the secret is found
    ///
    /// A session that ended in an error stays ended: later calls return
    /// `GameError::SessionOver` without touching the channel.
    ///
    /// # Errors
    /// Returns `GameError` on I/O failure, a server error flag, inconsistent
    /// feedback, or when the configured round limit is reached.
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        while let Some(guess) = self
            .solver
            .next_guess()
            .map_err(|e| self.abort(e.into()))?
        {
            self.track_phase();
            let feedback = self.exchange(Message::encode(&guess).to_bytes())?;
            self.solver
                .observe(&guess, feedback)
                .map_err(|e| self.abort(e.into()))?;
        }
        self.track_phase();

        let solution = self.solver.solution().ok_or_else(|| {
            self.abort(SolverError::Inconsistent("solver stopped without a solution").into())
        })?;
        tracing::info!(rounds = self.rounds, %solution, "game solved");

        Ok(Outcome {
            rounds: self.rounds,
            discovery_rounds: self.discovery_rounds.unwrap_or(self.rounds),
            solution,
            history: self.history.clone(),
        })
    }

    /// Send one hand-written guess such as `"bbgow"`
    ///
    /// The symbols are validated before anything is written.
    ///
    /// # Errors
    /// Returns `GameError::Protocol` for an invalid guess, otherwise the
    /// same errors as a regular round.
    pub fn submit(&mut self, symbols: &str) -> Result<Feedback, GameError> {
        let bytes = encode_symbols(symbols)?;
        self.exchange(bytes)
    }

    /// Close the channel now and report any error
    ///
    /// # Errors
    /// Returns the channel's close error.
    pub fn close(mut self) -> io::Result<()> {
        self.release()
    }

    /// One round: send an encoded guess, wait for its feedback, check the flags
    fn exchange(&mut self, bytes: [u8; MESSAGE_SIZE]) -> Result<Feedback, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::SessionOver(self.state));
        }

        if let Some(limit) = self.config.max_rounds
            && self.rounds >= limit
        {
            tracing::warn!(limit, "client-side round limit reached");
            return Err(self.abort(GameError::RoundLimit(limit)));
        }

        let Some(channel) = self.channel.as_mut() else {
            let closed = io::Error::new(io::ErrorKind::NotConnected, "channel already closed");
            return Err(self.abort(GameError::Send(closed)));
        };

        if let Err(e) = channel.send(&bytes) {
            return Err(self.abort(GameError::Send(e)));
        }
        self.rounds += 1;

        let mut buf = [0u8; FEEDBACK_SIZE];
        if let Err(e) = channel.receive(&mut buf) {
            return Err(self.abort(GameError::Receive(e)));
        }
        let feedback = Feedback::decode(buf[0]);
        let guess = Message::from_bytes(bytes).guess();

        tracing::debug!(
            round = self.rounds,
            %guess,
            red = feedback.red,
            white = feedback.white,
            "round complete"
        );
        self.history.push((guess, feedback));
        self.check_flags(feedback)?;
        Ok(feedback)
    }

    fn check_flags(&mut self, feedback: Feedback) -> Result<(), GameError> {
        if !feedback.has_error() {
            return Ok(());
        }

        let (state, error) = match (feedback.parity_error, feedback.game_lost) {
            (true, true) => (SessionState::MultipleErrors, GameError::MultipleErrors),
            (true, false) => (SessionState::ParityError, GameError::ParityError),
            (false, _) => (SessionState::GameLost, GameError::GameLost),
        };

        tracing::warn!(round = self.rounds, %error, "server reported an error");
        self.state = state;
        Err(error)
    }

    /// Mark the session failed and pass the error through
    fn abort(&mut self, error: GameError) -> GameError {
        tracing::warn!(round = self.rounds, %error, "session failed");
        self.state = SessionState::Failed;
        error
    }

    fn track_phase(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        let state = SessionState::from(self.solver.phase());
        if state != self.state {
            tracing::info!(round = self.rounds, ?state, "phase changed");
            if self.state == SessionState::Discovering {
                self.discovery_rounds = Some(self.rounds);
            }
            self.state = state;
        }
    }

    fn release(&mut self) -> io::Result<()> {
        match self.channel.take() {
            Some(mut channel) => {
                tracing::debug!(rounds = self.rounds, "closing channel");
                channel.close()
            }
            None => Ok(()),
        }
    }
}

impl<C: Channel> Drop for GameSession<C> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "failed to close channel");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::simulator::SimulatedServer;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// What a scripted channel saw
    #[derive(Default)]
    struct Log {
        sent: Vec<u8>,
        closes: u32,
    }

    /// Replies with canned feedback bytes and records everything
    struct ScriptedChannel {
        replies: VecDeque<u8>,
        log: Rc<RefCell<Log>>,
        fail_send: bool,
    }

    impl ScriptedChannel {
        fn new(replies: &[u8]) -> (Self, Rc<RefCell<Log>>) {
            let log = Rc::new(RefCell::new(Log::default()));
            let channel = Self {
                replies: replies.iter().copied().collect(),
                log: Rc::clone(&log),
                fail_send: false,
            };
            (channel, log)
        }
    }

    impl Channel for ScriptedChannel {
        fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
            if self.fail_send {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.log.borrow_mut().sent.extend_from_slice(bytes);
            Ok(())
        }

        fn receive(&mut self, buf: &mut [u8]) -> io::Result<()> {
            for byte in buf.iter_mut() {
                *byte = self
                    .replies
                    .pop_front()
                    .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
            }
            Ok(())
        }

        fn close(&mut self) -> io::Result<()> {
            self.log.borrow_mut().closes += 1;
            Ok(())
        }
    }

    fn simulated(secret: &str) -> SimulatedServer {
        SimulatedServer::new(Guess::parse(secret).unwrap())
    }

    #[test]
    fn uniform_secret_takes_one_round() {
        let mut session = GameSession::new(simulated("wwwww"), SessionConfig::default());
        let outcome = session.play().unwrap();

        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.discovery_rounds, 1);
        assert_eq!(outcome.solution, Guess::uniform(Color::White));
        assert_eq!(session.state(), SessionState::Done);
        assert_eq!(outcome.history, vec![(Guess::uniform(Color::White), Feedback::SOLVED)]);
    }

    #[test]
    fn mixed_secret_solved() {
        let secret = Guess::parse("bbgow").unwrap();
        let mut session = GameSession::new(SimulatedServer::new(secret), SessionConfig::default());
        let outcome = session.play().unwrap();

        assert_eq!(outcome.solution, secret);
        assert_eq!(outcome.rounds, 14);
        assert_eq!(outcome.discovery_rounds, 5);
        assert_eq!(outcome.history.len(), 14);
        assert_eq!(outcome.history.last().map(|(_, f)| f.red), Some(5));
    }

    #[test]
    fn sends_little_endian_messages() {
        let (channel, log) = ScriptedChannel::new(&[0x05]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        session.play().unwrap();

        let expected = Message::encode(&Guess::uniform(Color::White)).to_bytes();
        assert_eq!(log.borrow().sent, expected.to_vec());
    }

    #[test]
    fn parity_flag_is_fatal() {
        let (channel, _) = ScriptedChannel::new(&[0x40]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::ParityError));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(session.state(), SessionState::ParityError);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn game_lost_flag_is_fatal() {
        let (channel, _) = ScriptedChannel::new(&[0x00, 0x81]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::GameLost));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(session.state(), SessionState::GameLost);
        assert_eq!(session.rounds(), 2);
    }

    #[test]
    fn both_flags_are_multiple_errors() {
        let (channel, _) = ScriptedChannel::new(&[0xC0]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::MultipleErrors));
        assert_eq!(err.exit_code(), 4);
        assert_eq!(session.state(), SessionState::MultipleErrors);
    }

    #[test]
    fn flags_checked_before_solver_sees_feedback() {
        // Solved pegs with the parity flag still fail
        let (channel, _) = ScriptedChannel::new(&[0x45]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        assert!(matches!(session.play(), Err(GameError::ParityError)));
    }

    #[test]
    fn invalid_symbols_rejected_before_sending() {
        let (channel, log) = ScriptedChannel::new(&[0x00]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let err = session.submit("bbxow").unwrap_err();

        assert!(matches!(
            err,
            GameError::Protocol(crate::protocol::ProtocolError::InvalidColor('x'))
        ));
        assert!(log.borrow().sent.is_empty());
        assert_eq!(session.rounds(), 0);
    }

    #[test]
    fn submit_sends_one_round() {
        let (channel, log) = ScriptedChannel::new(&[0b0001_0011]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let feedback = session.submit("bbgow").unwrap();

        assert_eq!(feedback, Feedback::pegs(3, 2));
        assert_eq!(log.borrow().sent.len(), 2);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn channel_closed_once_on_success() {
        let (channel, log) = ScriptedChannel::new(&[0x05]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        session.play().unwrap();
        session.close().unwrap();
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn channel_closed_once_on_drop_after_error() {
        let (channel, log) = ScriptedChannel::new(&[0xC0]);
        {
            let mut session = GameSession::new(channel, SessionConfig::default());
            assert!(session.play().is_err());
            assert_eq!(log.borrow().closes, 0);
        }
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn send_failure_is_fatal() {
        let (mut channel, log) = ScriptedChannel::new(&[]);
        channel.fail_send = true;
        let mut session = GameSession::new(channel, SessionConfig::default());
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::Send(_)));
        assert_eq!(session.rounds(), 0);
        drop(session);
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn closed_connection_is_receive_error() {
        let (channel, _) = ScriptedChannel::new(&[0x00]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::Receive(_)));
        assert_eq!(session.rounds(), 2);
    }

    #[test]
    fn parity_error_ends_the_session() {
        let (channel, log) = ScriptedChannel::new(&[0x40, 0x05]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        assert!(matches!(session.play(), Err(GameError::ParityError)));
        let sent = log.borrow().sent.len();

        let err = session.play().unwrap_err();
        assert!(matches!(
            err,
            GameError::SessionOver(SessionState::ParityError)
        ));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(log.borrow().sent.len(), sent);
        assert_eq!(session.state(), SessionState::ParityError);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn game_lost_blocks_submit() {
        let (channel, log) = ScriptedChannel::new(&[0x80, 0x05]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        assert!(matches!(session.play(), Err(GameError::GameLost)));

        let err = session.submit("wwwww").unwrap_err();
        assert!(matches!(err, GameError::SessionOver(SessionState::GameLost)));
        assert_eq!(log.borrow().sent.len(), 2);
        assert_eq!(session.state(), SessionState::GameLost);
    }

    #[test]
    fn receive_failure_blocks_later_rounds() {
        let (channel, log) = ScriptedChannel::new(&[0x00]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        assert!(matches!(session.play(), Err(GameError::Receive(_))));
        assert_eq!(session.state(), SessionState::Failed);
        let sent = log.borrow().sent.len();

        assert!(matches!(
            session.play(),
            Err(GameError::SessionOver(SessionState::Failed))
        ));
        assert_eq!(log.borrow().sent.len(), sent);
        assert_eq!(session.rounds(), 2);
    }

    #[test]
    fn solved_session_sends_nothing_more() {
        let (channel, log) = ScriptedChannel::new(&[0x05, 0x05]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        let first = session.play().unwrap();

        assert_eq!(session.play().unwrap(), first);
        assert!(matches!(
            session.submit("wwwww"),
            Err(GameError::SessionOver(SessionState::Done))
        ));
        assert_eq!(log.borrow().sent.len(), 2);
    }

    #[test]
    fn invalid_submit_keeps_session_open() {
        let (channel, _) = ScriptedChannel::new(&[0x05]);
        let mut session = GameSession::new(channel, SessionConfig::default());
        assert!(session.submit("bbgo").is_err());
        assert_eq!(session.state(), SessionState::Discovering);
        assert_eq!(session.play().unwrap().rounds, 1);
    }

    /// Flips the parity bit of the first message only
    struct CorruptFirst {
        server: SimulatedServer,
        corrupted: bool,
    }

    impl Channel for CorruptFirst {
        fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
            let mut bytes = bytes.to_vec();
            if !self.corrupted {
                bytes[1] ^= 0x80;
                self.corrupted = true;
            }
            self.server.send(&bytes)
        }

        fn receive(&mut self, buf: &mut [u8]) -> io::Result<()> {
            self.server.receive(buf)
        }

        fn close(&mut self) -> io::Result<()> {
            self.server.close()
        }
    }

    #[test]
    fn fatal_state_is_not_retried() {
        let channel = CorruptFirst {
            server: simulated("bbgow"),
            corrupted: false,
        };
        let mut session = GameSession::new(channel, SessionConfig::default());

        assert!(matches!(session.play(), Err(GameError::ParityError)));
        assert!(matches!(
            session.play(),
            Err(GameError::SessionOver(SessionState::ParityError))
        ));
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.state(), SessionState::ParityError);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn client_round_limit_fails_fast() {
        let mut session =
            GameSession::new(simulated("bbgow"), SessionConfig::with_max_rounds(3));
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::RoundLimit(3)));
        assert_eq!(session.rounds(), 3);
    }

    #[test]
    fn server_budget_reports_game_lost() {
        let server = SimulatedServer::new(Guess::parse("bbgow").unwrap()).with_max_rounds(6);
        let mut session = GameSession::new(server, SessionConfig::default());
        let err = session.play().unwrap_err();

        assert!(matches!(err, GameError::GameLost));
        assert_eq!(session.rounds(), 6);
    }

    #[test]
    fn sixth_probe_starts_placement() {
        // Discovery for bbgow takes 5 rounds
        let server = SimulatedServer::new(Guess::parse("bbgow").unwrap()).with_max_rounds(6);
        let mut session = GameSession::new(server, SessionConfig::default());
        assert!(session.play().is_err());
        assert_eq!(session.history()[4].0, Guess::parse("wbbgo").unwrap());
        assert_eq!(session.history()[5].0, Guess::parse("wdddd").unwrap());
    }

    #[test]
    fn every_secret_solved_over_the_wire() {
        for secret in Guess::all().step_by(7) {
            let mut session =
                GameSession::new(SimulatedServer::new(secret), SessionConfig::default());
            let outcome = session.play().unwrap();
            assert_eq!(outcome.solution, secret);
            assert!(outcome.rounds <= MAX_ROUNDS);
        }
    }
}
