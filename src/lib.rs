//! Mastermind Solver
//!
//! A client for a 5-slot, 8-color Mastermind server. Guesses travel as
//! 2-byte parity-protected messages; a two-phase solver first discovers the
//! secret's colors, then places them slot by slot.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::Guess;
//! use mastermind_solver::session::{GameSession, SessionConfig};
//! use mastermind_solver::simulator::SimulatedServer;
//!
//! let secret = Guess::parse("bbgow").unwrap();
//! let mut session = GameSession::new(SimulatedServer::new(secret), SessionConfig::default());
//!
//! let outcome = session.play().unwrap();
//! assert_eq!(outcome.solution, secret);
//! println!("Solved in {} rounds", outcome.rounds);
//! ```

// Core domain types
pub mod core;

// Wire format
pub mod protocol;

// Solving algorithms
pub mod solver;

// Game orchestration
pub mod session;

// In-process server
pub mod simulator;

// TCP connection
pub mod transport;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
