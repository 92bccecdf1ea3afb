//! Code-breaking algorithms
//!
//! Discovery finds the colors in the secret, Placement finds their slots,
//! and [`Solver`] runs one after the other.

pub mod discovery;
mod engine;
mod error;
pub mod placement;

pub use discovery::{Discovered, Discovery, PROBE_ORDER};
pub use engine::{Phase, Solver};
pub use error::SolverError;
pub use placement::Placement;
