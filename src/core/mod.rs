//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and small enough to copy.

mod color;
mod composition;
mod feedback;
mod guess;

pub use color::{COLOR_COUNT, Color};
pub use composition::Composition;
pub use feedback::Feedback;
pub use guess::{Guess, SLOTS};
