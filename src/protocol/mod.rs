//! Wire protocol
//!
//! Pure encode/decode between guesses and the 2-byte message format.
//! Feedback decoding lives on [`Feedback`](crate::core::Feedback).

mod codec;
mod error;

pub use codec::{FEEDBACK_SIZE, MESSAGE_SIZE, Message, encode_symbols};
pub use error::ProtocolError;
