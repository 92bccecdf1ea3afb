//! Guess message codec
//!
//! A guess travels as a 16-bit little-endian value:
//! ```text
//! 15 14  12 11   9 8    6 5    3 2    0
//! ┌──┬──────┬──────┬──────┬──────┬──────┐
//! │P │slot 4│slot 3│slot 2│slot 1│slot 0│
//! └──┴──────┴──────┴──────┴──────┴──────┘
//! ```
//! Each slot holds a 3-bit color code. `P` is the parity bit: the XOR over
//! all slots of `code ^ (code >> 1) ^ (code >> 2)`, masked to one bit.

use super::ProtocolError;
use crate::core::{Color, Guess, SLOTS};

/// Encoded message size in bytes
pub const MESSAGE_SIZE: usize = 2;

/// Feedback size in bytes
pub const FEEDBACK_SIZE: usize = 1;

const BITS_PER_SLOT: usize = 3;
const CODE_MASK: u16 = 0x7;
const PARITY_BIT: u16 = 15;

/// A guess packed into its 16-bit wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message(u16);

impl Message {
    /// Pack a guess and fold in its parity bit
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Guess;
    /// use mastermind_solver::protocol::Message;
    ///
    /// let message = Message::encode(&Guess::parse("bbbbb").unwrap());
    /// assert_eq!(message.value(), 0);
    ///
    /// // darkblue (1) in slot 0 sets bit 0 and flips parity
    /// let message = Message::encode(&Guess::parse("dbbbb").unwrap());
    /// assert_eq!(message.to_bytes(), [0x01, 0x80]);
    /// ```
    #[must_use]
    pub fn encode(guess: &Guess) -> Self {
        let mut value = 0u16;
        let mut parity = 0u8;

        for (slot, color) in guess.colors().iter().enumerate() {
            let code = color.code();
            parity ^= code ^ (code >> 1) ^ (code >> 2);
            value |= u16::from(code) << (slot * BITS_PER_SLOT);
        }

        value |= u16::from(parity & 1) << PARITY_BIT;
        Self(value)
    }

    /// Wrap a raw wire value
    #[inline]
    #[must_use]
    pub const fn from_value(value: u16) -> Self {
        Self(value)
    }

    /// Rebuild a message from its two wire bytes (low byte first)
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; MESSAGE_SIZE]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// The raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The two wire bytes, low byte first
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; MESSAGE_SIZE] {
        self.0.to_le_bytes()
    }

    /// The parity bit as transmitted
    #[inline]
    #[must_use]
    pub const fn parity_bit(self) -> u8 {
        (self.0 >> PARITY_BIT) as u8 & 1
    }

    /// Unpack the 5 slot colors
    #[must_use]
    pub fn guess(self) -> Guess {
        let mut slots = [Color::Beige; SLOTS];
        for (slot, color) in slots.iter_mut().enumerate() {
            *color = Color::from_code(((self.0 >> (slot * BITS_PER_SLOT)) & CODE_MASK) as u8);
        }
        Guess::new(slots)
    }

    /// Check the transmitted parity bit against the slot codes
    #[must_use]
    pub fn has_valid_parity(self) -> bool {
        Self::encode(&self.guess()).parity_bit() == self.parity_bit()
    }
}

/// Parse a symbol string and encode it to wire bytes
///
/// # Errors
/// Returns `ProtocolError` if the symbols do not form a valid guess.
pub fn encode_symbols(symbols: &str) -> Result<[u8; MESSAGE_SIZE], ProtocolError> {
    let guess = Guess::parse(symbols)?;
    Ok(Message::encode(&guess).to_bytes())
}
