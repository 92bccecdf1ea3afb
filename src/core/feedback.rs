//! Server feedback for a guess
//!
//! Feedback travels as a single byte:
//! - bits 0-2: red pegs (right color, right slot)
//! - bits 3-5: white pegs (right color, wrong slot)
//! - bit 6: parity error (the server rejected the message)
//! - bit 7: game lost (the server's round budget is exhausted)

use super::{COLOR_COUNT, Guess, SLOTS};

const PEG_MASK: u8 = 0x7;
const WHITE_SHIFT: u8 = 3;
const PARITY_ERROR_BIT: u8 = 6;
const GAME_LOST_BIT: u8 = 7;

/// Structured feedback decoded from a server byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    /// Exact matches (0-5)
    pub red: u8,
    /// Right color in the wrong slot (0-5)
    pub white: u8,
    /// Server rejected the message's parity bit
    pub parity_error: bool,
    /// Server's round budget is exhausted
    pub game_lost: bool,
}

impl Feedback {
    /// Feedback for a fully correct guess
    pub const SOLVED: Self = Self::pegs(SLOTS as u8, 0);

    /// Feedback with peg counts and no flags set
    #[inline]
    #[must_use]
    pub const fn pegs(red: u8, white: u8) -> Self {
        Self {
            red,
            white,
            parity_error: false,
            game_lost: false,
        }
    }

    /// Decode a feedback byte
    ///
    /// Every byte value is structurally valid.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let feedback = Feedback::decode(0b1001_0010);
    /// assert_eq!(feedback.red, 2);
    /// assert_eq!(feedback.white, 2);
    /// assert!(!feedback.parity_error);
    /// assert!(feedback.game_lost);
    /// ```
    #[must_use]
    pub const fn decode(byte: u8) -> Self {
        Self {
            red: byte & PEG_MASK,
            white: (byte >> WHITE_SHIFT) & PEG_MASK,
            parity_error: (byte >> PARITY_ERROR_BIT) & 1 == 1,
            game_lost: (byte >> GAME_LOST_BIT) & 1 == 1,
        }
    }

    /// Encode back into the wire byte
    #[must_use]
    pub const fn encode(self) -> u8 {
        (self.red & PEG_MASK)
            | ((self.white & PEG_MASK) << WHITE_SHIFT)
            | ((self.parity_error as u8) << PARITY_ERROR_BIT)
            | ((self.game_lost as u8) << GAME_LOST_BIT)
    }

    /// Total pegs (red + white)
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.red + self.white
    }

    /// Check whether every slot was an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.red as usize == SLOTS
    }

    /// Check whether the server set any error flag
    #[inline]
    #[must_use]
    pub const fn has_error(self) -> bool {
        self.parity_error || self.game_lost
    }

    /// Score `guess` against `secret`
    ///
    /// Red counts exact slot matches. White counts the remaining color
    /// overlap, so each secret peg is credited at most once.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, Guess};
    ///
    /// let guess = Guess::parse("wbbbb").unwrap();
    /// let secret = Guess::parse("bbgow").unwrap();
    /// assert_eq!(Feedback::score(&guess, &secret), Feedback::pegs(1, 2));
    /// ```
    #[must_use]
    pub fn score(guess: &Guess, secret: &Guess) -> Self {
        let red = guess
            .colors()
            .iter()
            .zip(secret.colors())
            .filter(|(g, s)| g == s)
            .count() as u8;

        let guess_counts = guess.color_counts();
        let secret_counts = secret.color_counts();
        let overlap: u8 = (0..COLOR_COUNT)
            .map(|code| guess_counts[code].min(secret_counts[code]))
            .sum();

        Self::pegs(red, overlap - red)
    }
}
