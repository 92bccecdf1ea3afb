//! Five-slot color guess
//!
//! A guess (or a secret) is an ordered sequence of exactly 5 colors.

use super::{COLOR_COUNT, Color};
use crate::protocol::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// Number of slots on the board
pub const SLOTS: usize = 5;

/// An ordered sequence of 5 colors, one per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([Color; SLOTS]);

impl Guess {
    /// Create a guess from its 5 slot colors
    #[inline]
    #[must_use]
    pub const fn new(slots: [Color; SLOTS]) -> Self {
        Self(slots)
    }

    /// A guess with every slot set to the same color
    #[inline]
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self([color; SLOTS])
    }

    /// Parse a guess from a 5-symbol string such as `"bbgow"`
    ///
    /// # Errors
    /// Returns `ProtocolError::InvalidLength` if the string does not hold
    /// exactly 5 characters, or `ProtocolError::InvalidColor` for the first
    /// symbol outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Color, Guess};
    ///
    /// let guess = Guess::parse("bbgow").unwrap();
    /// assert_eq!(guess.color_at(2), Color::Green);
    ///
    /// assert!(Guess::parse("bbgo").is_err());
    /// assert!(Guess::parse("bbgox").is_err());
    /// ```
    pub fn parse(symbols: &str) -> Result<Self, ProtocolError> {
        let count = symbols.chars().count();
        if count != SLOTS {
            return Err(ProtocolError::InvalidLength(count));
        }

        let mut slots = [Color::Beige; SLOTS];
        for (slot, symbol) in slots.iter_mut().zip(symbols.chars()) {
            *slot = Color::from_symbol(symbol)?;
        }

        Ok(Self(slots))
    }

    /// Get the slot colors
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; SLOTS] {
        &self.0
    }

    /// Get the color in a specific slot (0-4)
    ///
    /// # Panics
    /// Panics if slot >= 5
    #[inline]
    #[must_use]
    pub const fn color_at(&self, slot: usize) -> Color {
        self.0[slot]
    }

    /// Return a copy with one slot replaced
    ///
    /// # Panics
    /// Panics if slot >= 5
    #[must_use]
    pub const fn with_slot(mut self, slot: usize, color: Color) -> Self {
        self.0[slot] = color;
        self
    }

    /// Count how often each color occurs, indexed by wire code
    #[must_use]
    pub fn color_counts(&self) -> [u8; COLOR_COUNT] {
        let mut counts = [0u8; COLOR_COUNT];
        for color in self.0 {
            counts[usize::from(color.code())] += 1;
        }
        counts
    }

    /// Enumerate all 8^5 possible guesses in code order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..COLOR_COUNT.pow(SLOTS as u32)).map(|index| {
            let mut slots = [Color::Beige; SLOTS];
            let mut rest = index;
            for slot in &mut slots {
                *slot = Color::from_code((rest % COLOR_COUNT) as u8);
                rest /= COLOR_COUNT;
            }
            Self(slots)
        })
    }
}

impl FromStr for Guess {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let guess = Guess::parse("bdgow").unwrap();
        assert_eq!(
            guess.colors(),
            &[
                Color::Beige,
                Color::DarkBlue,
                Color::Green,
                Color::Orange,
                Color::White
            ]
        );
    }

    #[test]
    fn parse_uppercase_normalized() {
        assert_eq!(Guess::parse("RSVWB").unwrap(), Guess::parse("rsvwb").unwrap());
    }

    #[test]
    fn parse_invalid_length() {
        assert!(matches!(
            Guess::parse("bbgowd"),
            Err(ProtocolError::InvalidLength(6))
        ));
        assert!(matches!(
            Guess::parse("bbg"),
            Err(ProtocolError::InvalidLength(3))
        ));
        assert!(matches!(Guess::parse(""), Err(ProtocolError::InvalidLength(0))));
    }

    #[test]
    fn parse_invalid_color() {
        assert!(matches!(
            Guess::parse("bbxow"),
            Err(ProtocolError::InvalidColor('x'))
        ));
        assert!(matches!(
            Guess::parse("bbgo1"),
            Err(ProtocolError::InvalidColor('1'))
        ));
    }

    #[test]
    fn with_slot_replaces_one_slot() {
        let guess = Guess::uniform(Color::Red).with_slot(3, Color::Violet);
        assert_eq!(guess.to_string(), "rrrvr");
    }

    #[test]
    fn color_counts_duplicates() {
        let counts = Guess::parse("bbgow").unwrap().color_counts();
        assert_eq!(counts[usize::from(Color::Beige.code())], 2);
        assert_eq!(counts[usize::from(Color::Green.code())], 1);
        assert_eq!(counts[usize::from(Color::Orange.code())], 1);
        assert_eq!(counts[usize::from(Color::White.code())], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), SLOTS);
    }

    #[test]
    fn all_enumerates_every_guess_once() {
        let all: Vec<Guess> = Guess::all().collect();
        assert_eq!(all.len(), 32_768);
        assert_eq!(all[0], Guess::uniform(Color::Beige));
        assert_eq!(all[all.len() - 1], Guess::uniform(Color::White));

        let unique: std::collections::HashSet<Guess> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn display_round_trips() {
        for text in ["bbgow", "wwwww", "rsvdo"] {
            assert_eq!(Guess::parse(text).unwrap().to_string(), text);
        }
    }
}
