//! Peg color alphabet
//!
//! The game uses a fixed alphabet of 8 colors. Each color has a canonical
//! 3-bit wire code and a single-letter symbol used on the command line.

use crate::protocol::ProtocolError;
use std::fmt;

/// Number of colors in the alphabet
pub const COLOR_COUNT: usize = 8;

/// One of the 8 peg colors
///
/// The discriminant is the 3-bit code sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Beige = 0,
    DarkBlue = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
    Black = 5,
    Violet = 6,
    White = 7,
}

impl Color {
    /// All colors in code order
    pub const ALL: [Self; COLOR_COUNT] = [
        Self::Beige,
        Self::DarkBlue,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Black,
        Self::Violet,
        Self::White,
    ];

    /// The 3-bit wire code (0-7)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a color from its wire code
    ///
    /// Only the low 3 bits are used, so every byte maps to a color.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        Self::ALL[(code & 0x7) as usize]
    }

    /// The single-letter command line symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Beige => 'b',
            Self::DarkBlue => 'd',
            Self::Green => 'g',
            Self::Orange => 'o',
            Self::Red => 'r',
            Self::Black => 's',
            Self::Violet => 'v',
            Self::White => 'w',
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beige => "beige",
            Self::DarkBlue => "darkblue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Black => "black",
            Self::Violet => "violet",
            Self::White => "white",
        }
    }

    /// Parse a color from its symbol
    ///
    /// # Errors
    /// Returns `ProtocolError::InvalidColor` for any character outside
    /// `{b,d,g,o,r,s,v,w}`. Uppercase symbols are accepted.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::from_symbol('w').unwrap(), Color::White);
    /// assert_eq!(Color::from_symbol('S').unwrap(), Color::Black);
    /// assert!(Color::from_symbol('x').is_err());
    /// ```
    pub const fn from_symbol(symbol: char) -> Result<Self, ProtocolError> {
        match symbol.to_ascii_lowercase() {
            'b' => Ok(Self::Beige),
            'd' => Ok(Self::DarkBlue),
            'g' => Ok(Self::Green),
            'o' => Ok(Self::Orange),
            'r' => Ok(Self::Red),
            's' => Ok(Self::Black),
            'v' => Ok(Self::Violet),
            'w' => Ok(Self::White),
            _ => Err(ProtocolError::InvalidColor(symbol)),
        }
    }
}

impl TryFrom<char> for Color {
    type Error = ProtocolError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
