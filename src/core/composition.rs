//! Color composition of a secret
//!
//! An ordered list of `(color, count)` pairs. Discovery produces one and
//! Placement consumes it; the order is the order colors were discovered.

use super::{COLOR_COUNT, Color, Guess, SLOTS};

/// Ordered color multiset, one entry per distinct color
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composition {
    entries: Vec<(Color, u8)>,
}

impl Composition {
    /// Create an empty composition
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Composition of a known guess, in wire code order
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Color, Composition, Guess};
    ///
    /// let composition = Composition::of(&Guess::parse("bbgow").unwrap());
    /// assert_eq!(composition.count(Color::Beige), 2);
    /// assert_eq!(composition.distinct(), 4);
    /// ```
    #[must_use]
    pub fn of(guess: &Guess) -> Self {
        let counts = guess.color_counts();
        let entries = Color::ALL
            .iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .map(|(&color, count)| (color, count))
            .collect();
        Self { entries }
    }

    /// Add occurrences of a color
    ///
    /// Occurrences of a color already present are merged into its entry.
    pub fn add(&mut self, color: Color, count: u8) {
        if count == 0 {
            return;
        }
        if let Some((_, existing)) = self.entries.iter_mut().find(|(c, _)| *c == color) {
            *existing += count;
        } else {
            self.entries.push((color, count));
        }
    }

    /// Number of occurrences of a color (0 if absent)
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map_or(0, |&(_, count)| count)
    }

    /// Check whether a color occurs at all
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.count(color) > 0
    }

    /// Total number of pegs
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| usize::from(count)).sum()
    }

    /// Check whether the composition fills every slot
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total() == SLOTS
    }

    /// Number of distinct colors
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Per-color counts indexed by wire code, ignoring order
    #[must_use]
    pub fn counts(&self) -> [u8; COLOR_COUNT] {
        let mut counts = [0u8; COLOR_COUNT];
        for &(color, count) in &self.entries {
            counts[usize::from(color.code())] += count;
        }
        counts
    }
}
