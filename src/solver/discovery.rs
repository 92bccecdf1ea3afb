//! Discovery phase
//!
//! Finds which colors occur in the secret, and how often, without learning
//! their positions. Each probe keeps the colors already proven present and
//! fills every other slot with one candidate color, so any rise in
//! red + white is caused by that candidate alone.

use super::SolverError;
use crate::core::{Color, Composition, Feedback, Guess, SLOTS};

/// Order in which candidate colors are probed
///
/// White goes first, matching the classic all-white opening guess.
pub const PROBE_ORDER: [Color; 8] = [
    Color::White,
    Color::Beige,
    Color::DarkBlue,
    Color::Green,
    Color::Orange,
    Color::Red,
    Color::Black,
    Color::Violet,
];

/// Result of the discovery phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    /// Colors in the secret, in the order they were found
    pub composition: Composition,
    /// Color used to pad unresolved slots
    ///
    /// Proven absent unless every probe raised the peg count, in which case
    /// it is the last color tried (and therefore present).
    pub filler: Color,
}

/// Color discovery state
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Colors proven present, grouped by color
    prefix: Vec<Color>,
    /// Red + white seen on the previous probe
    previous_sum: u8,
    /// Last candidate that did not raise the peg count
    filler: Option<Color>,
    /// Last candidate probed
    last_tried: Option<Color>,
    /// Index into `PROBE_ORDER` of the next candidate
    next_candidate: usize,
}

impl Discovery {
    /// Start discovery with nothing known
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pegs proven present so far
    #[inline]
    #[must_use]
    pub fn found(&self) -> usize {
        self.prefix.len()
    }

    /// Number of probes observed so far
    #[inline]
    #[must_use]
    pub const fn probes(&self) -> usize {
        self.next_candidate
    }

    /// Check whether discovery has nothing left to probe
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found() == SLOTS || self.next_candidate == PROBE_ORDER.len()
    }

    /// The candidate color the next probe tests
    #[must_use]
    pub fn candidate(&self) -> Option<Color> {
        if self.is_complete() {
            None
        } else {
            Some(PROBE_ORDER[self.next_candidate])
        }
    }

    /// Build the next probe, or `None` once discovery is complete
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::solver::Discovery;
    ///
    /// let discovery = Discovery::new();
    /// assert_eq!(discovery.next_guess().unwrap().to_string(), "wwwww");
    /// ```
    #[must_use]
    pub fn next_guess(&self) -> Option<Guess> {
        let candidate = self.candidate()?;
        let mut slots = [candidate; SLOTS];
        slots[..self.prefix.len()].copy_from_slice(&self.prefix);
        Some(Guess::new(slots))
    }

    /// Record the feedback for the probe returned by [`Self::next_guess`]
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` if the feedback cannot come from
    /// an honest server: the peg count dropped, or more than 5 pegs were
    /// found.
    pub fn observe(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let candidate = self
            .candidate()
            .ok_or(SolverError::Inconsistent("discovery already complete"))?;

        let sum = feedback.total();
        let delta = sum
            .checked_sub(self.previous_sum)
            .ok_or(SolverError::Inconsistent("peg count decreased during discovery"))?;

        if self.prefix.len() + usize::from(delta) > SLOTS {
            return Err(SolverError::Inconsistent("more than 5 pegs discovered"));
        }

        if delta > 0 {
            tracing::debug!(color = candidate.name(), count = delta, "color present");
            self.prefix
                .extend(std::iter::repeat_n(candidate, usize::from(delta)));
        } else {
            tracing::debug!(color = candidate.name(), "color absent");
            self.filler = Some(candidate);
        }

        self.previous_sum = sum;
        self.last_tried = Some(candidate);
        self.next_candidate += 1;
        Ok(())
    }

    /// Finish discovery and hand the composition to placement
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` if fewer than 5 pegs were found
    /// or nothing was ever probed.
    pub fn finish(&self) -> Result<Discovered, SolverError> {
        if self.found() != SLOTS {
            return Err(SolverError::Inconsistent(
                "every color probed without finding 5 pegs",
            ));
        }

        let filler = self
            .filler
            .or(self.last_tried)
            .ok_or(SolverError::Inconsistent("no probe was made"))?;

        let mut composition = Composition::new();
        for &color in &self.prefix {
            composition.add(color, 1);
        }

        Ok(Discovered {
            composition,
            filler,
        })
    }
}
