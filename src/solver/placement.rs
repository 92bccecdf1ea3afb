//! Placement phase
//!
//! Finds the exact slot of every discovered color. Starting from an
//! all-filler guess, one unfixed slot at a time is switched to the color
//! being placed; a rise in red pegs proves that slot holds the color.

use super::SolverError;
use super::discovery::Discovered;
use crate::core::{Color, Feedback, Guess, SLOTS};

/// Slot placement state
#[derive(Debug, Clone)]
pub struct Placement {
    /// Colors still to place with their occurrence counts, in discovery order
    runs: Vec<(Color, u8)>,
    /// Index of the run being placed
    run: usize,
    /// Occurrences of the current run not yet placed
    remaining: u8,
    /// Slot the next probe tests
    cursor: usize,
    /// Slots whose color is known
    fixed: [bool; SLOTS],
    /// Best known arrangement; unfixed slots hold the filler
    working: Guess,
    /// Red pegs of `working`
    last_red: u8,
    filler: Color,
    probes: usize,
}

impl Placement {
    /// Start placement from a discovery result
    ///
    /// If the filler itself occurs in the secret, its run is not probed:
    /// its slots are whatever is left once every other run is placed. An
    /// all-filler guess then scores one red per filler occurrence.
    #[must_use]
    pub fn new(discovered: &Discovered) -> Self {
        let filler = discovered.filler;
        let runs: Vec<(Color, u8)> = discovered
            .composition
            .iter()
            .filter(|&(color, _)| color != filler)
            .collect();
        let remaining = runs.first().map_or(0, |&(_, count)| count);

        Self {
            runs,
            run: 0,
            remaining,
            cursor: 0,
            fixed: [false; SLOTS],
            working: Guess::uniform(filler),
            last_red: discovered.composition.count(filler),
            filler,
            probes: 0,
        }
    }

    /// Check whether every run has been placed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.run >= self.runs.len()
    }

    /// Number of probes observed so far
    #[inline]
    #[must_use]
    pub const fn probes(&self) -> usize {
        self.probes
    }

    /// Slots whose color is known
    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &[bool; SLOTS] {
        &self.fixed
    }

    /// The color used to pad unresolved slots
    #[inline]
    #[must_use]
    pub const fn filler(&self) -> Color {
        self.filler
    }

    /// The current arrangement
    ///
    /// Once placement is complete this is the secret.
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> Guess {
        self.working
    }

    /// Build the next probe, or `None` once every run is placed
    #[must_use]
    pub fn next_guess(&self) -> Option<Guess> {
        let &(color, _) = self.runs.get(self.run)?;
        Some(self.working.with_slot(self.cursor, color))
    }

    /// Record the feedback for the probe returned by [`Self::next_guess`]
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` if no unfixed slot is left for an
    /// occurrence the composition promised.
    pub fn observe(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let &(color, _) = self
            .runs
            .get(self.run)
            .ok_or(SolverError::Inconsistent("placement already complete"))?;
        let slot = self.cursor;
        self.probes += 1;

        if feedback.red > self.last_red {
            tracing::debug!(color = color.name(), slot, "slot fixed");
            self.fixed[slot] = true;
            self.working = self.working.with_slot(slot, color);
            self.last_red = feedback.red;
            self.remaining -= 1;

            if self.remaining == 0 {
                return self.next_run();
            }
        }

        self.cursor = self
            .next_unfixed(slot + 1)
            .ok_or(SolverError::Inconsistent("ran out of slots for a color"))?;
        Ok(())
    }

    /// Move on to the next run, starting from the leftmost unfixed slot
    fn next_run(&mut self) -> Result<(), SolverError> {
        self.run += 1;
        let Some(&(_, count)) = self.runs.get(self.run) else {
            return Ok(());
        };

        self.remaining = count;
        self.cursor = self
            .next_unfixed(0)
            .ok_or(SolverError::Inconsistent("no unfixed slot left for a color"))?;
        Ok(())
    }

    fn next_unfixed(&self, from: usize) -> Option<usize> {
        (from..SLOTS).find(|&slot| !self.fixed[slot])
    }
}
