//! Main solver interface
//!
//! Drives the two deduction phases in order and hands the discovered
//! composition from one to the other.

use super::discovery::{Discovered, Discovery};
use super::placement::Placement;
use super::SolverError;
use crate::core::{Feedback, Guess};

/// Which phase the solver is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Finding which colors occur
    Discovering,
    /// Finding where each color goes
    Placing,
    /// The secret is known
    Solved,
}

#[derive(Debug, Clone)]
enum State {
    Discovering(Discovery),
    Placing(Placement),
    Solved(Guess),
}

/// Two-phase code breaker
///
/// Ask for a guess with [`Solver::next_guess`], report its feedback with
/// [`Solver::observe`], and repeat until `next_guess` returns `None`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Feedback, Guess};
/// use mastermind_solver::solver::Solver;
///
/// let secret = Guess::parse("rsvdo").unwrap();
/// let mut solver = Solver::new();
/// while let Some(guess) = solver.next_guess().unwrap() {
///     solver.observe(&guess, Feedback::score(&guess, &secret)).unwrap();
/// }
/// assert_eq!(solver.solution(), Some(secret));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    state: State,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver at the start of discovery
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Discovering(Discovery::new()),
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.state {
            State::Discovering(_) => Phase::Discovering,
            State::Placing(_) => Phase::Placing,
            State::Solved(_) => Phase::Solved,
        }
    }

    /// The secret, once solved
    #[must_use]
    pub const fn solution(&self) -> Option<Guess> {
        match self.state {
            State::Solved(guess) => Some(guess),
            _ => None,
        }
    }

    /// Get the next guess to send
    ///
    /// Advances to the next phase when the current one has nothing left to
    /// probe. Returns `None` once the secret is known.
    ///
    /// # Errors
    /// Returns `SolverError` if discovery ended without a full composition.
    pub fn next_guess(&mut self) -> Result<Option<Guess>, SolverError> {
        loop {
            match &self.state {
                State::Discovering(discovery) => {
                    if let Some(guess) = discovery.next_guess() {
                        return Ok(Some(guess));
                    }
                    let discovered = discovery.finish()?;
                    self.start_placement(&discovered);
                }
                State::Placing(placement) => {
                    if let Some(guess) = placement.next_guess() {
                        return Ok(Some(guess));
                    }
                    let solution = placement.solution();
                    tracing::info!(%solution, "placement complete");
                    self.state = State::Solved(solution);
                }
                State::Solved(_) => return Ok(None),
            }
        }
    }

    /// Report the server's feedback for `guess`
    ///
    /// A fully correct feedback ends the game whatever the phase.
    ///
    /// # Errors
    /// Returns `SolverError` if the feedback is inconsistent with earlier
    /// observations.
    pub fn observe(&mut self, guess: &Guess, feedback: Feedback) -> Result<(), SolverError> {
        if feedback.is_solved() {
            self.state = State::Solved(*guess);
            return Ok(());
        }

        match &mut self.state {
            State::Discovering(discovery) => discovery.observe(feedback),
            State::Placing(placement) => placement.observe(feedback),
            State::Solved(_) => Err(SolverError::Inconsistent("game already solved")),
        }
    }

    fn start_placement(&mut self, discovered: &Discovered) {
        let placement = Placement::new(discovered);
        tracing::info!(
            composition = ?discovered.composition.iter().collect::<Vec<_>>(),
            filler = placement.filler().name(),
            "discovery complete"
        );
        self.state = State::Placing(placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    /// Play a full game against a known secret, returning every probe
    fn play(secret: &Guess) -> (Solver, Vec<Guess>) {
        let mut solver = Solver::new();
        let mut probes = Vec::new();
        while let Some(guess) = solver.next_guess().unwrap() {
            solver
                .observe(&guess, Feedback::score(&guess, secret))
                .unwrap();
            probes.push(guess);
        }
        (solver, probes)
    }

    #[test]
    fn starts_discovering() {
        let solver = Solver::new();
        assert_eq!(solver.phase(), Phase::Discovering);
        assert_eq!(solver.solution(), None);
    }

    #[test]
    fn uniform_secret_solved_in_one_round() {
        let (solver, probes) = play(&Guess::uniform(Color::White));
        assert_eq!(probes.len(), 1);
        assert_eq!(solver.phase(), Phase::Solved);
        assert_eq!(solver.solution(), Some(Guess::uniform(Color::White)));
    }

    #[test]
    fn mixed_secret_round_count() {
        let secret = Guess::parse("bbgow").unwrap();
        let (solver, probes) = play(&secret);
        // 5 discovery probes, 9 placement probes
        assert_eq!(probes.len(), 14);
        assert_eq!(probes.last(), Some(&secret));
        assert_eq!(solver.solution(), Some(secret));
    }

    #[test]
    fn transitions_to_placing_after_discovery() {
        let secret = Guess::parse("bbgow").unwrap();
        let mut solver = Solver::new();
        for _ in 0..5 {
            let guess = solver.next_guess().unwrap().unwrap();
            solver
                .observe(&guess, Feedback::score(&guess, &secret))
                .unwrap();
        }
        assert_eq!(solver.phase(), Phase::Discovering);
        assert_eq!(
            solver.next_guess().unwrap(),
            Some(Guess::parse("wdddd").unwrap())
        );
        assert_eq!(solver.phase(), Phase::Placing);
    }

    #[test]
    fn solved_feedback_ends_discovery_early() {
        // wwbbb is hit exactly by the second discovery probe
        let secret = Guess::parse("wwbbb").unwrap();
        let (solver, probes) = play(&secret);
        assert_eq!(probes.len(), 2);
        assert_eq!(solver.solution(), Some(secret));
    }

    #[test]
    fn every_secret_solved_within_budget() {
        for secret in Guess::all() {
            let (solver, probes) = play(&secret);
            assert_eq!(solver.solution(), Some(secret));
            assert!(probes.len() <= 23, "{secret}: {} rounds", probes.len());
        }
    }

    #[test]
    fn observe_after_solved_is_error() {
        let (mut solver, _) = play(&Guess::uniform(Color::Red));
        let guess = Guess::uniform(Color::Red);
        assert!(solver.observe(&guess, Feedback::pegs(0, 0)).is_err());
    }
}
