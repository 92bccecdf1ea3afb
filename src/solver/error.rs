/// Errors raised by the deduction engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// Feedback that no secret could have produced
    #[error("inconsistent feedback: {0}")]
    Inconsistent(&'static str),
}
