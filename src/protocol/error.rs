//! Protocol errors

/// Errors raised while turning user input into wire messages
///
/// These are always detected before any byte is written to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A symbol outside `{b,d,g,o,r,s,v,w}`
    #[error("bad color {0:?} in guess sequence")]
    InvalidColor(char),

    /// A guess that does not have exactly 5 symbols
    #[error("guess must have exactly 5 colors, got {0}")]
    InvalidLength(usize),
}
