//! Error types for Confluence-dialect parsing.

/// Error from a block parser that cannot make progress on its input.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line handed to the parser does not match the block syntax it
    /// accepts.
    #[error("not a figure block: {line:?}")]
    NotAFigureBlock {
        /// The offending source line.
        line: String,
    },
}
