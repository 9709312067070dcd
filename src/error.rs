//! Error types for respwire
//!
//! Every variant is fatal to the current decode attempt only. The caller
//! decides whether to reply with a protocol error or drop the connection.

use thiserror::Error;

/// Result type alias using DecodeError
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding a single request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    /// A count or length header is not numeric or lacks its sentinel
    #[error("malformed request: '{}' does not match {expected}\\r\\n", .got.escape_debug())]
    MalformedHeader { expected: &'static str, got: String },

    /// The stream ended (or the read failed) before a line terminator
    #[error("truncated request: stream ended before line terminator")]
    TruncatedInput,

    /// Fewer payload bytes were available than the header declared
    #[error("malformed request: argument length {actual} does not match {declared}")]
    TruncatedArgument { declared: usize, actual: usize },

    /// The two bytes after an argument payload were not CR LF
    #[error("malformed request: argument should end with \\r\\n")]
    MissingTerminator,

    // -------------------------------------------------------------------------
    // Limit Errors
    // -------------------------------------------------------------------------
    /// A declared size is above the configured decoder limit
    #[error("request too large: {what} of {size} exceeds limit {max}")]
    LimitExceeded {
        what: &'static str,
        size: usize,
        max: usize,
    },

    // -------------------------------------------------------------------------
    // Semantic Errors
    // -------------------------------------------------------------------------
    /// A multibulk request whose command name is zero bytes long
    #[error("malformed request: empty command name")]
    EmptyCommand,
}

impl DecodeError {
    /// Build a MalformedHeader error from the raw line bytes
    pub(crate) fn malformed(expected: &'static str, line: &[u8]) -> Self {
        DecodeError::MalformedHeader {
            expected,
            got: String::from_utf8_lossy(line).into_owned(),
        }
    }
}
