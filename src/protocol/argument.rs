//! Argument Reader
//!
//! Reads one binary-safe argument:
//!
//! ```text
//! ┌──────────┬──────────┬──────┬───────────────────┬──────┐
//! │  '$'     │  length  │ CRLF │  payload (length) │ CRLF │
//! └──────────┴──────────┴──────┴───────────────────┴──────┘
//! ```

use std::io::{BufRead, Read};

use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use super::{BULK_PREFIX, CRLF};

/// Upper bound on the buffer reserved up front for a payload.
/// Larger payloads grow the buffer as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

const EXPECTED_LENGTH: &str = "$<length>";

/// Why a line could not be read
pub(crate) enum LineError {
    /// Stream ended or failed before the terminator
    Incomplete,
    /// No terminator within the configured line limit
    TooLong,
}

/// Read bytes up to and including the next LF into `line`.
///
/// Never consumes more than `max_len` bytes from the reader. A line that
/// fills the limit is only too long if more bytes follow; otherwise the
/// stream simply ended.
pub(crate) fn read_line<R: BufRead>(
    reader: &mut R,
    max_len: usize,
    line: &mut Vec<u8>,
) -> std::result::Result<(), LineError> {
    let result = reader.by_ref().take(max_len as u64).read_until(b'\n', line);

    match result {
        Ok(_) if line.last() == Some(&b'\n') => Ok(()),
        Ok(n) if n >= max_len && has_more(reader) => Err(LineError::TooLong),
        _ => Err(LineError::Incomplete),
    }
}

fn has_more<R: BufRead>(reader: &mut R) -> bool {
    reader.fill_buf().map(|buf| !buf.is_empty()).unwrap_or(false)
}

/// Parse a `<sentinel><digits>\r\n` header line.
///
/// Only the sentinel and exactly one CRLF are stripped; anything else
/// around the digits (spaces, signs, bare LF) is rejected.
pub(crate) fn parse_header(line: &[u8], sentinel: u8) -> Option<usize> {
    let digits = line.strip_prefix(&[sentinel])?.strip_suffix(CRLF)?;

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Read one argument using the default limits
pub fn read_argument<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    read_argument_with_config(reader, &DecoderConfig::default())
}

/// Read one argument, enforcing the given limits
///
/// The reader must be positioned at the start of a `$<length>` line.
/// Returns exactly `length` payload bytes, unmodified.
pub fn read_argument_with_config<R: BufRead>(
    reader: &mut R,
    config: &DecoderConfig,
) -> Result<Vec<u8>> {
    // Length header
    let mut line = Vec::new();
    match read_line(reader, config.max_line_len, &mut line) {
        Ok(()) => {}
        Err(LineError::Incomplete) => return Err(DecodeError::malformed(EXPECTED_LENGTH, &line)),
        Err(LineError::TooLong) => {
            return Err(DecodeError::LimitExceeded {
                what: "line length",
                size: line.len(),
                max: config.max_line_len,
            })
        }
    }

    let len = parse_header(&line, BULK_PREFIX)
        .ok_or_else(|| DecodeError::malformed(EXPECTED_LENGTH, &line))?;

    if len > config.max_bulk_len {
        return Err(DecodeError::LimitExceeded {
            what: "argument length",
            size: len,
            max: config.max_bulk_len,
        });
    }

    // Payload
    let mut data = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    let read = reader.by_ref().take(len as u64).read_to_end(&mut data);
    if read.is_err() || data.len() < len {
        return Err(DecodeError::TruncatedArgument {
            declared: len,
            actual: data.len(),
        });
    }

    // Trailing CR then LF, one byte at a time
    expect_byte(reader, b'\r')?;
    expect_byte(reader, b'\n')?;

    Ok(data)
}

fn expect_byte<R: Read>(reader: &mut R, expected: u8) -> Result<()> {
    let mut byte = [0u8; 1];
    match reader.read_exact(&mut byte) {
        Ok(()) if byte[0] == expected => Ok(()),
        _ => Err(DecodeError::MissingTerminator),
    }
}
