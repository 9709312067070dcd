//! Request Decoder
//!
//! Reads the first line of a request to pick the wire format, then either
//! drives the Argument Reader (multibulk) or splits the line (inline).

use std::io::BufRead;

use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use super::argument::{parse_header, read_argument_with_config, read_line, LineError};
use super::{Request, MULTIBULK_PREFIX};

/// Upper bound on argument slots reserved up front from a declared count
const ARGS_PREALLOC_LIMIT: usize = 1024;

const EXPECTED_COUNT: &str = "*<argCount>";

/// Decode one request using the default limits
pub fn decode_request<R: BufRead>(reader: &mut R) -> Result<Request<'_, R>> {
    Decoder::default().decode(reader)
}

/// Request decoder
///
/// Stateless between calls; all position state lives in the reader.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the given limits
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Get the active limits
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode exactly one request from `reader`
    ///
    /// On success the returned request borrows `reader` as its body,
    /// positioned after the last consumed byte. On error nothing partial is
    /// returned and the stream position is unspecified.
    pub fn decode<'a, R: BufRead>(&self, reader: &'a mut R) -> Result<Request<'a, R>> {
        let mut line = Vec::new();
        match read_line(reader, self.config.max_line_len, &mut line) {
            Ok(()) => {}
            Err(LineError::Incomplete) => return Err(DecodeError::TruncatedInput),
            Err(LineError::TooLong) => {
                return Err(DecodeError::LimitExceeded {
                    what: "line length",
                    size: line.len(),
                    max: self.config.max_line_len,
                })
            }
        }

        let multibulk = line.first() == Some(&MULTIBULK_PREFIX);
        let (name, args) = if multibulk {
            self.decode_multibulk(reader, &line)?
        } else {
            decode_inline(&line)
        };

        let kind = if multibulk { "multibulk" } else { "inline" };
        tracing::trace!(kind, args = args.len(), "Decoded request {}", name);

        Ok(Request::new(name, args, reader))
    }

    /// Read one argument with this decoder's limits
    pub fn read_argument<R: BufRead>(&self, reader: &mut R) -> Result<Vec<u8>> {
        read_argument_with_config(reader, &self.config)
    }

    fn decode_multibulk<R: BufRead>(
        &self,
        reader: &mut R,
        header: &[u8],
    ) -> Result<(String, Vec<Vec<u8>>)> {
        // A request always carries at least the command name
        let count = parse_header(header, MULTIBULK_PREFIX)
            .filter(|&count| count > 0)
            .ok_or_else(|| DecodeError::malformed(EXPECTED_COUNT, header))?;

        if count > self.config.max_args {
            return Err(DecodeError::LimitExceeded {
                what: "argument count",
                size: count,
                max: self.config.max_args,
            });
        }

        let first = self.read_argument(reader)?;
        if first.is_empty() {
            return Err(DecodeError::EmptyCommand);
        }
        let name = String::from_utf8_lossy(&first).to_lowercase();

        let mut args = Vec::with_capacity((count - 1).min(ARGS_PREALLOC_LIMIT));
        for _ in 1..count {
            args.push(self.read_argument(reader)?);
        }

        Ok((name, args))
    }
}

/// Split an inline line on single spaces.
///
/// Only the terminator is stripped (LF, then an optional CR). Consecutive
/// spaces produce empty arguments. An empty line yields an empty name.
fn decode_inline(line: &[u8]) -> (String, Vec<Vec<u8>>) {
    let text = line.strip_suffix(b"\n").unwrap_or(line);
    let text = text.strip_suffix(b"\r").unwrap_or(text);

    let mut tokens = text.split(|&b| b == b' ');
    let name = tokens
        .next()
        .map(|token| String::from_utf8_lossy(token).to_lowercase())
        .unwrap_or_default();
    let args = tokens.map(<[u8]>::to_vec).collect();

    (name, args)
}
