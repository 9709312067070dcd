//! Configuration for the request decoder
//!
//! Limits are checked against declared sizes before anything proportional
//! to them is allocated.

/// Default maximum number of arguments in one multibulk request
pub const DEFAULT_MAX_ARGS: usize = 1024 * 1024;

/// Default maximum length of one argument payload (512 MB)
pub const DEFAULT_MAX_BULK_LEN: usize = 512 * 1024 * 1024;

/// Default maximum length of one protocol line, terminator included (64 KB)
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Decoder limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Max declared argument count, command name included
    pub max_args: usize,

    /// Max declared byte length of a single argument
    pub max_bulk_len: usize,

    /// Max bytes read while looking for a line terminator.
    /// Applies to inline requests and to every header line.
    pub max_line_len: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_args: DEFAULT_MAX_ARGS,
            max_bulk_len: DEFAULT_MAX_BULK_LEN,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl DecoderConfig {
    /// Create a new config builder
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }
}

/// Builder for DecoderConfig
#[derive(Default)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl DecoderConfigBuilder {
    /// Set the maximum argument count
    pub fn max_args(mut self, count: usize) -> Self {
        self.config.max_args = count;
        self
    }

    /// Set the maximum argument length (in bytes)
    pub fn max_bulk_len(mut self, len: usize) -> Self {
        self.config.max_bulk_len = len;
        self
    }

    /// Set the maximum line length (in bytes)
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    pub fn build(self) -> DecoderConfig {
        self.config
    }
}
