//! # respwire
//!
//! Blocking decoder for client requests sent to in-memory key-value servers:
//! - Multibulk (length-prefixed, binary-safe) requests
//! - Legacy inline (space-delimited, single line) requests
//! - Precise, recoverable errors on malformed framing
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Caller-owned buffered stream (BufRead)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ &mut R
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Request Decoder                           │
//! │              (first line picks the format)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │ '*'                     │ otherwise
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Argument   │          │   Inline    │
//!   │ Reader (xN) │          │   split     │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//!          Request { name, args, body: &mut R }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, Result};
pub use config::DecoderConfig;
pub use protocol::{decode_request, read_argument, encode_request, Decoder, Request};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
