//! Protocol Module
//!
//! Decodes client requests from a buffered byte stream.
//!
//! ## Wire Format
//!
//! ### Multibulk
//! ```text
//! *<argCount>\r\n
//! $<byteLength>\r\n<rawBytes>\r\n     (repeated argCount times)
//! ```
//!
//! ### Inline
//! ```text
//! <token> <token> ...\r\n
//! ```
//!
//! In both formats the first token is the command name.

mod argument;
mod decoder;
mod encoder;
mod request;

pub use argument::{read_argument, read_argument_with_config};
pub use decoder::{decode_request, Decoder};
pub use encoder::encode_request;
pub use request::Request;

/// Sentinel byte of a multibulk argument count line
pub const MULTIBULK_PREFIX: u8 = b'*';

/// Sentinel byte of an argument length line
pub const BULK_PREFIX: u8 = b'$';

/// Line and payload terminator
pub const CRLF: &[u8] = b"\r\n";
