//! Request definition
//!
//! The decoded form of one client request.

use std::fmt;

use bytes::Bytes;

use super::encode_request;

/// A decoded request
///
/// `body` is the caller's stream, lent back positioned right after the last
/// byte this request consumed. The request never owns or closes it.
pub struct Request<'a, R> {
    /// Command name, always lowercase
    pub name: String,

    /// Arguments after the command name, byte-for-byte as received
    pub args: Vec<Vec<u8>>,

    /// Remaining unread stream
    pub body: &'a mut R,
}

impl<'a, R> Request<'a, R> {
    pub(crate) fn new(name: String, args: Vec<Vec<u8>>, body: &'a mut R) -> Self {
        Self { name, args, body }
    }

    /// Number of arguments, not counting the command name
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get an argument by position
    pub fn arg(&self, index: usize) -> Option<&[u8]> {
        self.args.get(index).map(Vec::as_slice)
    }

    /// Encode this request back into multibulk wire format
    pub fn to_multibulk(&self) -> Bytes {
        encode_request(&self.name, &self.args)
    }

    /// Split into name, arguments and the lent stream
    pub fn into_parts(self) -> (String, Vec<Vec<u8>>, &'a mut R) {
        (self.name, self.args, self.body)
    }
}

impl<R> fmt::Debug for Request<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<_> = self
            .args
            .iter()
            .map(|arg| String::from_utf8_lossy(arg))
            .collect();

        f.debug_struct("Request")
            .field("name", &self.name)
            .field("args", &args)
            .finish_non_exhaustive()
    }
}
