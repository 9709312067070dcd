//! Multibulk encoder
//!
//! Writes a command name and arguments in the framed format the decoder
//! reads: `*<1+n>\r\n` followed by one `$<len>\r\n<bytes>\r\n` per token.

use bytes::{BufMut, Bytes, BytesMut};

use super::{BULK_PREFIX, CRLF, MULTIBULK_PREFIX};

/// Encode a request in multibulk format
pub fn encode_request<A: AsRef<[u8]>>(name: &str, args: &[A]) -> Bytes {
    let payload: usize = args.iter().map(|arg| arg.as_ref().len()).sum();
    let mut buf = BytesMut::with_capacity(16 + name.len() + payload + 16 * args.len());

    put_header(&mut buf, MULTIBULK_PREFIX, args.len() + 1);
    put_bulk(&mut buf, name.as_bytes());
    for arg in args {
        put_bulk(&mut buf, arg.as_ref());
    }

    buf.freeze()
}

fn put_header(buf: &mut BytesMut, prefix: u8, value: usize) {
    buf.put_u8(prefix);
    buf.put_slice(value.to_string().as_bytes());
    buf.put_slice(CRLF);
}

fn put_bulk(buf: &mut BytesMut, data: &[u8]) {
    put_header(buf, BULK_PREFIX, data.len());
    buf.put_slice(data);
    buf.put_slice(CRLF);
}
