//! Big-endian integer codec
//!
//! Writes are always the canonical 8-byte form. Reads accept 1, 2, 4 or 8 byte
//! buffers so that legacy encodings keep decoding.

use crate::errors::{SlpError, SlpResult};
use byteorder::{BigEndian, ByteOrder};

/// Encode `value` as exactly 8 big-endian bytes
pub fn encode_u64_be(value: u64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, value);
    buf
}

/// Decode an unsigned big-endian integer from a 1, 2, 4 or 8 byte buffer
pub fn decode_uint(buf: &[u8]) -> SlpResult<u64> {
    match buf.len() {
        1 => Ok(u64::from(buf[0])),
        2 => Ok(u64::from(BigEndian::read_u16(buf))),
        4 => Ok(u64::from(BigEndian::read_u32(buf))),
        8 => Ok(BigEndian::read_u64(buf)),
        width => Err(SlpError::IntegerWidth { width }),
    }
}
