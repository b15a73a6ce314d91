//! Script-level primitives for SLP OP_RETURN outputs
//!
//! Integer encoding, pushdata framing and the chunk tokenizer that turns a raw
//! scriptPubKey into the ordered list of pushed byte strings.

pub mod chunks;
pub mod integer;
pub mod pushdata;

pub use chunks::{extract_chunks, Chunk};
pub use integer::{decode_uint, encode_u64_be};
pub use pushdata::{append_pushdata, decode_pushdata_len, encode_pushdata, PushdataMode};

/// OP_RETURN - null-data marker byte
pub const OP_RETURN: u8 = 0x6a;

/// OP_PUSHDATA1 - one-byte length prefix follows
pub const OP_PUSHDATA1: u8 = 0x4c;

/// OP_PUSHDATA2 - two-byte little-endian length prefix follows
pub const OP_PUSHDATA2: u8 = 0x4d;

/// OP_PUSHDATA4 - four-byte little-endian length prefix follows
pub const OP_PUSHDATA4: u8 = 0x4e;

/// SLP protocol tag ("lokad id") carried in the first chunk
pub const LOKAD_ID: &[u8; 4] = b"SLP\x00";

/// Shortest script the tokenizer will consider
pub const MIN_SCRIPT_LEN: usize = 10;
