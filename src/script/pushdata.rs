//! Pushdata framing
//!
//! Encodes byte strings with the script length-prefix convention and reads
//! the declared length back off a script cursor.

use super::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use crate::errors::{SlpError, SlpResult};
use byteorder::{ByteOrder, LittleEndian};

/// How the length reader treats opcodes it cannot frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushdataMode {
    /// Unsupported opcodes and overrunning direct pushes end chunk extraction
    #[default]
    Permissive,
    /// Unsupported opcodes and overrunning pushes are hard errors
    Strict,
}

/// Frame `data` with the shortest pushdata prefix SLP uses
pub fn encode_pushdata(data: &[u8]) -> SlpResult<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() + 5);
    append_pushdata(&mut out, data)?;
    Ok(out)
}

/// Append `data` to `out` with its pushdata prefix
///
/// Empty data is written as `OP_PUSHDATA1 0x00` rather than OP_0, and a
/// length of exactly 0xff already moves to OP_PUSHDATA2. Lengths 0x4c and
/// 0x4d take OP_PUSHDATA1 since a bare length byte there reads as an opcode.
/// This departs from the classic SLP push table, which writes them bare.
pub fn append_pushdata(out: &mut Vec<u8>, data: &[u8]) -> SlpResult<()> {
    let len = data.len();
    match len {
        0 => out.extend_from_slice(&[OP_PUSHDATA1, 0x00]),
        1..=0x4b => out.push(len as u8),
        0x4c..=0xfe => out.extend_from_slice(&[OP_PUSHDATA1, len as u8]),
        0xff..=0xffff => {
            let mut prefix = [0u8; 2];
            LittleEndian::write_u16(&mut prefix, len as u16);
            out.push(OP_PUSHDATA2);
            out.extend_from_slice(&prefix);
        }
        _ => {
            let len32 = u32::try_from(len).map_err(|_| SlpError::LengthOverflow { len })?;
            let mut prefix = [0u8; 4];
            LittleEndian::write_u32(&mut prefix, len32);
            out.push(OP_PUSHDATA4);
            out.extend_from_slice(&prefix);
        }
    }
    out.extend_from_slice(data);
    Ok(())
}

/// Read one pushdata header at `*cursor`
///
/// Returns `Ok(Some(len))` with the cursor moved past the opcode and any
/// length prefix, or `Ok(None)` with the cursor untouched when no further
/// chunk can be framed. In permissive mode the end of the script, an
/// unsupported opcode (OP_0 included) and a direct push that overruns the
/// script all produce `None`. Strict mode reports the latter two as errors.
///
/// The declared body of an OP_PUSHDATA1/2/4 push is not checked here.
pub fn decode_pushdata_len(
    script: &[u8],
    cursor: &mut usize,
    mode: PushdataMode,
) -> SlpResult<Option<usize>> {
    let offset = *cursor;
    if offset >= script.len() {
        return Ok(None);
    }

    let opcode = script[offset];
    let rest = script.len() - offset - 1;

    let (len, header) = match opcode {
        0x01..=0x4b => {
            let len = opcode as usize;
            if len > rest {
                return overrun(mode, offset, len, rest);
            }
            (len, 1)
        }
        OP_PUSHDATA1 | OP_PUSHDATA2 | OP_PUSHDATA4 => {
            let width = match opcode {
                OP_PUSHDATA1 => 1,
                OP_PUSHDATA2 => 2,
                _ => 4,
            };
            // permissive reads also require at least one byte past the prefix
            let short = match mode {
                PushdataMode::Permissive => rest <= width,
                PushdataMode::Strict => rest < width,
            };
            if short {
                return overrun(mode, offset, width, rest);
            }
            let prefix = &script[offset + 1..offset + 1 + width];
            let len = match width {
                1 => prefix[0] as usize,
                2 => LittleEndian::read_u16(prefix) as usize,
                _ => LittleEndian::read_u32(prefix) as usize,
            };
            (len, 1 + width)
        }
        _ => {
            return match mode {
                PushdataMode::Permissive => Ok(None),
                PushdataMode::Strict => Err(SlpError::UnsupportedOpcode { opcode, offset }),
            };
        }
    };

    *cursor = offset + header;
    Ok(Some(len))
}

fn overrun(
    mode: PushdataMode,
    offset: usize,
    declared: usize,
    available: usize,
) -> SlpResult<Option<usize>> {
    match mode {
        PushdataMode::Permissive => Ok(None),
        PushdataMode::Strict => Err(SlpError::TruncatedPushdata {
            offset,
            declared,
            available,
        }),
    }
}
