//! Chunk tokenizer
//!
//! Splits an OP_RETURN scriptPubKey into the byte strings it pushes and checks
//! that the first one is the SLP protocol tag.

use super::pushdata::{decode_pushdata_len, PushdataMode};
use super::{LOKAD_ID, MIN_SCRIPT_LEN, OP_RETURN};
use crate::errors::{SlpError, SlpResult};
use tracing::{debug, trace};

/// One pushed byte string, borrowed from the script
pub type Chunk<'a> = &'a [u8];

/// Tokenize `script` into its pushed chunks
///
/// Extraction stops at the first position the pushdata reader cannot frame;
/// that position must be the end of the script. The returned list always
/// starts with the 4-byte `SLP\0` tag.
pub fn extract_chunks(script: &[u8], mode: PushdataMode) -> SlpResult<Vec<Chunk<'_>>> {
    if script.is_empty() {
        return Err(SlpError::EmptyScript);
    }
    if script[0] != OP_RETURN {
        return Err(SlpError::NotDataCarrier {
            first_byte: script[0],
        });
    }
    if script.len() < MIN_SCRIPT_LEN {
        return Err(SlpError::ScriptTooSmall { len: script.len() });
    }

    let mut cursor = 1;
    let mut chunks = Vec::new();

    // every framed push moves the cursor forward, so this ends within script.len() rounds
    while let Some(len) = decode_pushdata_len(script, &mut cursor, mode)? {
        let available = script.len() - cursor;
        if len > available {
            return Err(SlpError::TruncatedPushdata {
                offset: cursor,
                declared: len,
                available,
            });
        }
        trace!("Chunk {} at offset {}: {} bytes", chunks.len(), cursor, len);
        chunks.push(&script[cursor..cursor + len]);
        cursor += len;
    }

    if cursor != script.len() {
        debug!(
            "Chunk extraction stopped at offset {} of {}",
            cursor,
            script.len()
        );
        return Err(SlpError::TrailingData {
            offset: cursor,
            len: script.len(),
        });
    }

    if chunks.is_empty() {
        return Err(SlpError::NoChunks);
    }

    if chunks[0] != LOKAD_ID.as_slice() {
        return Err(SlpError::BadProtocolTag);
    }

    debug!("Extracted {} chunks", chunks.len());
    Ok(chunks)
}
