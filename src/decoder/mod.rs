//! SLP message decoder
//!
//! Walks the chunk list produced by the tokenizer positionally and interprets
//! it as a GENESIS, MINT or SEND message. Decoding is fail-fast: the first
//! rule violation is returned and no partial message is produced.
//!
//! Field layout after the `SLP\0` tag, token type and transaction type:
//!
//! | Transaction | Fields |
//! |---|---|
//! | GENESIS | ticker, name, document URI, document hash, decimals, mint baton vout, quantity |
//! | MINT | token id, mint baton vout, additional quantity |
//! | SEND | token id, 1..=19 amounts |

use crate::errors::{SlpError, SlpResult};
use crate::script::{decode_uint, extract_chunks, Chunk, PushdataMode};
use crate::types::{Genesis, Message, Mint, Send, SlpMessage, TokenId, TokenType, TransactionType};
use crate::validate;
use tracing::debug;

const GENESIS_CHUNKS: usize = 10;
const MINT_CHUNKS: usize = 6;
const SEND_MIN_CHUNKS: usize = 4;

/// Decoder behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// How unsupported opcodes inside the script are treated
    pub pushdata_mode: PushdataMode,
    /// Reject scripts longer than this many bytes
    pub max_script_len: Option<usize>,
}

impl DecodeOptions {
    /// Strict pushdata handling with no size limit
    pub fn strict() -> Self {
        Self {
            pushdata_mode: PushdataMode::Strict,
            max_script_len: None,
        }
    }

    /// Reject scripts longer than `max` bytes
    pub fn with_max_script_len(mut self, max: usize) -> Self {
        self.max_script_len = Some(max);
        self
    }
}

/// Decode an SLP OP_RETURN scriptPubKey with default options
pub fn decode(script: &[u8]) -> SlpResult<SlpMessage> {
    decode_with(script, &DecodeOptions::default())
}

/// Decode an SLP OP_RETURN scriptPubKey
pub fn decode_with(script: &[u8], options: &DecodeOptions) -> SlpResult<SlpMessage> {
    let chunks = tokenize(script, options)?;
    let mut cursor = ChunkCursor::new(&chunks);

    let token_type = read_token_type(&mut cursor)?;

    let tx_type_chunk = cursor.advance("transaction_type")?;
    let transaction_type = TransactionType::from_bytes(tx_type_chunk).ok_or_else(|| {
        SlpError::UnknownTransactionType {
            value: String::from_utf8_lossy(tx_type_chunk).into_owned(),
        }
    })?;

    debug!(
        "Decoding SLP {} message: token_type={}, chunks={}",
        transaction_type,
        token_type,
        chunks.len()
    );

    let message = match transaction_type {
        TransactionType::Genesis => Message::Genesis(parse_genesis(&mut cursor, token_type)?),
        TransactionType::Mint => Message::Mint(parse_mint(&mut cursor, token_type)?),
        TransactionType::Send => Message::Send(parse_send(&mut cursor)?),
    };

    Ok(SlpMessage::new(token_type, message))
}

/// Read only the token type of an SLP script
///
/// The transaction body is not validated.
pub fn token_type_of(script: &[u8]) -> SlpResult<TokenType> {
    let chunks = tokenize(script, &DecodeOptions::default())?;
    read_token_type(&mut ChunkCursor::new(&chunks))
}

fn tokenize<'a>(script: &'a [u8], options: &DecodeOptions) -> SlpResult<Vec<Chunk<'a>>> {
    if let Some(max) = options.max_script_len {
        if script.len() > max {
            return Err(SlpError::ScriptTooLarge {
                len: script.len(),
                max,
            });
        }
    }
    extract_chunks(script, options.pushdata_mode)
}

/// Position in the chunk list, starting on the protocol tag
struct ChunkCursor<'c, 'a> {
    chunks: &'c [Chunk<'a>],
    pos: usize,
}

impl<'c, 'a> ChunkCursor<'c, 'a> {
    fn new(chunks: &'c [Chunk<'a>]) -> Self {
        Self { chunks, pos: 0 }
    }

    /// Move to the next chunk and return it
    fn advance(&mut self, field: &'static str) -> SlpResult<Chunk<'a>> {
        self.pos += 1;
        self.chunks
            .get(self.pos)
            .copied()
            .ok_or(SlpError::UnexpectedEnd { field })
    }

    /// Chunks after the current position
    fn remaining(&self) -> &'c [Chunk<'a>] {
        self.chunks.get(self.pos + 1..).unwrap_or(&[])
    }

    fn total(&self) -> usize {
        self.chunks.len()
    }
}

fn read_token_type(cursor: &mut ChunkCursor<'_, '_>) -> SlpResult<TokenType> {
    let chunk = cursor.advance("token_type")?;
    if chunk.len() != 1 && chunk.len() != 2 {
        return Err(SlpError::BadFieldLength {
            field: "token_type",
            len: chunk.len(),
        });
    }
    TokenType::try_from(decode_uint(chunk)?)
}

fn parse_genesis(cursor: &mut ChunkCursor<'_, '_>, token_type: TokenType) -> SlpResult<Genesis> {
    if cursor.total() != GENESIS_CHUNKS {
        return Err(SlpError::WrongChunkCount {
            transaction_type: "GENESIS",
            expected: "10",
            actual: cursor.total(),
        });
    }

    let ticker = cursor.advance("ticker")?.to_vec();
    let name = cursor.advance("name")?.to_vec();
    let document_uri = cursor.advance("document_uri")?.to_vec();

    let hash_chunk = cursor.advance("document_hash")?;
    validate::check_document_hash_len(hash_chunk.len())?;
    let document_hash = <[u8; 32]>::try_from(hash_chunk).ok();

    let decimals_chunk = cursor.advance("decimals")?;
    if decimals_chunk.len() != 1 {
        return Err(SlpError::BadFieldLength {
            field: "decimals",
            len: decimals_chunk.len(),
        });
    }
    let decimals = decode_uint(decimals_chunk)?;
    validate::check_decimals(decimals)?;

    let mint_baton_vout = read_mint_baton_vout(cursor)?;
    let quantity = read_quantity(cursor, "quantity")?;

    validate::check_nft_child_genesis(
        token_type,
        decimals,
        mint_baton_vout.map(u64::from),
        quantity,
    )?;

    Ok(Genesis {
        ticker,
        name,
        document_uri,
        document_hash,
        decimals: decimals as u8,
        mint_baton_vout,
        quantity,
    })
}

fn parse_mint(cursor: &mut ChunkCursor<'_, '_>, token_type: TokenType) -> SlpResult<Mint> {
    validate::check_mint_allowed(token_type)?;

    if cursor.total() != MINT_CHUNKS {
        return Err(SlpError::WrongChunkCount {
            transaction_type: "MINT",
            expected: "6",
            actual: cursor.total(),
        });
    }

    let token_id = TokenId::try_from(cursor.advance("token_id")?)?;
    let mint_baton_vout = read_mint_baton_vout(cursor)?;
    let quantity = read_quantity(cursor, "additional_quantity")?;

    Ok(Mint {
        token_id,
        mint_baton_vout,
        quantity,
    })
}

fn parse_send(cursor: &mut ChunkCursor<'_, '_>) -> SlpResult<Send> {
    if cursor.total() < SEND_MIN_CHUNKS {
        return Err(SlpError::WrongChunkCount {
            transaction_type: "SEND",
            expected: "at least 4",
            actual: cursor.total(),
        });
    }

    let token_id = TokenId::try_from(cursor.advance("token_id")?)?;

    let amounts = cursor
        .remaining()
        .iter()
        .map(|chunk| {
            if chunk.len() != 8 {
                return Err(SlpError::BadFieldLength {
                    field: "amount",
                    len: chunk.len(),
                });
            }
            decode_uint(chunk)
        })
        .collect::<SlpResult<Vec<u64>>>()?;

    validate::check_amount_count(amounts.len())?;

    Ok(Send { token_id, amounts })
}

/// Empty chunk means no baton; otherwise a single byte >= 2
fn read_mint_baton_vout(cursor: &mut ChunkCursor<'_, '_>) -> SlpResult<Option<u8>> {
    let chunk = cursor.advance("mint_baton_vout")?;
    match chunk.len() {
        0 => Ok(None),
        1 => {
            let vout = decode_uint(chunk)?;
            validate::check_mint_baton_vout(vout)?;
            Ok(Some(chunk[0]))
        }
        len => Err(SlpError::BadFieldLength {
            field: "mint_baton_vout",
            len,
        }),
    }
}

fn read_quantity(cursor: &mut ChunkCursor<'_, '_>, field: &'static str) -> SlpResult<u64> {
    let chunk = cursor.advance(field)?;
    if chunk.len() != 8 {
        return Err(SlpError::BadFieldLength {
            field,
            len: chunk.len(),
        });
    }
    decode_uint(chunk)
}
