//! NFT1 child tokens (type 0x41)
//!
//! A child is a single indivisible unit: GENESIS always has decimals 0,
//! quantity 1 and no mint baton, and there is no MINT.

use super::{decode_as, token_id, GenesisFields};
use crate::decoder::DecodeOptions;
use crate::encoder;
use crate::errors::SlpResult;
use crate::types::{Send, SlpMessage, TokenType};

pub const TOKEN_TYPE: TokenType = TokenType::Nft1Child;

/// Build a GENESIS script creating one NFT1 child
pub fn genesis(
    ticker: &[u8],
    name: &[u8],
    document_uri: &[u8],
    document_hash: &[u8],
) -> SlpResult<Vec<u8>> {
    let genesis = GenesisFields {
        ticker,
        name,
        document_uri,
        document_hash,
        decimals: 0,
        mint_baton_vout: None,
        quantity: 1,
    }
    .into_genesis()?;
    encoder::build_genesis(TOKEN_TYPE, &genesis)
}

pub fn send(token_id_bytes: &[u8], amounts: &[u64]) -> SlpResult<Vec<u8>> {
    let send = Send {
        token_id: token_id(token_id_bytes)?,
        amounts: amounts.to_vec(),
    };
    encoder::build_send(TOKEN_TYPE, &send)
}

/// Decode a script, rejecting any other token type
pub fn decode(script: &[u8]) -> SlpResult<SlpMessage> {
    decode_as(TOKEN_TYPE, script, &DecodeOptions::default())
}
