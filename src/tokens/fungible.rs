//! Fungible tokens (type 0x01)

use super::{decode_as, token_id, GenesisFields};
use crate::decoder::DecodeOptions;
use crate::encoder;
use crate::errors::SlpResult;
use crate::types::{Mint, Send, SlpMessage, TokenType};

pub const TOKEN_TYPE: TokenType = TokenType::Fungible;

/// Build a GENESIS script creating a fungible token
pub fn genesis(
    ticker: &[u8],
    name: &[u8],
    document_uri: &[u8],
    document_hash: &[u8],
    decimals: u8,
    mint_baton_vout: Option<u8>,
    quantity: u64,
) -> SlpResult<Vec<u8>> {
    let genesis = GenesisFields {
        ticker,
        name,
        document_uri,
        document_hash,
        decimals,
        mint_baton_vout,
        quantity,
    }
    .into_genesis()?;
    encoder::build_genesis(TOKEN_TYPE, &genesis)
}

/// Build a MINT script for an existing fungible token
pub fn mint(
    token_id_bytes: &[u8],
    mint_baton_vout: Option<u8>,
    quantity: u64,
) -> SlpResult<Vec<u8>> {
    let mint = Mint {
        token_id: token_id(token_id_bytes)?,
        mint_baton_vout,
        quantity,
    };
    encoder::build_mint(TOKEN_TYPE, &mint)
}

/// Build a SEND script; `amounts[i]` goes to output `i + 1`
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
