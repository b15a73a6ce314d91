//! NFT1 group tokens (type 0x81)
//!
//! A group token is fungible; spending it into an NFT1 child GENESIS ties the
//! child to the group.

use super::{decode_as, token_id, GenesisFields};
use crate::decoder::DecodeOptions;
use crate::encoder;
use crate::errors::SlpResult;
use crate::types::{Mint, Send, SlpMessage, TokenType};

pub const TOKEN_TYPE: TokenType = TokenType::Nft1Group;

/// Build a GENESIS script creating an NFT1 group token
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

/// Build a MINT script for an existing NFT1 group token
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
