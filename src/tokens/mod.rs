//! Token-type façades
//!
//! Each submodule pins one SLP token type and forwards to the shared
//! builder and decoder. Byte fields are taken as slices so callers can pass
//! whatever they hold; widths are checked before anything is encoded.

pub mod fungible;
pub mod nft1_child;
pub mod nft1_group;

use crate::decoder::{self, DecodeOptions};
use crate::errors::{SlpError, SlpResult};
use crate::types::{Genesis, SlpMessage, TokenId, TokenType};
use crate::validate;

/// GENESIS fields shared by all token types
pub(crate) struct GenesisFields<'a> {
    pub ticker: &'a [u8],
    pub name: &'a [u8],
    pub document_uri: &'a [u8],
    pub document_hash: &'a [u8],
    pub decimals: u8,
    pub mint_baton_vout: Option<u8>,
    pub quantity: u64,
}

impl GenesisFields<'_> {
    pub(crate) fn into_genesis(self) -> SlpResult<Genesis> {
        validate::check_document_hash_len(self.document_hash.len())?;
        Ok(Genesis {
            ticker: self.ticker.to_vec(),
            name: self.name.to_vec(),
            document_uri: self.document_uri.to_vec(),
            document_hash: <[u8; 32]>::try_from(self.document_hash).ok(),
            decimals: self.decimals,
            mint_baton_vout: self.mint_baton_vout,
            quantity: self.quantity,
        })
    }
}

pub(crate) fn token_id(bytes: &[u8]) -> SlpResult<TokenId> {
    TokenId::try_from(bytes)
}

/// Decode a script and require it to carry `expected`
pub(crate) fn decode_as(
    expected: TokenType,
    script: &[u8],
    options: &DecodeOptions,
) -> SlpResult<SlpMessage> {
    let msg = decoder::decode_with(script, options)?;
    if msg.token_type != expected {
        return Err(SlpError::TokenTypeMismatch {
            expected,
            actual: msg.token_type,
        });
    }
    Ok(msg)
}
