//! Field rules shared by the decoder and the encoder
//!
//! Both directions call the same checks so a message that encodes will
//! decode, and the other way round.

use crate::errors::{SlpError, SlpResult};
use crate::types::TokenType;

pub const MAX_DECIMALS: u64 = 9;
pub const MIN_MINT_BATON_VOUT: u64 = 2;
pub const MAX_MINT_BATON_VOUT: u64 = 0xff;
pub const MAX_SEND_AMOUNTS: usize = 19;

pub fn check_decimals(decimals: u64) -> SlpResult<()> {
    if decimals > MAX_DECIMALS {
        return Err(SlpError::DecimalsOutOfRange { decimals });
    }
    Ok(())
}

pub fn check_mint_baton_vout(vout: u64) -> SlpResult<()> {
    if !(MIN_MINT_BATON_VOUT..=MAX_MINT_BATON_VOUT).contains(&vout) {
        return Err(SlpError::MintBatonVoutOutOfRange { vout });
    }
    Ok(())
}

pub fn check_amount_count(count: usize) -> SlpResult<()> {
    if count == 0 || count > MAX_SEND_AMOUNTS {
        return Err(SlpError::AmountCountOutOfRange { count });
    }
    Ok(())
}

/// Document hash is either absent or a 32-byte digest
pub fn check_document_hash_len(len: usize) -> SlpResult<()> {
    if len != 0 && len != 32 {
        return Err(SlpError::BadFieldLength {
            field: "document_hash",
            len,
        });
    }
    Ok(())
}

/// NFT1 children are indivisible single units without a mint baton
pub fn check_nft_child_genesis(
    token_type: TokenType,
    decimals: u64,
    mint_baton_vout: Option<u64>,
    quantity: u64,
) -> SlpResult<()> {
    if token_type != TokenType::Nft1Child {
        return Ok(());
    }
    if decimals != 0 {
        return Err(SlpError::NftChildRuleViolation {
            reason: "decimals must be 0",
        });
    }
    if mint_baton_vout.is_some() {
        return Err(SlpError::NftChildRuleViolation {
            reason: "mint baton not allowed",
        });
    }
    if quantity != 1 {
        return Err(SlpError::NftChildRuleViolation {
            reason: "quantity must be 1",
        });
    }
    Ok(())
}

pub fn check_mint_allowed(token_type: TokenType) -> SlpResult<()> {
    if token_type == TokenType::Nft1Child {
        return Err(SlpError::NftChildCannotMint);
    }
    Ok(())
}
