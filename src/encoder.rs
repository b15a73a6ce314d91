//! SLP message encoder
//!
//! Validates a message against the same rules the decoder applies, then
//! serializes it as `OP_RETURN <SLP\0> <token type> <transaction type> <fields...>`.
//! Validation completes before any byte is written, so callers get either a
//! full script or an error.

use crate::errors::SlpResult;
use crate::script::{append_pushdata, encode_u64_be, LOKAD_ID, OP_RETURN};
use crate::types::{Genesis, Message, Mint, Send, SlpMessage, TokenType, TransactionType};
use crate::validate;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Serialize a message into an OP_RETURN scriptPubKey
pub fn encode(msg: &SlpMessage) -> SlpResult<Vec<u8>> {
    match &msg.message {
        Message::Genesis(genesis) => build_genesis(msg.token_type, genesis),
        Message::Mint(mint) => build_mint(msg.token_type, mint),
        Message::Send(send) => build_send(msg.token_type, send),
    }
}

pub fn build_genesis(token_type: TokenType, genesis: &Genesis) -> SlpResult<Vec<u8>> {
    let decimals = u64::from(genesis.decimals);
    validate::check_decimals(decimals)?;
    validate::check_nft_child_genesis(
        token_type,
        decimals,
        genesis.mint_baton_vout.map(u64::from),
        genesis.quantity,
    )?;
    if let Some(vout) = genesis.mint_baton_vout {
        validate::check_mint_baton_vout(u64::from(vout))?;
    }

    let document_hash: &[u8] = match &genesis.document_hash {
        Some(hash) => hash,
        None => &[],
    };
    let decimals = [genesis.decimals];
    let mint_baton = baton_bytes(genesis.mint_baton_vout);
    let quantity = encode_u64_be(genesis.quantity);

    write_script(
        token_type,
        TransactionType::Genesis,
        &[
            genesis.ticker.as_slice(),
            genesis.name.as_slice(),
            genesis.document_uri.as_slice(),
            document_hash,
            decimals.as_slice(),
            mint_baton.as_slice(),
            quantity.as_slice(),
        ],
    )
}

pub fn build_mint(token_type: TokenType, mint: &Mint) -> SlpResult<Vec<u8>> {
    validate::check_mint_allowed(token_type)?;
    if let Some(vout) = mint.mint_baton_vout {
        validate::check_mint_baton_vout(u64::from(vout))?;
    }

    let mint_baton = baton_bytes(mint.mint_baton_vout);
    let quantity = encode_u64_be(mint.quantity);

    write_script(
        token_type,
        TransactionType::Mint,
        &[
            mint.token_id.as_bytes().as_slice(),
            mint_baton.as_slice(),
            quantity.as_slice(),
        ],
    )
}

pub fn build_send(token_type: TokenType, send: &Send) -> SlpResult<Vec<u8>> {
    validate::check_amount_count(send.amounts.len())?;

    let amounts: Vec<[u8; 8]> = send.amounts.iter().map(|&a| encode_u64_be(a)).collect();
    let mut fields: Vec<&[u8]> = Vec::with_capacity(1 + amounts.len());
    fields.push(send.token_id.as_bytes().as_slice());
    fields.extend(amounts.iter().map(|a| a.as_slice()));

    write_script(token_type, TransactionType::Send, &fields)
}

/// SHA-256 of a token document, for use as the GENESIS document hash
pub fn document_hash(document: &[u8]) -> [u8; 32] {
    Sha256::digest(document).into()
}

fn baton_bytes(vout: Option<u8>) -> Vec<u8> {
    vout.map(|v| vec![v]).unwrap_or_default()
}

fn write_script(
    token_type: TokenType,
    transaction_type: TransactionType,
    fields: &[&[u8]],
) -> SlpResult<Vec<u8>> {
    let body_len: usize = fields.iter().map(|f| f.len() + 5).sum();
    let mut script = Vec::with_capacity(1 + 5 + 2 + 8 + body_len);

    script.push(OP_RETURN);
    append_pushdata(&mut script, LOKAD_ID)?;
    append_pushdata(&mut script, &[token_type.as_u8()])?;
    append_pushdata(&mut script, transaction_type.as_str().as_bytes())?;
    for field in fields {
        append_pushdata(&mut script, field)?;
    }

    debug!(
        "Encoded SLP {} message: token_type={}, {} bytes",
        transaction_type,
        token_type,
        script.len()
    );
    Ok(script)
}
