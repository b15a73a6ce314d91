//! Mainnet scripts from the reference parser test suite

use crate::common::{decode_hex, fixtures};
use slp_codec::types::Message;
use slp_codec::{TokenId, TokenType, TransactionType, VoutValue};

#[test]
fn test_send_amount_by_index() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::SEND_1_4_90)?;
    assert_eq!(msg.vout_value(0), VoutValue::Amount(0));
    assert_eq!(msg.vout_value(1), VoutValue::Amount(1));
    assert_eq!(msg.vout_value(2), VoutValue::Amount(4));
    assert_eq!(msg.vout_value(3), VoutValue::Amount(90));
    assert_eq!(msg.vout_value(4), VoutValue::Amount(0));
    assert_eq!(msg.total_output_value(), 95);
    Ok(())
}

#[test]
fn test_send_max_amount_stays_unsigned() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::SEND_MAX_AMOUNT)?;
    assert_eq!(msg.vout_value(1).amount(), u64::MAX);
    Ok(())
}

#[test]
fn test_send_total_exceeding_u64_per_output_sum() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::SEND_NINE_OUTPUTS)?;
    assert_eq!(msg.vout_value(9).amount(), 10_000_000_000_000_000_000);
    assert_eq!(msg.total_output_value(), 10_000_000_000_000_000_008);
    Ok(())
}

#[test]
fn test_send_token_id() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::SEND_SINGLE)?;
    assert_eq!(msg.transaction_type(), TransactionType::Send);
    assert_eq!(msg.vout_value(1).amount(), 6_000_000_000);
    let expected: TokenId = fixtures::TOKEN_ID_D687.parse()?;
    assert_eq!(msg.token_id(None), Some(expected));
    Ok(())
}

#[test]
fn test_mint_values() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::MINT_200M)?;
    assert_eq!(msg.vout_value(1).amount(), 200_000_000);
    assert_eq!(msg.vout_value(2), VoutValue::MintBaton);
    assert_eq!(msg.total_output_value(), 200_000_000);

    let msg = decode_hex(fixtures::MINT_400M)?;
    assert_eq!(msg.transaction_type(), TransactionType::Mint);
    assert_eq!(msg.vout_value(1).amount(), 400_000_000);

    let msg = decode_hex(fixtures::MINT_MAX)?;
    assert_eq!(msg.vout_value(1).amount(), u64::MAX);
    Ok(())
}

#[test]
fn test_onecoin_genesis() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::GENESIS_ONECOIN)?;
    assert_eq!(msg.token_type, TokenType::Fungible);
    assert_eq!(msg.vout_value(1).amount(), 420_000_000_000);
    assert!(msg.vout_value(2).is_mint_baton());
    assert_eq!(msg.total_output_value(), 420_000_000_000);

    match &msg.message {
        Message::Genesis(genesis) => {
            assert_eq!(genesis.ticker_utf8(), "OneCoin");
            assert_eq!(genesis.name_utf8(), "OneCoin");
            assert_eq!(
                genesis.document_uri_utf8(),
                "https://thenextweb.com/hardfork/2019/12/23/onecoin-cryptocurrency-scam-need-to-know/"
            );
            assert_eq!(genesis.document_hash, None);
            assert_eq!(genesis.decimals, 4);
        }
        other => panic!("expected GENESIS, got {:?}", other),
    }

    let msg = decode_hex(fixtures::GENESIS_ONECOIN_MAX)?;
    assert_eq!(msg.vout_value(1).amount(), u64::MAX);
    Ok(())
}

#[test]
fn test_genesis_with_empty_fields() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::GENESIS_EMPTY_FIELDS)?;
    assert_eq!(msg.transaction_type(), TransactionType::Genesis);
    assert_eq!(msg.mint_baton_vout(), None);
    assert_eq!(msg.vout_value(1).amount(), u64::MAX);
    Ok(())
}

#[test]
fn test_genesis_token_id_from_txid() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::GENESIS_ONECOIN)?;
    // txid as displayed is the reversed hash
    let mut hash: [u8; 32] = hex::FromHex::from_hex(fixtures::TOKEN_ID_C4B0)?;
    hash.reverse();
    let token_id = msg.token_id(Some(&hash)).unwrap();
    assert_eq!(token_id.to_hex(), fixtures::TOKEN_ID_C4B0);
    Ok(())
}

#[test]
fn test_json_rendering_of_genesis() -> anyhow::Result<()> {
    let msg = decode_hex(fixtures::GENESIS_ONECOIN)?;
    let json = serde_json::to_value(&msg)?;
    assert_eq!(json["token_type"], "fungible");
    assert_eq!(json["transaction_type"], "GENESIS");
    assert_eq!(json["ticker"], "OneCoin");
    assert_eq!(json["decimals"], 4);
    assert_eq!(json["mint_baton_vout"], 2);
    assert!(json["document_hash"].is_null());
    Ok(())
}
