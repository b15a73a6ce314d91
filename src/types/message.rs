//! Decoded SLP messages
//!
//! A message is one of three transaction kinds, each owning copies of its
//! byte fields. [`SlpMessage`] pairs the message with the token type it was
//! parsed or built for.

use super::token_type::{TokenType, TransactionType};
use crate::errors::SlpError;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::str::FromStr;

/// 32-byte token identifier
///
/// For MINT and SEND it is carried on the wire. For GENESIS it is the
/// byte-reversed hash of the transaction holding the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId([u8; 32]);

impl TokenId {
    pub const LEN: usize = 32;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Token id of a GENESIS transaction, given its transaction hash bytes
    pub fn from_txid_bytes(hash: &[u8; 32]) -> Self {
        let mut bytes = *hash;
        bytes.reverse();
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for TokenId {
    type Error = SlpError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 32]>::try_from(bytes)
            .map(Self)
            .map_err(|_| SlpError::BadFieldLength {
                field: "token_id",
                len: bytes.len(),
            })
    }
}

impl FromStr for TokenId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <[u8; 32] as hex::FromHex>::from_hex(s).map(Self)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// GENESIS: creates a new token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genesis {
    #[serde(serialize_with = "serialize_text")]
    pub ticker: Vec<u8>,
    #[serde(serialize_with = "serialize_text")]
    pub name: Vec<u8>,
    #[serde(serialize_with = "serialize_text")]
    pub document_uri: Vec<u8>,
    #[serde(serialize_with = "serialize_opt_hex")]
    pub document_hash: Option<[u8; 32]>,
    pub decimals: u8,
    pub mint_baton_vout: Option<u8>,
    pub quantity: u64,
}

impl Genesis {
    pub fn ticker_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.ticker)
    }

    pub fn name_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn document_uri_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.document_uri)
    }

    pub fn document_hash_hex(&self) -> Option<String> {
        self.document_hash.map(hex::encode)
    }
}

/// MINT: issues additional quantity of an existing token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mint {
    pub token_id: TokenId,
    pub mint_baton_vout: Option<u8>,
    pub quantity: u64,
}

/// SEND: transfers amounts to outputs 1..=amounts.len()
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Send {
    pub token_id: TokenId,
    pub amounts: Vec<u64>,
}

/// One of the three SLP transaction kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "transaction_type", rename_all = "UPPERCASE")]
pub enum Message {
    Genesis(Genesis),
    Mint(Mint),
    Send(Send),
}

impl Message {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Message::Genesis(_) => TransactionType::Genesis,
            Message::Mint(_) => TransactionType::Mint,
            Message::Send(_) => TransactionType::Send,
        }
    }
}

/// Token value assigned to a transaction output by a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoutValue {
    /// Token quantity, zero when the output carries none
    Amount(u64),
    /// Output holds the mint baton rather than a quantity
    MintBaton,
}

impl VoutValue {
    /// Quantity carried, zero for the mint baton
    pub fn amount(&self) -> u64 {
        match self {
            VoutValue::Amount(amount) => *amount,
            VoutValue::MintBaton => 0,
        }
    }

    pub fn is_mint_baton(&self) -> bool {
        matches!(self, VoutValue::MintBaton)
    }
}

/// A parsed or built SLP message with its token type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlpMessage {
    pub token_type: TokenType,
    #[serde(flatten)]
    pub message: Message,
}

impl SlpMessage {
    pub fn new(token_type: TokenType, message: Message) -> Self {
        Self {
            token_type,
            message,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.message.transaction_type()
    }

    /// Token value assigned to output `vout`
    ///
    /// Output 0 holds the OP_RETURN itself and never carries tokens.
    pub fn vout_value(&self, vout: u32) -> VoutValue {
        if vout == 0 {
            return VoutValue::Amount(0);
        }
        match &self.message {
            Message::Send(send) => {
                let amount = send.amounts.get(vout as usize - 1).copied().unwrap_or(0);
                VoutValue::Amount(amount)
            }
            Message::Mint(Mint {
                mint_baton_vout,
                quantity,
                ..
            })
            | Message::Genesis(Genesis {
                mint_baton_vout,
                quantity,
                ..
            }) => {
                if vout == 1 {
                    VoutValue::Amount(*quantity)
                } else if mint_baton_vout.map(u32::from) == Some(vout) {
                    VoutValue::MintBaton
                } else {
                    VoutValue::Amount(0)
                }
            }
        }
    }

    /// Total token quantity assigned to outputs by this message
    pub fn total_output_value(&self) -> u128 {
        match &self.message {
            Message::Send(send) => send.amounts.iter().map(|&a| u128::from(a)).sum(),
            Message::Mint(mint) => u128::from(mint.quantity),
            Message::Genesis(genesis) => u128::from(genesis.quantity),
        }
    }

    /// Output index of the mint baton, if the message creates one
    pub fn mint_baton_vout(&self) -> Option<u8> {
        match &self.message {
            Message::Genesis(genesis) => genesis.mint_baton_vout,
            Message::Mint(mint) => mint.mint_baton_vout,
            Message::Send(_) => None,
        }
    }

    /// Token id this message refers to
    ///
    /// GENESIS messages do not carry one; it is resolved from the hash of the
    /// transaction holding the message when `genesis_txid` is supplied.
    pub fn token_id(&self, genesis_txid: Option<&[u8; 32]>) -> Option<TokenId> {
        match &self.message {
            Message::Genesis(_) => genesis_txid.map(TokenId::from_txid_bytes),
            Message::Mint(mint) => Some(mint.token_id),
            Message::Send(send) => Some(send.token_id),
        }
    }
}

fn serialize_text<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&String::from_utf8_lossy(bytes.as_ref()))
}

fn serialize_opt_hex<S: Serializer>(
    hash: &Option<[u8; 32]>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match hash {
        Some(hash) => serializer.serialize_some(&hex::encode(hash)),
        None => serializer.serialize_none(),
    }
}
