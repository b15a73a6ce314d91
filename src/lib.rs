//! SLP token OP_RETURN codec
//!
//! Parses and builds Simple Ledger Protocol messages carried in Bitcoin Cash
//! OP_RETURN outputs: GENESIS, MINT and SEND for fungible, NFT1 group and
//! NFT1 child tokens.
//!
//! ```
//! use slp_codec::tokens::fungible;
//! use slp_codec::types::TokenType;
//!
//! let script = fungible::send(&[0x11; 32], &[1, 4, 90]).unwrap();
//! let msg = slp_codec::decoder::decode(&script).unwrap();
//! assert_eq!(msg.token_type, TokenType::Fungible);
//! assert_eq!(msg.total_output_value(), 95);
//! ```

pub mod cli;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod script;
pub mod tokens;
pub mod types;
pub mod validate;

pub use decoder::{decode, decode_with, DecodeOptions};
pub use encoder::encode;
pub use errors::{ErrorKind, SlpError, SlpResult};
pub use types::{SlpMessage, TokenId, TokenType, TransactionType, VoutValue};
