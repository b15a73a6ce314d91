//! SLP message data model

pub mod message;
pub mod token_type;

pub use message::{Genesis, Message, Mint, Send, SlpMessage, TokenId, VoutValue};
pub use token_type::{TokenType, TransactionType};
