//! Token type and transaction type discriminants

use crate::errors::SlpError;
use serde::Serialize;

/// SLP token type (version) carried in the second chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Type 1 fungible token
    Fungible = 0x01,
    /// NFT1 child: a single indivisible unit belonging to a group
    Nft1Child = 0x41,
    /// NFT1 group: fungible token used to issue NFT1 children
    Nft1Group = 0x81,
}

impl TokenType {
    /// Wire value of this token type
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get the display name for this token type
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fungible => "Fungible",
            Self::Nft1Child => "NFT1Child",
            Self::Nft1Group => "NFT1Group",
        }
    }

    /// Convert from a decoded integer
    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            0x01 => Some(Self::Fungible),
            0x41 => Some(Self::Nft1Child),
            0x81 => Some(Self::Nft1Group),
            _ => None,
        }
    }
}

impl TryFrom<u64> for TokenType {
    type Error = SlpError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value).ok_or(SlpError::UnknownTokenType { value })
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:02x})", self.display_name(), self.as_u8())
    }
}

/// SLP transaction kind carried in the third chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Genesis,
    Mint,
    Send,
}

impl TransactionType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genesis => "GENESIS",
            Self::Mint => "MINT",
            Self::Send => "SEND",
        }
    }

    /// Parse the raw chunk bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            b"GENESIS" => Some(Self::Genesis),
            b"MINT" => Some(Self::Mint),
            b"SEND" => Some(Self::Send),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
