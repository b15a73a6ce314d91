use crate::types::TokenType;
use thiserror::Error;

/// Coarse classification of codec failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Pushdata framing could not be produced or consumed
    Framing,
    /// The script or chunk list does not have the expected shape
    Structural,
    /// A single field has the wrong width or an out-of-range value
    Field,
    /// NFT1 child constraints were violated
    RuleViolation,
    /// Integer decode was handed a buffer of unsupported width
    IntegerWidth,
}

/// Codec error type - every variant names the rule that was violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlpError {
    // Framing
    #[error("Pushdata length {len} exceeds the 4-byte length prefix")]
    LengthOverflow { len: usize },

    #[error("Pushdata at offset {offset} declares {declared} bytes, only {available} remain")]
    TruncatedPushdata {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("Unsupported opcode 0x{opcode:02x} at offset {offset}")]
    UnsupportedOpcode { opcode: u8, offset: usize },

    // Structural
    #[error("Script is empty")]
    EmptyScript,

    #[error("Script does not start with OP_RETURN (found 0x{first_byte:02x})")]
    NotDataCarrier { first_byte: u8 },

    #[error("Script too small: {len} bytes")]
    ScriptTooSmall { len: usize },

    #[error("Script too large: {len} bytes (limit {max})")]
    ScriptTooLarge { len: usize, max: usize },

    #[error("Trailing data: chunk extraction stopped at offset {offset} of {len}")]
    TrailingData { offset: usize, len: usize },

    #[error("Script contains no chunks")]
    NoChunks,

    #[error("First chunk is not the SLP protocol tag")]
    BadProtocolTag,

    #[error("Wrong number of chunks for {transaction_type}: expected {expected}, got {actual}")]
    WrongChunkCount {
        transaction_type: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Chunk list ended before {field}")]
    UnexpectedEnd { field: &'static str },

    // Field
    #[error("Field {field} has invalid length {len}")]
    BadFieldLength { field: &'static str, len: usize },

    #[error("Decimals {decimals} out of range (max 9)")]
    DecimalsOutOfRange { decimals: u64 },

    #[error("Mint baton vout {vout} out of range (2..=255)")]
    MintBatonVoutOutOfRange { vout: u64 },

    #[error("Send amount count {count} out of range (1..=19)")]
    AmountCountOutOfRange { count: usize },

    #[error("Unknown token type 0x{value:x}")]
    UnknownTokenType { value: u64 },

    #[error("Unknown transaction type {value:?}")]
    UnknownTransactionType { value: String },

    #[error("Expected token type {expected}, found {actual}")]
    TokenTypeMismatch {
        expected: TokenType,
        actual: TokenType,
    },

    // Rules
    #[error("NFT1 child genesis rule violated: {reason}")]
    NftChildRuleViolation { reason: &'static str },

    #[error("NFT1 child tokens cannot have a MINT transaction")]
    NftChildCannotMint,

    // Integer
    #[error("Cannot decode integer from {width}-byte buffer")]
    IntegerWidth { width: usize },
}

impl SlpError {
    /// Map this error onto its failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthOverflow { .. }
            | Self::TruncatedPushdata { .. }
            | Self::UnsupportedOpcode { .. } => ErrorKind::Framing,
            Self::EmptyScript
            | Self::NotDataCarrier { .. }
            | Self::ScriptTooSmall { .. }
            | Self::ScriptTooLarge { .. }
            | Self::TrailingData { .. }
            | Self::NoChunks
            | Self::BadProtocolTag
            | Self::WrongChunkCount { .. }
            | Self::UnexpectedEnd { .. } => ErrorKind::Structural,
            Self::BadFieldLength { .. }
            | Self::DecimalsOutOfRange { .. }
            | Self::MintBatonVoutOutOfRange { .. }
            | Self::AmountCountOutOfRange { .. }
            | Self::UnknownTokenType { .. }
            | Self::UnknownTransactionType { .. }
            | Self::TokenTypeMismatch { .. } => ErrorKind::Field,
            Self::NftChildRuleViolation { .. } | Self::NftChildCannotMint => {
                ErrorKind::RuleViolation
            }
            Self::IntegerWidth { .. } => ErrorKind::IntegerWidth,
        }
    }
}

/// Result type for codec operations
pub type SlpResult<T> = Result<T, SlpError>;

/// Application-wide error type for the command-line binary
#[derive(Error, Debug)]
pub enum AppError {
    /// Encode/decode failures
    #[error("SLP codec error: {0}")]
    Codec(#[from] SlpError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Hex input could not be decoded
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line input validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output rendering
    #[error("Output error: {0}")]
    Output(String),
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(format!("JSON error: {}", err))
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Output(format!("TOML error: {}", err))
    }
}
