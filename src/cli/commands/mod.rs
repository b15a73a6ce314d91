pub mod decode;
pub mod encode;
pub mod show_config;

use crate::errors::AppResult;

/// Parse a hex argument, tolerating a 0x prefix and surrounding whitespace
pub(crate) fn parse_hex_arg(value: &str) -> AppResult<Vec<u8>> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}
