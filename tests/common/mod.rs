//! Common Test Utilities
//!
//! Shared fixtures and helpers used by the unit and integration test crates.

#![allow(dead_code)]


use slp_codec::SlpMessage;

/// Decode a hex fixture into script bytes
pub fn script(script_hex: &str) -> Vec<u8> {
    hex::decode(script_hex).unwrap()
}

/// Decode a hex fixture as an SLP message
pub fn decode_hex(script_hex: &str) -> anyhow::Result<SlpMessage> {
    let script = hex::decode(script_hex)?;
    Ok(slp_codec::decode(&script)?)
}

/// Frame `chunks` into an OP_RETURN script without any SLP validation
pub fn raw_script(chunks: &[&[u8]]) -> Vec<u8> {
    let mut script = vec![slp_codec::script::OP_RETURN];
    for chunk in chunks {
        slp_codec::script::append_pushdata(&mut script, chunk).unwrap();
    }
    script
}

/// GENESIS chunks for a fungible token, ready to be tweaked by a test
pub fn genesis_chunks() -> Vec<Vec<u8>> {
    vec![
        b"SLP\x00".to_vec(),
        vec![0x01],
        b"GENESIS".to_vec(),
        b"TEST".to_vec(),
        b"some name".to_vec(),
        Vec::new(),
        Vec::new(),
        vec![0x00],
        vec![0x02],
        1u64.to_be_bytes().to_vec(),
    ]
}

pub fn script_from_owned(chunks: &[Vec<u8>]) -> Vec<u8> {
    let refs: Vec<&[u8]> = chunks.iter().map(Vec::as_slice).collect();
    raw_script(&refs)
}

/// Environment variables the configuration loader reads
pub const SLP_ENV_VARS: &[&str] = &[
    "SLP_STRICT_PUSHDATA",
    "SLP_MAX_SCRIPT_LEN",
    "SLP_OUTPUT_FORMAT",
    "SLP_CODEC__STRICT_PUSHDATA",
    "SLP_CODEC__MAX_SCRIPT_LEN",
    "SLP_OUTPUT__FORMAT",
];

pub fn clear_slp_env() {
    for var in SLP_ENV_VARS {
        std::env::remove_var(var);
    }
}
