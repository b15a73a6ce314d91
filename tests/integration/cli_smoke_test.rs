//! CLI Smoke Test
//!
//! Parses real command lines and runs each command end to end, checking the
//! text that would be printed.

use crate::common::{clear_slp_env, fixtures};
use clap::Parser;
use slp_codec::cli::Cli;
use slp_codec::errors::AppError;
use slp_codec::SlpError;
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<String, AppError> {
    let mut argv = vec!["slp-codec"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().execute()
}

#[test]
#[serial_test::serial]
fn test_decode_text() {
    clear_slp_env();
    let output = run(&["decode", fixtures::MINT_200M, "--vout", "2"]).unwrap();
    assert!(output.contains("Token type:        Fungible (0x01)"));
    assert!(output.contains("Transaction type:  MINT"));
    assert!(output.contains(fixtures::TOKEN_ID_D687));
    assert!(output.ends_with("vout 2: mint baton"));
}

#[test]
#[serial_test::serial]
fn test_decode_json() {
    clear_slp_env();
    let output = run(&["decode", fixtures::SEND_NINE_OUTPUTS, "--format", "json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["amounts"].as_array().unwrap().len(), 9);
    assert_eq!(json["total_output_value"], "10000000000000000008");
}

#[test]
#[serial_test::serial]
fn test_decode_errors_surface() {
    clear_slp_env();
    let err = run(&["decode", "6a04534c5000"]).unwrap_err();
    assert!(matches!(
        err,
        AppError::Codec(SlpError::ScriptTooSmall { len: 6 })
    ));

    let err = run(&["decode", "zz"]).unwrap_err();
    assert!(matches!(err, AppError::Hex(_)));

    let err = run(&["decode", fixtures::SEND_1_4_90, "--max-script-len", "16"]).unwrap_err();
    assert!(matches!(
        err,
        AppError::Codec(SlpError::ScriptTooLarge { max: 16, .. })
    ));
}

#[test]
#[serial_test::serial]
fn test_decode_strict_flag() {
    clear_slp_env();
    let script = format!("{}00", fixtures::SEND_1_4_90);
    let err = run(&["decode", &script, "--strict"]).unwrap_err();
    assert!(matches!(
        err,
        AppError::Codec(SlpError::UnsupportedOpcode { opcode: 0, .. })
    ));
}

#[test]
#[serial_test::serial]
fn test_encode_commands() {
    clear_slp_env();
    let output = run(&[
        "encode",
        "genesis",
        "--ticker",
        "TEST",
        "--name",
        "some name",
        "--mint-baton-vout",
        "2",
        "--quantity",
        "1",
    ])
    .unwrap();
    assert_eq!(
        output,
        "6a04534c500001010747454e45534953045445535409736f6d65206e616d654c004c0001000102080000000000000001"
    );

    let output = run(&[
        "encode",
        "send",
        fixtures::TOKEN_ID_C4B0,
        "1",
        "4",
        "90",
    ])
    .unwrap();
    assert_eq!(output, fixtures::SEND_1_4_90);

    let output = run(&[
        "encode",
        "mint",
        fixtures::TOKEN_ID_D687,
        "--mint-baton-vout",
        "2",
        "--quantity",
        "200000000",
    ])
    .unwrap();
    assert_eq!(output, fixtures::MINT_200M);
}

#[test]
#[serial_test::serial]
fn test_encode_nft_child() {
    clear_slp_env();
    let output = run(&[
        "encode",
        "genesis",
        "--token-type",
        "nft1-child",
        "--ticker",
        "ART",
    ])
    .unwrap();
    let decoded = run(&["decode", &output]).unwrap();
    assert!(decoded.contains("NFT1Child (0x41)"));
    assert!(decoded.contains("Quantity:          1"));

    let err = run(&[
        "encode",
        "mint",
        "--token-type",
        "nft1-child",
        fixtures::TOKEN_ID_D687,
        "--quantity",
        "1",
    ])
    .unwrap_err();
    assert!(matches!(err, AppError::Codec(SlpError::NftChildCannotMint)));
}

#[test]
#[serial_test::serial]
fn test_encode_document_file() -> anyhow::Result<()> {
    clear_slp_env();
    let temp_dir = TempDir::new()?;
    let document = temp_dir.path().join("token.json");
    std::fs::write(&document, b"")?;

    let output = run(&[
        "encode",
        "genesis",
        "--quantity",
        "5",
        "--document-file",
        document.to_str().unwrap(),
        "--format",
        "json",
    ])?;
    let json: serde_json::Value = serde_json::from_str(&output)?;
    let script = json["script"].as_str().unwrap();
    // SHA-256 of the empty document
    assert!(script.contains("20e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"));
    Ok(())
}

#[test]
#[serial_test::serial]
fn test_config_command_with_explicit_file() -> anyhow::Result<()> {
    clear_slp_env();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "[codec]\nmax_script_len = 64\n")?;

    let output = run(&["config", "--config", path.to_str().unwrap()])?;
    assert!(output.contains("max_script_len = 64"));
    assert!(output.contains("strict_pushdata = false"));

    let err = run(&["decode", fixtures::SEND_1_4_90, "--config", path.to_str().unwrap()])
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Codec(SlpError::ScriptTooLarge { max: 64, .. })
    ));
    Ok(())
}
