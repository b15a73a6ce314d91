use super::parse_hex_arg;
use crate::config::{AppConfig, OutputFormat};
use crate::encoder;
use crate::errors::{AppError, AppResult, SlpError};
use crate::tokens::{fungible, nft1_child, nft1_group};
use crate::types::TokenType;
use crate::validate;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Build an SLP OP_RETURN script and print it as hex
#[derive(Args)]
pub struct EncodeCommand {
    /// Output format: text, json (overrides slp-codec.toml)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub kind: EncodeKind,
}

#[derive(Subcommand)]
pub enum EncodeKind {
    /// Create a new token
    Genesis(GenesisArgs),
    /// Issue more of an existing token
    Mint(MintArgs),
    /// Transfer token amounts to outputs 1..=N
    Send(SendArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenTypeArg {
    Fungible,
    Nft1Group,
    Nft1Child,
}

impl From<TokenTypeArg> for TokenType {
    fn from(arg: TokenTypeArg) -> Self {
        match arg {
            TokenTypeArg::Fungible => TokenType::Fungible,
            TokenTypeArg::Nft1Group => TokenType::Nft1Group,
            TokenTypeArg::Nft1Child => TokenType::Nft1Child,
        }
    }
}

#[derive(Args)]
pub struct GenesisArgs {
    #[arg(long, value_enum, default_value = "fungible")]
    pub token_type: TokenTypeArg,

    #[arg(long, default_value = "")]
    pub ticker: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub document_uri: String,

    /// 32-byte document hash as hex
    #[arg(long, conflicts_with = "document_file")]
    pub document_hash: Option<String>,

    /// Hash this file with SHA-256 and use it as the document hash
    #[arg(long)]
    pub document_file: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    pub decimals: u8,

    /// Output index that receives the mint baton (2..=255)
    #[arg(long)]
    pub mint_baton_vout: Option<u8>,

    /// Initial quantity in base units (NFT1 children are always 1)
    #[arg(long)]
    pub quantity: Option<u64>,
}

#[derive(Args)]
pub struct MintArgs {
    #[arg(long, value_enum, default_value = "fungible")]
    pub token_type: TokenTypeArg,

    /// Token id as hex
    pub token_id: String,

    /// Output index that receives the new mint baton (2..=255)
    #[arg(long)]
    pub mint_baton_vout: Option<u8>,

    /// Additional quantity in base units
    #[arg(long)]
    pub quantity: u64,
}

#[derive(Args)]
pub struct SendArgs {
    #[arg(long, value_enum, default_value = "fungible")]
    pub token_type: TokenTypeArg,

    /// Token id as hex
    pub token_id: String,

    /// Amounts for outputs 1, 2, ... in order
    #[arg(required = true, num_args = 1..)]
    pub amounts: Vec<u64>,
}

impl EncodeCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<String> {
        let script = match &self.kind {
            EncodeKind::Genesis(args) => args.build()?,
            EncodeKind::Mint(args) => args.build()?,
            EncodeKind::Send(args) => args.build()?,
        };
        info!("Built {}-byte SLP script", script.len());

        match self.format.unwrap_or(config.output.format) {
            OutputFormat::Text => Ok(hex::encode(&script)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "script": hex::encode(&script),
                "length": script.len(),
            }))?),
        }
    }
}

impl GenesisArgs {
    fn document_hash(&self) -> AppResult<Vec<u8>> {
        if let Some(path) = &self.document_file {
            let document = std::fs::read(path)?;
            return Ok(encoder::document_hash(&document).to_vec());
        }
        match &self.document_hash {
            Some(hash) => parse_hex_arg(hash),
            None => Ok(Vec::new()),
        }
    }

    fn build(&self) -> AppResult<Vec<u8>> {
        let document_hash = self.document_hash()?;
        let ticker = self.ticker.as_bytes();
        let name = self.name.as_bytes();
        let document_uri = self.document_uri.as_bytes();

        let script = match self.token_type {
            TokenTypeArg::Nft1Child => {
                validate::check_nft_child_genesis(
                    self.token_type.into(),
                    u64::from(self.decimals),
                    self.mint_baton_vout.map(u64::from),
                    self.quantity.unwrap_or(1),
                )?;
                nft1_child::genesis(ticker, name, document_uri, &document_hash)?
            }
            TokenTypeArg::Fungible | TokenTypeArg::Nft1Group => {
                let quantity = self.quantity.ok_or_else(|| {
                    AppError::InvalidInput("--quantity is required for this token type".to_string())
                })?;
                let genesis = if self.token_type == TokenTypeArg::Fungible {
                    fungible::genesis
                } else {
                    nft1_group::genesis
                };
                genesis(
                    ticker,
                    name,
                    document_uri,
                    &document_hash,
                    self.decimals,
                    self.mint_baton_vout,
                    quantity,
                )?
            }
        };
        Ok(script)
    }
}

impl MintArgs {
    fn build(&self) -> AppResult<Vec<u8>> {
        let token_id = parse_hex_arg(&self.token_id)?;
        let script = match self.token_type {
            TokenTypeArg::Fungible => {
                fungible::mint(&token_id, self.mint_baton_vout, self.quantity)?
            }
            TokenTypeArg::Nft1Group => {
                nft1_group::mint(&token_id, self.mint_baton_vout, self.quantity)?
            }
            TokenTypeArg::Nft1Child => return Err(SlpError::NftChildCannotMint.into()),
        };
        Ok(script)
    }
}

impl SendArgs {
    fn build(&self) -> AppResult<Vec<u8>> {
        let token_id = parse_hex_arg(&self.token_id)?;
        let script = match self.token_type {
            TokenTypeArg::Fungible => fungible::send(&token_id, &self.amounts)?,
            TokenTypeArg::Nft1Group => nft1_group::send(&token_id, &self.amounts)?,
            TokenTypeArg::Nft1Child => nft1_child::send(&token_id, &self.amounts)?,
        };
        Ok(script)
    }
}
