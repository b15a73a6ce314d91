use super::parse_hex_arg;
use crate::config::{AppConfig, OutputFormat};
use crate::decoder::{self, DecodeOptions};
use crate::errors::AppResult;
use crate::types::{Message, SlpMessage, VoutValue};
use clap::Args;
use tracing::info;

/// Decode an SLP OP_RETURN script given as hex
#[derive(Args)]
pub struct DecodeCommand {
    /// scriptPubKey hex, starting with 6a
    pub script: String,

    /// Show the token value assigned to this output index
    #[arg(long)]
    pub vout: Option<u32>,

    /// Output format: text, json (overrides slp-codec.toml)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Fail on unsupported opcodes instead of ending the chunk list
    #[arg(long)]
    pub strict: bool,

    /// Largest script to accept in bytes, 0 for no bound (overrides slp-codec.toml)
    #[arg(long)]
    pub max_script_len: Option<usize>,
}

impl DecodeCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<String> {
        let script = parse_hex_arg(&self.script)?;
        let options = self.decode_options(config);
        info!(
            "Decoding {}-byte script (pushdata mode {:?})",
            script.len(),
            options.pushdata_mode
        );

        let msg = decoder::decode_with(&script, &options)?;

        match self.format.unwrap_or(config.output.format) {
            OutputFormat::Json => render_json(&msg, self.vout),
            OutputFormat::Text => Ok(render_text(&msg, self.vout)),
        }
    }

    /// CLI arguments override config values
    fn decode_options(&self, config: &AppConfig) -> DecodeOptions {
        let mut codec = config.codec.clone();
        if self.strict {
            codec.strict_pushdata = true;
        }
        if let Some(max) = self.max_script_len {
            codec.max_script_len = max;
        }
        DecodeOptions::from(&codec)
    }
}

fn render_json(msg: &SlpMessage, vout: Option<u32>) -> AppResult<String> {
    let mut json = serde_json::to_value(msg)?;
    if let Some(object) = json.as_object_mut() {
        // u128 does not fit a JSON number
        object.insert(
            "total_output_value".to_string(),
            serde_json::Value::String(msg.total_output_value().to_string()),
        );
        if let Some(vout) = vout {
            let value = msg.vout_value(vout);
            object.insert(
                "vout".to_string(),
                serde_json::json!({
                    "index": vout,
                    "amount": value.amount(),
                    "mint_baton": value.is_mint_baton(),
                }),
            );
        }
    }
    Ok(serde_json::to_string_pretty(&json)?)
}

fn render_text(msg: &SlpMessage, vout: Option<u32>) -> String {
    let mut lines = vec![
        format!("Token type:        {}", msg.token_type),
        format!("Transaction type:  {}", msg.transaction_type()),
    ];

    match &msg.message {
        Message::Genesis(genesis) => {
            lines.push(format!("Ticker:            {}", genesis.ticker_utf8()));
            lines.push(format!("Name:              {}", genesis.name_utf8()));
            lines.push(format!("Document URI:      {}", genesis.document_uri_utf8()));
            lines.push(format!(
                "Document hash:     {}",
                genesis
                    .document_hash_hex()
                    .unwrap_or_else(|| "(none)".to_string())
            ));
            lines.push(format!("Decimals:          {}", genesis.decimals));
            lines.push(format!("Mint baton vout:   {}", baton(genesis.mint_baton_vout)));
            lines.push(format!("Quantity:          {}", genesis.quantity));
        }
        Message::Mint(mint) => {
            lines.push(format!("Token ID:          {}", mint.token_id));
            lines.push(format!("Mint baton vout:   {}", baton(mint.mint_baton_vout)));
            lines.push(format!("Quantity:          {}", mint.quantity));
        }
        Message::Send(send) => {
            lines.push(format!("Token ID:          {}", send.token_id));
            lines.push(format!("Outputs:           {}", send.amounts.len()));
            for (index, amount) in send.amounts.iter().enumerate() {
                lines.push(format!("  vout {:>2}: {}", index + 1, amount));
            }
        }
    }

    lines.push(format!("Total output value: {}", msg.total_output_value()));

    if let Some(vout) = vout {
        lines.push(match msg.vout_value(vout) {
            VoutValue::MintBaton => format!("vout {}: mint baton", vout),
            VoutValue::Amount(amount) => format!("vout {}: {}", vout, amount),
        });
    }

    lines.join("\n")
}

fn baton(vout: Option<u8>) -> String {
    vout.map(|v| v.to_string())
        .unwrap_or_else(|| "(none)".to_string())
}
