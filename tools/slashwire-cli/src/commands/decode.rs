use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use slashwire::{Codec, text::to_text_pretty};
use tracing::info;

use super::{read_input, write_output};
use crate::format::PayloadFormat;

#[derive(Args)]
pub struct DecodeArgs {
    /// Payload file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Message type, e.g. `slash.api.v1.Shortcut` or `Shortcut`
    #[arg(short = 't', long = "type")]
    type_name: String,

    /// Encoding of the input payload
    #[arg(short, long, value_enum, default_value_t = PayloadFormat::Binary)]
    format: PayloadFormat,

    /// Output JSON file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DecodeArgs {
    pub fn run(self, codec: &Codec) -> Result<()> {
        let data = read_input(self.input.as_deref())?;
        let value = codec
            .decode_named(&self.format.wire_format(), &self.type_name, &data)
            .with_context(|| format!("failed to decode {} payload", self.format.wire_format()))?;
        info!(
            message = value.descriptor().full_name,
            bytes = data.len(),
            "decoded"
        );

        let text = to_text_pretty(&value)?;
        write_output(self.output.as_deref(), format!("{text}\n").as_bytes())
    }
}
