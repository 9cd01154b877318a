use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use slashwire::{Codec, WireFormat};
use tracing::info;

use super::{find_message, read_input, write_output};
use crate::format::PayloadFormat;

#[derive(Args)]
pub struct EncodeArgs {
    /// JSON message file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Message type, e.g. `slash.api.v1.Shortcut` or `Shortcut`
    #[arg(short = 't', long = "type")]
    type_name: String,

    /// Encoding of the output payload
    #[arg(short, long, value_enum, default_value_t = PayloadFormat::Binary)]
    format: PayloadFormat,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl EncodeArgs {
    pub fn run(self, codec: &Codec) -> Result<()> {
        let descriptor = find_message(&self.type_name)?;
        let data = read_input(self.input.as_deref())?;
        let value = codec
            .decode(&WireFormat::Json, descriptor, &data)
            .context("failed to parse JSON input")?;

        let format = self.format.wire_format();
        let mut bytes = codec.encode(&format, &value)?;
        info!(
            message = descriptor.full_name,
            format = %format,
            bytes = bytes.len(),
            "encoded"
        );
        if matches!(self.format, PayloadFormat::Json) {
            bytes.push(b'\n');
        }
        write_output(self.output.as_deref(), &bytes)
    }
}
