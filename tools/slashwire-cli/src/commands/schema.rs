use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use slashwire::schema::Registry;

use super::write_output;

#[derive(Args)]
pub struct SchemaArgs {
    /// Message or enum type name
    #[arg(short = 't', long = "type")]
    type_name: String,

    /// Output text file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let registry = Registry::service();
        let text = if let Some(message) = registry.message(&self.type_name) {
            message.to_string()
        } else if let Some(mapping) = registry.enum_mapping(&self.type_name) {
            mapping.to_string()
        } else {
            return Err(anyhow!(
                "unknown type '{}' (see `slashwire list`)",
                self.type_name
            ));
        };
        write_output(self.output.as_deref(), text.as_bytes())
    }
}
