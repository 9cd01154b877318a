pub mod decode;
pub mod encode;
pub mod list;
pub mod schema;

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use slashwire::{Codec, Int64Repr, MessageDescriptor, schema::Registry};

/// Codec settings shared by every subcommand.
#[derive(Args)]
pub struct CodecArgs {
    /// Keep 64-bit integers beyond 2^53 - 1 instead of rejecting them
    #[arg(long, global = true)]
    exact_int64: bool,

    /// Reject payloads larger than this many bytes
    #[arg(long, global = true, value_name = "BYTES")]
    max_size: Option<usize>,
}

impl CodecArgs {
    pub fn build(&self) -> Codec {
        let mut builder = Codec::builder().with_default_codecs();
        if self.exact_int64 {
            builder = builder.with_int64_repr(Int64Repr::Exact);
        }
        if let Some(max) = self.max_size {
            builder = builder.with_max_message_size(max);
        }
        builder.build()
    }
}

fn find_message(name: &str) -> Result<&'static MessageDescriptor> {
    Registry::service()
        .message(name)
        .ok_or_else(|| anyhow!("unknown message type '{name}' (see `slashwire list`)"))
}

/// Read a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write to a file, or stdout when no path is given.
fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
