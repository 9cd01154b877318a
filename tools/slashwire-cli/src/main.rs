mod commands;
mod format;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    CodecArgs, decode::DecodeArgs, encode::EncodeArgs, list::ListArgs, schema::SchemaArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slashwire", about = "Inspect and convert Slash API messages")]
struct Cli {
    /// Log skipped fields and unrecognized enum values
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    codec: CodecArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a payload and print it as JSON
    Decode(DecodeArgs),
    /// Encode a JSON message
    Encode(EncodeArgs),
    /// Print the field layout of a message or enum type
    Schema(SchemaArgs),
    /// List known message and enum types
    List(ListArgs),
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_new("slashwire=debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("slashwire=info"))?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let codec = cli.codec.build();

    match cli.command {
        Commands::Decode(args) => args.run(&codec),
        Commands::Encode(args) => args.run(&codec),
        Commands::Schema(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
