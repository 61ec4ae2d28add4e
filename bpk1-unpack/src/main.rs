//! # bpk1-unpack
//!
//! Extracts the blocks of BPK1 containers into directories next to them.
//!
//! ## Usage
//! ```sh
//! bpk1-unpack [--recurse] [--decompress] [--list] <FILE>...
//! ```
//! A bad header is reported and the next file is processed; any other error stops the run.
//! Set `RUST_LOG` to change verbosity (defaults to `info`).
mod batch;
mod inputs;

use std::{error::Error, io, process::exit};

use bpk1_rs::{bpk1_extractor::Bpk1Extractor, extract_options::ExtractOptions};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bpk1-unpack", version, about = "Extract the blocks of BPK1 containers")]
struct Cli {
    /// Also unpack every extracted block that is itself a BPK1 container.
    #[arg(long)]
    recurse: bool,

    /// Try LZ10 decompression on files that do not start with the BPK1 signature.
    #[arg(long)]
    decompress: bool,

    /// Print each container's block table instead of extracting it.
    #[arg(long)]
    list: bool,

    /// Containers to extract. Glob patterns are expanded.
    #[arg(required = true)]
    files: Vec<String>,
}

fn app(cli: Cli) -> Result<(), Box<dyn Error>> {
    let extractor = Bpk1Extractor::new(
        ExtractOptions::new()
            .recurse(cli.recurse)
            .decompress(cli.decompress),
    );
    let files = inputs::expand_inputs(&cli.files)?;
    batch::run(&extractor, &files, cli.list, &mut io::stdout().lock())?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = app(Cli::parse()) {
        error!("{err}");
        let mut source = err.source();
        while let Some(cause) = source {
            error!("Cause: {cause}");
            source = cause.source();
        }
        exit(1)
    }
}
