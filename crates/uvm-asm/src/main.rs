//! Command-line assembler for UVM programs.
//!
//! Usage: `uvm-asm <program.yaml> [--output FILE]` to assemble, or
//! `uvm-asm <program.yaml> --inspect` to print the IR listing without
//! writing anything.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use uvm_ir::{build_program, encode_program, listing, SourceDoc};

#[derive(Parser, Debug)]
#[command(name = "uvm-asm")]
#[command(about = "Assemble a declarative UVM program into its binary encoding")]
struct Args {
    /// Path to the YAML program document
    input: PathBuf,

    /// Output file for the packed binary (defaults to the input path with
    /// a .bin extension)
    #[arg(long = "output", short = 'o', conflicts_with = "inspect")]
    output: Option<PathBuf>,

    /// Print the IR listing with a byte preview instead of writing output
    #[arg(long = "inspect")]
    inspect: bool,
}

/// Initialize logging with a default filter.
///
/// Use the `RUST_LOG` environment variable to override the default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let doc = SourceDoc::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let program = build_program(&doc)
        .with_context(|| format!("invalid program in {}", args.input.display()))?;

    if args.inspect {
        print!("{}", listing::render_listing(&program));
        info!("{} instructions, {} bytes when packed", program.len(), program.encoded_len());
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("bin"));

    let encoded = encode_program(&program);
    fs::write(&output, &encoded.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "Assembled {} instructions ({} bytes) to {}",
        encoded.count,
        encoded.bytes.len(),
        output.display()
    );

    Ok(())
}
