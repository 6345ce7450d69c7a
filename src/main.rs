use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use idc_compat_gen::{generate_file, EmitMode, ShimTables};

#[derive(Parser)]
#[command(name = "idc-compat-gen")]
#[command(about = "Generate a compatibility shim from the idc.idc compatibility macros")]
struct Cli {
    /// Path to the idc.idc file
    #[arg(short = 'i', long = "idc")]
    idc: PathBuf,

    /// Path to the output file
    #[arg(short, long)]
    output: PathBuf,

    /// Dump code that shows, at load time, which symbols the shim would override
    #[arg(short = 'd', long = "debug-out")]
    debug_out: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let tables = ShimTables::builtin().context("loading built-in symbol tables")?;
    let mode = if cli.debug_out {
        EmitMode::Probes
    } else {
        EmitMode::Definitions
    };

    generate_file(&cli.idc, &cli.output, &tables, mode).with_context(|| {
        format!(
            "generating {} from {}",
            cli.output.display(),
            cli.idc.display()
        )
    })?;

    Ok(())
}
