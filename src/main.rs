use anyhow::Context;
use clap::Parser;
use pws_ingest::cli::{args::Args, commands};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime
        .block_on(commands::run(args))
        .context("pws-ingest failed")?;

    Ok(())
}
