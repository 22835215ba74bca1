use anyhow::{Context, Result};
use clap::Parser;
use day9::CLIArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let mut file_system = day9::read_file_system(&args.input_path).with_context(|| {
        format!(
            "Failed to read file system information from given file({}).",
            args.input_path.display()
        )
    })?;

    file_system.compact_per_block();
    println!("Part 1: {}", file_system.checksum());

    Ok(())
}
