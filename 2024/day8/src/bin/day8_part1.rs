use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let signal_map = day8::read_signal_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read signal map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!("Part 1: {}", signal_map.antinode_positions().len());

    Ok(())
}
