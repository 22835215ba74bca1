use anyhow::{Context, Result};
use clap::Parser;
use day7::{CLIArgs, Operator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let equations = day7::read_equations(&args.input_path).with_context(|| {
        format!(
            "Failed to read equations from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = day7::calibration_sum(
        &equations,
        &[Operator::Plus, Operator::Multiply, Operator::Concatenation],
    );
    println!("Part 2: {}", sum);

    Ok(())
}
