use anyhow::{Context, Result};
use clap::Parser;
use day5::CLIArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let (rules, updates) = day5::read_printer_settings(&args.input_path).with_context(|| {
        format!(
            "Failed to read printer settings from given file({}).",
            args.input_path.display()
        )
    })?;

    let page_n_sum = updates
        .iter()
        .filter(|up| rules.is_valid(up))
        .map(|up| day5::middle_page(up))
        .sum::<usize>();
    println!("Part 1: {}", page_n_sum);

    Ok(())
}
