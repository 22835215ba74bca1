use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Solver = fn(&Path) -> Result<(usize, usize)>;

/// Runs every day of Advent of Code 2024 on inputs named `day<N>.txt`.
#[derive(Debug, Parser)]
struct CLIArgs {
    /// Directory holding one input file per day.
    #[arg(long, default_value = "inputs")]
    inputs_dir: PathBuf,

    /// Only run this day.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=25))]
    day: Option<u8>,
}

const ALL_DAYS: std::ops::RangeInclusive<u8> = 1..=25;

fn solver(day: u8) -> Option<Solver> {
    let solver: Solver = match day {
        1 => |p| day1::solve(p),
        2 => |p| day2::solve(p),
        3 => |p| day3::solve(p),
        4 => |p| day4::solve(p),
        5 => |p| day5::solve(p),
        6 => |p| day6::solve(p),
        7 => |p| day7::solve(p),
        8 => |p| day8::solve(p),
        9 => |p| day9::solve(p),
        _ => return None,
    };

    Some(solver)
}

fn run_day(day: u8, inputs_dir: &Path) {
    println!();
    println!("{}", "=".repeat(20));
    println!("Day {}", day);
    println!("{}", "=".repeat(20));

    let Some(solve) = solver(day) else {
        println!("No solution found for Day {}", day);
        return;
    };
    let input_path = inputs_dir.join(format!("day{}.txt", day));
    if !input_path.is_file() {
        warn!(day, path = %input_path.display(), "input file is missing");
        println!("No input found for Day {}", day);
        return;
    }

    match solve(&input_path) {
        Ok((part1, part2)) => {
            info!(day, part1, part2, "solved");
            println!("Part 1: {}", part1);
            println!("Part 2: {}", part2);
        }
        Err(e) => println!("Error running Day {}: {:#}", day, e),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    if let Some(day) = args.day {
        run_day(day, &args.inputs_dir);
    } else {
        for day in ALL_DAYS {
            run_day(day, &args.inputs_dir);
        }
    }

    Ok(())
}
