use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    NoColonInEquation,
    InvalidResultText(String),
    InvalidOprandText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoColonInEquation => write!(
                f,
                "Can't find separator(:) in equation text that separates the result and oprands."
            ),
            Error::InvalidResultText(s) => write!(f, "Invalid result text({}).", s),
            Error::InvalidOprandText(s) => write!(f, "Invalid oprand text({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Multiply,
    Concatenation,
}

impl Operator {
    /// The left oprand `l` such that `l op oprand == result`, if there is one.
    fn undo(self, result: usize, oprand: usize) -> Option<usize> {
        match self {
            Operator::Plus => result.checked_sub(oprand),
            Operator::Multiply if oprand != 0 && result % oprand == 0 => Some(result / oprand),
            Operator::Multiply => None,
            Operator::Concatenation => {
                let digit_n = oprand.checked_ilog10().map_or(1, |l| l + 1);
                let shift = 10usize.checked_pow(digit_n)?;
                (result % shift == oprand).then_some(result / shift)
            }
        }
    }
}

#[derive(Debug)]
pub struct Equation {
    result: usize,
    oprands: Vec<usize>,
}

impl TryFrom<&str> for Equation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (result_text, oprands_text) =
            value.split_once(':').ok_or(Error::NoColonInEquation)?;
        let result = result_text
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidResultText(result_text.to_string()))?;
        let oprands = oprands_text
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| Error::InvalidOprandText(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { result, oprands })
    }
}

impl Equation {
    /// Whether some choice of `ops` between the oprands, applied left to right, gives the result.
    pub fn is_possible(&self, ops: &[Operator]) -> bool {
        Self::can_reach(self.result, &self.oprands, ops)
    }

    pub fn result(&self) -> usize {
        self.result
    }

    // Works backwards from the last oprand, so most branches die on a failed undo.
    fn can_reach(target: usize, oprands: &[usize], ops: &[Operator]) -> bool {
        match oprands {
            [] => false,
            [first] => target == *first,
            [rest @ .., last] => ops.iter().any(|op| match op {
                Operator::Multiply if *last == 0 => target == 0,
                _ => op
                    .undo(target, *last)
                    .is_some_and(|prev| Self::can_reach(prev, rest, ops)),
            }),
        }
    }
}

pub fn calibration_sum(equations: &[Equation], ops: &[Operator]) -> usize {
    equations
        .iter()
        .filter(|e| e.is_possible(ops))
        .map(|e| e.result())
        .sum()
}

pub fn read_equations<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut equations = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.trim().is_empty() {
            continue;
        }

        equations.push(
            Equation::try_from(s.as_str())
                .with_context(|| format!("Failed to parse equation from given string({}).", s))?,
        );
    }

    debug!(equation_n = equations.len(), "read equations");
    Ok(equations)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let equations = read_equations(path)?;
    Ok((
        calibration_sum(&equations, &[Operator::Plus, Operator::Multiply]),
        calibration_sum(
            &equations,
            &[Operator::Plus, Operator::Multiply, Operator::Concatenation],
        ),
    ))
}
