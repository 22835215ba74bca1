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
    InvalidLevel(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLevel(s) => {
                write!(f, "Invalid level({}) found in given level list.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Report {
    levels: Vec<usize>,
}

impl TryFrom<&str> for Report {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let levels = value
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| Error::InvalidLevel(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { levels })
    }
}

impl Report {
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    pub fn is_safe(&self) -> bool {
        Self::is_safe_levels(self.levels.iter().copied())
    }

    /// Safe as is, or after removing any single level.
    pub fn is_tolerantly_safe(&self) -> bool {
        self.is_safe()
            || (0..self.levels.len()).any(|skip_ind| {
                Self::is_safe_levels(
                    self.levels
                        .iter()
                        .enumerate()
                        .filter(|(ind, _)| *ind != skip_ind)
                        .map(|(_, l)| *l),
                )
            })
    }

    fn is_safe_levels(levels: impl Iterator<Item = usize>) -> bool {
        let mut last_level = None;
        let mut is_inc_req = None;
        for level in levels {
            if let Some(last) = last_level {
                let (is_safe, is_inc) = Self::is_safe_pair(last, level, is_inc_req);
                if !is_safe {
                    return false;
                }

                is_inc_req.get_or_insert(is_inc);
            }

            last_level = Some(level);
        }

        true
    }

    fn is_safe_pair(l_level: usize, r_level: usize, is_inc_req: Option<bool>) -> (bool, bool) {
        let cur_is_inc = l_level < r_level;
        if is_inc_req.is_some_and(|is_inc| is_inc != cur_is_inc) {
            return (false, cur_is_inc);
        }

        let abs_diff = l_level.abs_diff(r_level);
        ((1..=3).contains(&abs_diff), cur_is_inc)
    }
}

pub fn read_reps<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);

    let reports = reader
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            l.with_context(|| {
                format!(
                    "Failed to read line {} from given file({})",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .filter(|l| l.as_ref().map_or(true, |s| !s.trim().is_empty()))
        .map(|l| {
            l.and_then(|s| {
                Report::try_from(s.as_str())
                    .with_context(|| format!("Failed to read levels from given string({}).", s))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(report_n = reports.len(), "read reports");
    Ok(reports)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let reports = read_reps(path)?;
    let safe_n = reports.iter().filter(|r| r.is_safe()).count();
    let tolerant_safe_n = reports.iter().filter(|r| r.is_tolerantly_safe()).count();

    Ok((safe_n, tolerant_safe_n))
}
