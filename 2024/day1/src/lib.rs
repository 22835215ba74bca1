use std::{
    collections::HashMap,
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
    InvalidId(String),
    WrongIdCount(String, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidId(s) => write!(f, "Invalid location ID({}) in location ID list.", s),
            Error::WrongIdCount(s, n) => write!(
                f,
                "Expect two location IDs in given string({}), found {}.",
                s, n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct IdLists {
    left: Vec<usize>,
    right: Vec<usize>,
}

impl IdLists {
    pub fn add_pair(&mut self, s: &str) -> Result<(), Error> {
        let ids = s
            .split_ascii_whitespace()
            .map(|t| {
                t.parse::<usize>()
                    .map_err(|_| Error::InvalidId(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let &[left, right] = ids.as_slice() {
            self.left.push(left);
            self.right.push(right);
            Ok(())
        } else {
            Err(Error::WrongIdCount(s.to_string(), ids.len()))
        }
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sum of differences between the lists once both are sorted.
    pub fn total_distance(&self) -> usize {
        let mut left = self.left.clone();
        let mut right = self.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        left.iter()
            .zip(right.iter())
            .map(|(l, r)| l.abs_diff(*r))
            .sum()
    }

    pub fn similarity_score(&self) -> usize {
        let mut right_counts = HashMap::new();
        for id in &self.right {
            *right_counts.entry(*id).or_insert(0) += 1;
        }

        self.left
            .iter()
            .map(|id| id * right_counts.get(id).copied().unwrap_or(0))
            .sum()
    }
}

pub fn read_lists<P: AsRef<Path>>(path: P) -> Result<IdLists> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({})", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lists = IdLists::default();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.trim().is_empty() {
            continue;
        }

        lists
            .add_pair(&s)
            .with_context(|| format!("Failed to read location IDs in line #{}.", ind + 1))?;
    }

    debug!(pair_n = lists.len(), "read location ID lists");
    Ok(lists)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let lists = read_lists(path)?;
    Ok((lists.total_distance(), lists.similarity_score()))
}
