use std::{
    collections::{BTreeMap, HashSet},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::{Add, Neg, Sub},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, trace};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharInSignalMap(char),
    TooLargeMap(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in one row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharInSignalMap(c) => write!(
                f,
                "Invalid character({}) in signal map, expect letters or digits.",
                c
            ),
            Error::TooLargeMap(row_n, col_n) => {
                write!(f, "Signal map({} x {}) is too large.", row_n, col_n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

// Map sizes are checked against isize::MAX on build, so coordinates convert both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

impl Sub for &Position {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(
            self.r as isize - rhs.r as isize,
            self.c as isize - rhs.c as isize,
        )
    }
}

impl Add<&Vector> for &Position {
    type Output = Option<Position>;

    fn add(self, rhs: &Vector) -> Self::Output {
        Some(Position::new(
            self.r.checked_add_signed(rhs.r)?,
            self.c.checked_add_signed(rhs.c)?,
        ))
    }
}

impl Sub<&Vector> for &Position {
    type Output = Option<Position>;

    fn sub(self, rhs: &Vector) -> Self::Output {
        self + &(-rhs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    r: isize,
    c: isize,
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.r, -self.c)
    }
}

impl Vector {
    pub fn new(r: isize, c: isize) -> Self {
        Self { r, c }
    }

    /// The shortest vector with the same direction.
    pub fn reduced(&self) -> Vector {
        let gcd = gcd(self.r.unsigned_abs(), self.c.unsigned_abs()).max(1) as isize;
        Vector::new(self.r / gcd, self.c / gcd)
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

pub struct SignalMap {
    signals: BTreeMap<char, Vec<Position>>,
    row_n: usize,
    col_n: usize,
}

impl TryFrom<&str> for SignalMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = SignalMapBuilder::new();
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

impl SignalMap {
    /// Points at twice the distance from one antenna as from another of the same frequency.
    pub fn antinode_positions(&self) -> HashSet<Position> {
        self.collect_over_pairs(|pos0, pos1, res_positions| {
            let offset = pos1 - pos0;
            res_positions.extend(
                [pos0 - &offset, pos1 + &offset]
                    .into_iter()
                    .flatten()
                    .filter(|p| self.is_inside(p)),
            );
        })
    }

    /// Every point in line with at least two antennas of the same frequency.
    pub fn harmonic_antinode_positions(&self) -> HashSet<Position> {
        self.collect_over_pairs(|pos0, pos1, res_positions| {
            let step = (pos1 - pos0).reduced();
            for dir_step in [step.clone(), -&step] {
                let mut pos_op = Some(*pos0);
                while let Some(pos) = pos_op.filter(|p| self.is_inside(p)) {
                    res_positions.insert(pos);
                    pos_op = &pos + &dir_step;
                }
            }
        })
    }

    fn collect_over_pairs<F>(&self, mut add_for_pair: F) -> HashSet<Position>
    where
        F: FnMut(&Position, &Position, &mut HashSet<Position>),
    {
        let mut res_positions = HashSet::new();
        for (freq, positions) in &self.signals {
            let pos_n = positions.len();
            for pos0_ind in 0..pos_n {
                for pos1_ind in (pos0_ind + 1)..pos_n {
                    add_for_pair(
                        &positions[pos0_ind],
                        &positions[pos1_ind],
                        &mut res_positions,
                    );
                }
            }
            trace!(
                %freq,
                antenna_n = pos_n,
                total_n = res_positions.len(),
                "added antinodes of frequency"
            );
        }

        res_positions
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }
}

struct SignalMapBuilder {
    signals: BTreeMap<char, Vec<Position>>,
    row_n: usize,
    col_n: Option<usize>,
}

impl SignalMapBuilder {
    pub fn new() -> Self {
        Self {
            signals: BTreeMap::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let text = text.trim_end();
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (col_ind, c) in text.chars().enumerate().filter(|(_, c)| *c != '.') {
            if !c.is_ascii_alphanumeric() {
                return Err(Error::InvalidCharInSignalMap(c));
            }

            self.signals
                .entry(c)
                .or_default()
                .push(Position::new(self.row_n, col_ind));
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<SignalMap, Error> {
        let col_n = self.col_n.unwrap_or(0);
        if isize::try_from(self.row_n).is_err() || isize::try_from(col_n).is_err() {
            return Err(Error::TooLargeMap(self.row_n, col_n));
        }

        Ok(SignalMap {
            signals: self.signals,
            row_n: self.row_n,
            col_n,
        })
    }
}

pub fn read_signal_map<P: AsRef<Path>>(path: P) -> Result<SignalMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = SignalMapBuilder::new();

    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        builder
            .add_row(line.as_str())
            .with_context(|| format!("Failed to add row(line {}) to signal map.", ind + 1))?;
    }

    let map = builder.build()?;
    debug!(
        row_n = map.row_n,
        col_n = map.col_n,
        freq_n = map.signals.len(),
        "read signal map"
    );
    Ok(map)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let map = read_signal_map(path)?;
    Ok((
        map.antinode_positions().len(),
        map.harmonic_antinode_positions().len(),
    ))
}
