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
    InconsistentRow(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_n, real_n) => write!(
                f,
                "Expect {} characters per row, given {}.",
                expect_n, real_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRS: [Direction; 8] = [
            Direction::Left,
            Direction::UpLeft,
            Direction::Up,
            Direction::UpRight,
            Direction::Right,
            Direction::DownRight,
            Direction::Down,
            Direction::DownLeft,
        ];

        &ALL_DIRS
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn along(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        Some(Position::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }
}

pub struct LetterMatrix {
    letters: Vec<char>,
    row_n: usize,
    col_n: usize,
}

impl TryFrom<&str> for LetterMatrix {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = LetterMatrixBuilder::new();
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            builder.add_row(line)?;
        }

        Ok(builder.build())
    }
}

impl LetterMatrix {
    /// Occurrences of `word` along any of the eight directions, overlaps included.
    pub fn search(&self, word: &str) -> usize {
        let Some(first_char) = word.chars().next() else {
            return 0;
        };

        let mut count = 0;
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                let start_pos = Position::new(r, c);
                if self.letter(&start_pos) != Some(first_char) {
                    continue;
                }

                count += Direction::all_dirs()
                    .iter()
                    .filter(|dir| self.reads_along(start_pos, **dir, word))
                    .count();
            }
        }

        count
    }

    /// Centres of 3x3 crosses where both diagonals read `MAS` in either direction.
    pub fn search_x_mas(&self) -> usize {
        let mut count = 0;
        for r in 1..self.row_n.saturating_sub(1) {
            for c in 1..self.col_n.saturating_sub(1) {
                let centre = Position::new(r, c);
                if self.letter(&centre) != Some('A') {
                    continue;
                }

                let is_mas = |from: Direction, to: Direction| {
                    let ends = (
                        centre.along(from).and_then(|p| self.letter(&p)),
                        centre.along(to).and_then(|p| self.letter(&p)),
                    );
                    matches!(ends, (Some('M'), Some('S')) | (Some('S'), Some('M')))
                };
                if is_mas(Direction::UpLeft, Direction::DownRight)
                    && is_mas(Direction::UpRight, Direction::DownLeft)
                {
                    count += 1;
                }
            }
        }

        count
    }

    fn reads_along(&self, start_pos: Position, dir: Direction, word: &str) -> bool {
        let mut pos_op = Some(start_pos);
        word.chars().all(|c| {
            if let Some(pos) = pos_op.take() {
                let is_match = self.letter(&pos) == Some(c);
                pos_op = pos.along(dir);
                is_match
            } else {
                false
            }
        })
    }

    fn letter(&self, pos: &Position) -> Option<char> {
        if pos.r >= self.row_n || pos.c >= self.col_n {
            None
        } else {
            self.letters.get(pos.r * self.col_n + pos.c).copied()
        }
    }
}

struct LetterMatrixBuilder {
    letters: Vec<char>,
    row_n: usize,
    col_n: Option<usize>,
}

impl LetterMatrixBuilder {
    pub fn new() -> Self {
        Self {
            letters: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, row_str: &str) -> Result<(), Error> {
        let row_str = row_str.trim_end();
        let char_n = row_str.chars().count();
        let expect_n = *self.col_n.get_or_insert(char_n);
        if expect_n != char_n {
            return Err(Error::InconsistentRow(expect_n, char_n));
        }

        self.letters.extend(row_str.chars());
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> LetterMatrix {
        LetterMatrix {
            letters: self.letters,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn read_letter_mat<P: AsRef<Path>>(path: P) -> Result<LetterMatrix> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = LetterMatrixBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        builder.add_row(&line).with_context(|| {
            format!("Failed to add one row(line {}) to letter matrix.", ind + 1)
        })?;
    }

    let matrix = builder.build();
    debug!(
        row_n = matrix.row_n,
        col_n = matrix.col_n,
        "read letter matrix"
    );
    Ok(matrix)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let matrix = read_letter_mat(path)?;
    Ok((matrix.search("XMAS"), matrix.search_x_mas()))
}
