use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::Deref,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, trace, warn};

/// Forward moves allowed in one patrol unless configured otherwise.
pub const DEFAULT_MAX_STEPS: usize = 10000;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(char),
    MissingGuard,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in this row, given {}.",
                expect_col_n, real_col_n
            ),
            Error::InvalidChar(c) => {
                write!(f, "Invalid character({}) in text of laboratory layout.", c)
            }
            Error::MissingGuard => {
                write!(f, "There's no guard in given laboratory, but expect one.")
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,

    /// Maximum number of forward moves in one patrol.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// How a trial obstruction is judged to trap the guard.
    #[arg(long, value_enum, default_value_t = LoopCriterion::RepeatedState)]
    pub criterion: LoopCriterion,
}

impl CLIArgs {
    pub fn patrol_config(&self) -> PatrolConfig {
        PatrolConfig {
            max_steps: self.max_steps,
            criterion: self.criterion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoopCriterion {
    /// The guard never leaves the laboratory (a state repeats or the budget runs out).
    RepeatedState,
    /// The guard visits fewer positions than without the obstruction.
    TruncatedVisits,
}

#[derive(Debug, Clone, Copy)]
pub struct PatrolConfig {
    pub max_steps: usize,
    pub criterion: LoopCriterion,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            criterion: LoopCriterion::RepeatedState,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "^"),
            Direction::Right => write!(f, ">"),
            Direction::Down => write!(f, "v"),
            Direction::Left => write!(f, "<"),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '^' => Ok(Direction::Up),
            '>' => Ok(Direction::Right),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            other => Err(Error::InvalidChar(other)),
        }
    }
}

impl Direction {
    pub fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Unit displacement as (row, column).
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    /// The neighbour along `dir`, if it doesn't underflow. Upper bounds are the caller's business.
    pub fn along(&self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.offset();
        Some(Self::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct Guard {
    pos: Position,
    dir: Direction,
}

impl Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.dir, self.pos())
    }
}

impl Guard {
    pub fn new(pos: &Position, dir: Direction) -> Self {
        Self { pos: *pos, dir }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    fn ahead_pos(&self) -> Option<Position> {
        self.pos.along(self.dir)
    }

    fn turn_right(&mut self) {
        self.dir = self.dir.turn_right();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    TempWall,
}

impl Tile {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Tile::Wall | Tile::TempWall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolEnd {
    /// The guard walked off the map.
    Exited,
    /// The guard came back to a position it had already faced the same way in.
    Looped,
    BudgetExhausted,
}

#[derive(Debug)]
pub struct Patrol {
    visited: HashSet<Position>,
    end: PatrolEnd,
}

impl Patrol {
    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    pub fn visited_n(&self) -> usize {
        self.visited.len()
    }

    pub fn end(&self) -> PatrolEnd {
        self.end
    }
}

#[derive(Debug)]
pub struct Laboratory {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
    guard: Guard,
}

impl TryFrom<&str> for Laboratory {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = LaboratoryBuilder::new();
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

impl Laboratory {
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<Tile> {
        if self.is_inside(pos) {
            self.tiles.get(pos.r * self.col_n + pos.c).copied()
        } else {
            None
        }
    }

    /// Walks the guard until it leaves the map, repeats a state or has moved `max_steps` times.
    pub fn patrol(&self, max_steps: usize) -> Patrol {
        let mut cur_guard = self.guard.clone();
        let mut visited = HashSet::new();
        let mut seen_states = HashSet::new();
        seen_states.insert((cur_guard.pos, cur_guard.dir));
        let mut step_n = 0;
        let end = loop {
            if step_n >= max_steps {
                break PatrolEnd::BudgetExhausted;
            }

            let Some(next_pos) = cur_guard.ahead_pos().filter(|p| self.is_inside(p)) else {
                break PatrolEnd::Exited;
            };
            if self.tile(&next_pos).is_some_and(|t| t.is_blocked()) {
                cur_guard.turn_right();
            } else {
                cur_guard.pos = next_pos;
                visited.insert(next_pos);
                step_n += 1;
            }

            if !seen_states.insert((cur_guard.pos, cur_guard.dir)) {
                break PatrolEnd::Looped;
            }
        };

        Patrol { visited, end }
    }

    /// Places a temporary wall at `pos` until the returned handle is dropped.
    ///
    /// Only empty tiles other than the guard's start can be obstructed.
    pub fn obstruct(&mut self, pos: &Position) -> Option<Obstructed<'_>> {
        if *pos == self.guard.pos || self.tile(pos) != Some(Tile::Empty) {
            return None;
        }

        *self.tile_mut(pos)? = Tile::TempWall;
        Some(Obstructed {
            lab: self,
            pos: *pos,
        })
    }

    /// Every position, in row-major order, where one extra obstruction keeps the guard from
    /// patrolling its way out according to `config.criterion`.
    pub fn loop_positions(&mut self, config: &PatrolConfig) -> Vec<Position> {
        let baseline_n = self.patrol(config.max_steps).visited_n();
        let mut positions = Vec::new();
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                let pos = Position::new(r, c);
                let Some(trial) = self.obstruct(&pos) else {
                    continue;
                };

                let patrol = trial.patrol(config.max_steps);
                let is_loop = match config.criterion {
                    LoopCriterion::RepeatedState => patrol.end() != PatrolEnd::Exited,
                    LoopCriterion::TruncatedVisits => patrol.visited_n() < baseline_n,
                };
                if is_loop {
                    trace!(
                        %pos,
                        end = ?patrol.end(),
                        visited_n = patrol.visited_n(),
                        "loop-inducing obstruction"
                    );
                    positions.push(pos);
                }
            }
        }

        debug!(
            criterion = ?config.criterion,
            baseline_n,
            found_n = positions.len(),
            "finished obstruction search"
        );
        positions
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    fn tile_mut(&mut self, pos: &Position) -> Option<&mut Tile> {
        if self.is_inside(pos) {
            self.tiles.get_mut(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

/// A laboratory with one temporary wall, removed again on drop.
pub struct Obstructed<'a> {
    lab: &'a mut Laboratory,
    pos: Position,
}

impl Obstructed<'_> {
    pub fn pos(&self) -> &Position {
        &self.pos
    }
}

impl Deref for Obstructed<'_> {
    type Target = Laboratory;

    fn deref(&self) -> &Self::Target {
        self.lab
    }
}

impl Drop for Obstructed<'_> {
    fn drop(&mut self) {
        if let Some(tile) = self.lab.tile_mut(&self.pos) {
            *tile = Tile::Empty;
        }
    }
}

struct LaboratoryBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
    guard: Option<Guard>,
}

impl LaboratoryBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
            guard: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let row_text = row_text.trim_end();
        let this_col_n = row_text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (ind, c) in row_text.chars().enumerate() {
            match c {
                '.' => self.tiles.push(Tile::Empty),
                '#' => self.tiles.push(Tile::Wall),
                other => {
                    let guard = Guard::new(&Position::new(self.row_n, ind), other.try_into()?);
                    if let Some(first_guard) = &self.guard {
                        warn!(
                            %first_guard,
                            ignored = %guard,
                            "found more than one guard, keep the first"
                        );
                    } else {
                        self.guard = Some(guard);
                    }

                    self.tiles.push(Tile::Empty);
                }
            }
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Laboratory, Error> {
        let guard = self.guard.ok_or(Error::MissingGuard)?;

        Ok(Laboratory {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            guard,
        })
    }
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Laboratory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = LaboratoryBuilder::new();
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

        builder
            .add_row(line.as_str())
            .with_context(|| format!("Failed to add row(line {}) to laboratory.", ind + 1))?;
    }

    let lab = builder.build()?;
    debug!(
        row_n = lab.row_n,
        col_n = lab.col_n,
        guard = %lab.guard,
        "read laboratory"
    );
    Ok(lab)
}

pub fn solve_with<P: AsRef<Path>>(path: P, config: &PatrolConfig) -> Result<(usize, usize)> {
    let mut lab = read_lab(&path)?;
    let visited_n = lab.patrol(config.max_steps).visited_n();
    let loop_n = lab.loop_positions(config).len();

    Ok((visited_n, loop_n))
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    solve_with(path, &PatrolConfig::default())
}
