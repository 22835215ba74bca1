use std::{
    error,
    fmt::Display,
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidChar(c) => write!(f, "Invalid character({}) for file system text.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileSystem {
    blocks: Vec<Option<usize>>,
}

impl TryFrom<&str> for FileSystem {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut blocks = Vec::new();
        let mut file_id = 0;
        for (ind, c) in value.trim().chars().enumerate() {
            let block_n = c.to_digit(10).ok_or(Error::InvalidChar(c))? as usize;
            let block = if ind % 2 == 0 {
                let cur_file_id = file_id;
                file_id += 1;
                Some(cur_file_id)
            } else {
                None
            };
            blocks.extend(std::iter::repeat(block).take(block_n));
        }

        Ok(Self { blocks })
    }
}

impl FileSystem {
    pub fn blocks(&self) -> &[Option<usize>] {
        &self.blocks
    }

    /// Moves single blocks from the end into the leftmost free block until there are no gaps.
    pub fn compact_per_block(&mut self) {
        let mut free_ind = 0;
        let mut move_ind = self.blocks.len();
        loop {
            while free_ind < move_ind && self.blocks[free_ind].is_some() {
                free_ind += 1;
            }
            while move_ind > free_ind && self.blocks[move_ind - 1].is_none() {
                move_ind -= 1;
            }
            if move_ind <= free_ind {
                break;
            }

            self.blocks.swap(free_ind, move_ind - 1);
        }
    }

    /// Moves each whole file once, highest ID first, into the leftmost free span before it
    /// that can hold it.
    ///
    /// Files must still be contiguous, i.e. not already compacted per block.
    pub fn compact_per_file(&mut self) {
        let mut free_ranges = self.free_ranges();
        let file_ranges = self.file_ranges();
        let mut moved_n = 0;
        for file_range in file_ranges.iter().rev().filter(|r| !r.is_empty()) {
            let file_len = file_range.len();
            let Some(free_range) = free_ranges
                .iter_mut()
                .take_while(|r| r.start < file_range.start)
                .find(|r| r.len() >= file_len)
            else {
                continue;
            };

            for (move_ind, free_ind) in file_range.clone().zip(free_range.clone()) {
                self.blocks.swap(move_ind, free_ind);
            }
            free_range.start += file_len;
            moved_n += 1;
        }

        debug!(file_n = file_ranges.len(), moved_n, "compacted per file");
    }

    pub fn checksum(&self) -> usize {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(ind, b)| b.as_ref().map(|id| ind * *id))
            .sum::<usize>()
    }

    // Indexed by file ID.
    fn file_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        for (ind, block) in self.blocks.iter().enumerate() {
            if let Some(id) = *block {
                if ranges.len() <= id {
                    ranges.resize(id + 1, 0..0);
                }
                if ranges[id].is_empty() {
                    ranges[id] = ind..(ind + 1);
                } else {
                    ranges[id].end = ind + 1;
                }
            }
        }

        ranges
    }

    fn free_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut free_start = None;
        for (ind, block) in self.blocks.iter().enumerate() {
            match (block, free_start) {
                (None, None) => free_start = Some(ind),
                (Some(_), Some(start)) => {
                    ranges.push(start..ind);
                    free_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = free_start {
            ranges.push(start..self.blocks.len());
        }

        ranges
    }
}

pub fn read_file_system<P: AsRef<Path>>(path: P) -> Result<FileSystem> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let file_system = FileSystem::try_from(text.as_str())?;
    debug!(block_n = file_system.blocks.len(), "read file system");

    Ok(file_system)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let file_system = read_file_system(path)?;
    let mut per_block = file_system.clone();
    per_block.compact_per_block();
    let mut per_file = file_system;
    per_file.compact_per_file();

    Ok((per_block.checksum(), per_file.checksum()))
}
