use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

static INST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(usize, usize),
    Do,
    Dont,
}

/// Corrupted program memory, kept as one text so do()/don't() state spans lines.
pub struct Memory {
    text: String,
}

impl Memory {
    pub fn new(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        INST_PATTERN.captures_iter(&self.text).filter_map(|caps| {
            match (caps.get(1), caps.get(2)) {
                // At most three digits each, so parsing can't fail.
                (Some(l), Some(r)) => Some(Instruction::Mul(
                    l.as_str().parse().ok()?,
                    r.as_str().parse().ok()?,
                )),
                _ if &caps[0] == "do()" => Some(Instruction::Do),
                _ => Some(Instruction::Dont),
            }
        })
    }

    pub fn mul_sum(&self) -> usize {
        self.instructions()
            .map(|inst| match inst {
                Instruction::Mul(l, r) => l * r,
                _ => 0,
            })
            .sum()
    }

    pub fn mul_sum_enable(&self) -> usize {
        self.instructions()
            .fold((0, true), |(sum, do_mul), inst| match inst {
                Instruction::Mul(l, r) if do_mul => (sum + l * r, do_mul),
                Instruction::Mul(..) => (sum, do_mul),
                Instruction::Do => (sum, true),
                Instruction::Dont => (sum, false),
            })
            .0
    }
}

pub fn read_memory<P: AsRef<Path>>(path: P) -> Result<Memory> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let memory = Memory::new(&text);
    debug!(char_n = text.len(), "read corrupted memory");

    Ok(memory)
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let memory = read_memory(path)?;
    Ok((memory.mul_sum(), memory.mul_sum_enable()))
}
