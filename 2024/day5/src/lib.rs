use std::{
    collections::{HashMap, HashSet, VecDeque},
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
    InvalidRuleText(String),
    CyclicRules(Vec<usize>),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRuleText(s) => write!(f, "Invalid rule text({}) for printer.", s),
            Error::CyclicRules(update) => write!(
                f,
                "Rules among pages of update({:?}) form a cycle, can't order them.",
                update
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
pub struct PrinterRules {
    // Page -> pages that must be printed after it.
    rules: HashMap<usize, HashSet<usize>>,
}

impl PrinterRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule_text: &str) -> Result<(), Error> {
        let (left_text, right_text) = rule_text
            .split_once('|')
            .ok_or_else(|| Error::InvalidRuleText(rule_text.to_string()))?;
        let left_n = left_text
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        let right_n = right_text
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        self.rules.entry(left_n).or_default().insert(right_n);

        Ok(())
    }

    pub fn rule_n(&self) -> usize {
        self.rules.values().map(|after| after.len()).sum()
    }

    pub fn is_valid(&self, update: &[usize]) -> bool {
        let page_n = update.len();
        for ind in (0..page_n).rev() {
            if let Some(after_pages_n) = self.rules.get(&update[ind]) {
                if update[..ind].iter().any(|n| after_pages_n.contains(n)) {
                    return false;
                }
            }
        }

        true
    }

    /// Orders `update` with Kahn's algorithm over the rules between its own pages.
    ///
    /// Pages without constraints between them keep their relative order. A repeated page
    /// is sorted once and its copies are kept together.
    pub fn correct(&self, update: &[usize]) -> Result<Vec<usize>, Error> {
        let mut copy_ns = HashMap::new();
        let mut order = Vec::new();
        for &page in update {
            *copy_ns.entry(page).or_insert_with(|| {
                order.push(page);
                0usize
            }) += 1;
        }
        let pages = order.iter().copied().collect::<HashSet<_>>();
        let mut in_degrees = order
            .iter()
            .map(|n| (*n, 0usize))
            .collect::<HashMap<_, _>>();
        for page in &order {
            for after in self.successors(*page, &pages) {
                *in_degrees.entry(after).or_default() += 1;
            }
        }

        let mut ready = order
            .iter()
            .copied()
            .filter(|n| in_degrees.get(n).copied() == Some(0))
            .collect::<VecDeque<_>>();
        let mut corrected = Vec::with_capacity(update.len());
        while let Some(page) = ready.pop_front() {
            let copy_n = copy_ns.get(&page).copied().unwrap_or(1);
            corrected.extend(std::iter::repeat(page).take(copy_n));
            // Keep the original order among newly freed pages.
            for after in order.iter().copied() {
                if !self.successors(page, &pages).any(|n| n == after) {
                    continue;
                }

                if let Some(degree) = in_degrees.get_mut(&after) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(after);
                    }
                }
            }
        }

        if corrected.len() != update.len() {
            return Err(Error::CyclicRules(update.to_vec()));
        }

        Ok(corrected)
    }

    fn successors<'a>(
        &'a self,
        page: usize,
        pages: &'a HashSet<usize>,
    ) -> impl Iterator<Item = usize> + 'a {
        self.rules
            .get(&page)
            .into_iter()
            .flatten()
            .copied()
            .filter(move |n| pages.contains(n))
    }
}

pub fn middle_page(update: &[usize]) -> usize {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

pub fn read_printer_settings<P: AsRef<Path>>(path: P) -> Result<(PrinterRules, Vec<Vec<usize>>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rules = PrinterRules::new();
    let mut lines = reader.lines().enumerate();
    for (ind, line) in lines.by_ref() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            break;
        }

        rules
            .add_rule(line.as_str())
            .with_context(|| format!("Failed to add printer rule text({}).", line))?;
    }

    let mut updates = Vec::new();
    for (ind, line) in lines {
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

        let update = line
            .split(',')
            .map(|s| {
                s.trim().parse::<usize>().with_context(|| {
                    format!("Failed to read page number from string({}) in update.", s)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        updates.push(update);
    }

    debug!(
        rule_n = rules.rule_n(),
        update_n = updates.len(),
        "read printer settings"
    );
    Ok((rules, updates))
}

pub fn solve<P: AsRef<Path>>(path: P) -> Result<(usize, usize)> {
    let (rules, updates) = read_printer_settings(path)?;
    let valid_sum = updates
        .iter()
        .filter(|up| rules.is_valid(up))
        .map(|up| middle_page(up))
        .sum::<usize>();
    let mut corrected_sum = 0;
    for update in updates.iter().filter(|up| !rules.is_valid(up)) {
        corrected_sum += middle_page(&rules.correct(update)?);
    }

    Ok((valid_sum, corrected_sum))
}
