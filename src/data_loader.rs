//! Loading a sequence database from its line-oriented text format.
//!
//! Each non-comment, non-empty line holds one sequence: items are
//! non-negative integers separated by single spaces, `-1` separates
//! consecutive itemsets, and the line terminates with ` -1 -2`. For example
//! `"3 1 -1 2 -1 -2\n"` parses to `[{1, 3}, {2}]`.
//!
//! A line whose first character is `-` is a comment/metadata line and is
//! skipped; a blank line is skipped too. Neither advances the retained
//! sequence count `N`. A malformed (non-integer) token aborts the whole load
//! — there is no partial ingestion.

use crate::errors::{MiningError, Result};
use crate::types::{Item, ItemSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An ordered sequence of itemsets, as read from one database line.
pub type Sequence = Vec<ItemSet>;

/// Read every retained sequence from `path`, in file order.
///
/// Retained means: not a comment line, not blank. The returned vector's
/// index is the sid assigned to that sequence.
pub fn load_database(path: impl AsRef<Path>) -> Result<Vec<Sequence>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut sequences = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('-') {
            continue;
        }
        let sequence = parse_line(&line)
            .map_err(|source| MiningError::ParseDatabase { line: line_no, source })?;
        sequences.push(sequence);
    }
    Ok(sequences)
}

/// Parse one already-trimmed database line into its ordered itemsets.
///
/// Tokenizes on whitespace: a bare `-1` closes the itemset being
/// accumulated, a bare `-2` ends the sequence (anything after it is
/// ignored), and any other token is an item to insert into the itemset
/// currently being accumulated.
pub fn parse_line(line: &str) -> std::result::Result<Sequence, std::num::ParseIntError> {
    let mut itemsets = Vec::new();
    let mut current = ItemSet::new();
    for token in line.split_whitespace() {
        match token {
            "-1" => itemsets.push(std::mem::take(&mut current)),
            "-2" => break,
            item => current.insert(item.parse::<Item>()?),
        }
    }
    Ok(itemsets)
}
