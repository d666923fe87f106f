//! Reads grammar files from disk.
//!
//! # Format
//! - Line 1: `k`, the number of production lines.
//! - Lines 2..=k+1: one production per line (see [`crate::grammar::Grammar::parse`]).
//! - Remaining lines: input strings to recognize, one per line, until a
//!   line containing only `e`, which ends the list without itself
//!   being parsed as an input.

use crate::error::{GrammarError, Result};
use crate::grammar::Grammar;
use std::fs;
use std::path::Path;

/// A grammar together with the batch of input strings to try against it.
pub struct LoadedInput {
    pub grammar: Grammar,
    pub strings: Vec<String>,
}

/// Loads a grammar and its accompanying input strings from a file path.
pub fn load(path: &Path) -> Result<LoadedInput> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();

    if lines.is_empty() {
        return Err(GrammarError::EmptyInput);
    }

    let k = lines[0]
        .trim()
        .parse::<usize>()
        .map_err(|e| GrammarError::InvalidFormat(format!("invalid production count: {e}")))?;

    if lines.len() < k + 1 {
        return Err(GrammarError::NotEnoughProductions {
            expected: k,
            actual: lines.len().saturating_sub(1),
        });
    }

    let grammar_lines = &lines[..=k];
    let grammar = Grammar::parse(grammar_lines)?;

    let mut strings = Vec::new();
    for line in &lines[k + 1..] {
        let trimmed = line.trim();
        if trimmed == "e" {
            break;
        }
        strings.push(trimmed.to_string());
    }

    Ok(LoadedInput { grammar, strings })
}
