//! Grammar module for context-free grammars.
//!
//! This module provides data structures and parsing logic for working with
//! context-free grammars, including productions and grammar representation.

use crate::error::{GrammarError, Result};
use crate::symbol::{string_to_symbols, symbols_to_string, Symbol};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A production rule in a context-free grammar.
///
/// Represents a rule of the form: LHS → RHS
/// where LHS is a single nonterminal and RHS is a sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    /// Left-hand side (always a nonterminal)
    pub lhs: Symbol,
    /// Right-hand side (sequence of symbols); empty means `A -> ε`.
    pub rhs: Vec<Symbol>,
}

impl Production {
    /// Creates a new production.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Self { lhs, rhs }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs_str = if self.rhs.is_empty() {
            "ε".to_string()
        } else {
            symbols_to_string(&self.rhs)
        };
        write!(f, "{} → {}", self.lhs, rhs_str)
    }
}

/// A context-free grammar.
///
/// Contains all productions, symbols, and provides methods for grammar analysis.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// All productions in the grammar, in declaration order
    productions: Vec<Production>,
    /// All nonterminal symbols
    nonterminals: HashSet<Symbol>,
    /// All terminal symbols
    terminals: HashSet<Symbol>,
    /// The start symbol: the left-hand side of the first declared production
    start_symbol: Symbol,
    /// Map from nonterminals to their productions, in declaration order
    production_map: HashMap<Symbol, Vec<Production>>,
}

impl Grammar {
    /// Parses a grammar from input lines.
    ///
    /// # Format
    /// - Line 0: the number of production lines, `k`.
    /// - Lines 1..=k: one production each, `A -> x1 x2 ... xn`, where
    ///   `A` is a single uppercase character and each `xi` is a single
    ///   whitespace-separated token of exactly one character. The
    ///   literal token `e` alone denotes an epsilon production.
    ///   Alternatives for the same left-hand side are separate lines,
    ///   not multiple whitespace-separated groups on one line.
    pub fn parse(lines: &[String]) -> Result<Self> {
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
                actual: lines.len() - 1,
            });
        }

        let mut productions = Vec::with_capacity(k);
        for line in &lines[1..=k] {
            productions.push(Self::parse_production_line(line)?);
        }

        Self::from_productions(productions)
    }

    /// Parses a single production line of the form `A -> x1 x2 ... xn`.
    fn parse_production_line(line: &str) -> Result<Production> {
        let parts: Vec<&str> = line.split("->").collect();
        if parts.len() != 2 {
            return Err(GrammarError::InvalidProduction(line.to_string()));
        }

        let lhs_str = parts[0].trim();
        if lhs_str.chars().count() != 1 {
            return Err(GrammarError::InvalidProduction(format!(
                "left-hand side must be a single character: {line:?}"
            )));
        }
        let lhs_char = lhs_str.chars().next().unwrap();
        if !lhs_char.is_ascii_uppercase() {
            return Err(GrammarError::InvalidProduction(format!(
                "left-hand side must be uppercase: {line:?}"
            )));
        }
        let lhs = Symbol::from_char(lhs_char);

        let tokens: Vec<&str> = parts[1].split_whitespace().collect();
        if tokens.is_empty() {
            return Err(GrammarError::InvalidProduction(format!(
                "missing right-hand side: {line:?}"
            )));
        }

        let rhs = if tokens == ["e"] {
            Vec::new()
        } else {
            let mut symbols = Vec::with_capacity(tokens.len());
            for token in &tokens {
                if token.chars().count() != 1 {
                    return Err(GrammarError::InvalidProduction(format!(
                        "every right-hand side token must be one character: {line:?}"
                    )));
                }
                symbols.push(Symbol::from_char(token.chars().next().unwrap()));
            }
            symbols
        };

        Ok(Production::new(lhs, rhs))
    }

    /// Creates a grammar from a list of productions, in declaration order.
    fn from_productions(productions: Vec<Production>) -> Result<Self> {
        if productions.is_empty() {
            return Err(GrammarError::EmptyInput);
        }

        // The start symbol is the left-hand side of the first production.
        let start_symbol = productions[0].lhs;

        // Extract all nonterminals from LHS
        let lhs_nonterminals: HashSet<Symbol> = productions.iter().map(|p| p.lhs).collect();

        // Extract all symbols from RHS
        let mut rhs_symbols = HashSet::new();
        for prod in &productions {
            for sym in &prod.rhs {
                rhs_symbols.insert(*sym);
            }
        }

        // Partition RHS symbols. An uppercase RHS symbol is a nonterminal
        // even if it never appears as a left-hand side; it simply ends up
        // with an empty production list, hence an empty FIRST/FOLLOW set,
        // and is never silently promoted to a terminal.
        let rhs_nonterminals: HashSet<Symbol> = rhs_symbols
            .iter()
            .filter(|s| s.is_nonterminal())
            .copied()
            .collect();

        let nonterminals: HashSet<Symbol> =
            lhs_nonterminals.union(&rhs_nonterminals).copied().collect();

        let terminals: HashSet<Symbol> = rhs_symbols
            .iter()
            .filter(|s| s.is_terminal())
            .copied()
            .collect();

        // Build production map, preserving declaration order within each entry.
        let mut production_map: HashMap<Symbol, Vec<Production>> = HashMap::new();
        for prod in &productions {
            production_map
                .entry(prod.lhs)
                .or_default()
                .push(prod.clone());
        }

        Ok(Self {
            productions,
            nonterminals,
            terminals,
            start_symbol,
            production_map,
        })
    }

    /// Returns all productions for a given nonterminal, in declaration order.
    pub fn get_productions(&self, nt: Symbol) -> &[Production] {
        self.production_map
            .get(&nt)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns all productions in the grammar, in declaration order.
    pub fn all_productions(&self) -> &[Production] {
        &self.productions
    }

    /// Returns all nonterminals in the grammar.
    pub fn nonterminals(&self) -> &HashSet<Symbol> {
        &self.nonterminals
    }

    /// Returns all terminals in the grammar. `$` is not a member of
    /// this set; callers that need the full lookahead alphabet union
    /// it in explicitly.
    pub fn terminals(&self) -> &HashSet<Symbol> {
        &self.terminals
    }

    /// Returns the start symbol.
    pub fn start_symbol(&self) -> Symbol {
        self.start_symbol
    }

    /// Converts an input string (without the end marker) to symbols,
    /// appending `$` as the terminating symbol. Recognizers take
    /// unterminated strings and call this themselves.
    pub fn terminate(input: &str) -> Vec<Symbol> {
        let mut symbols = string_to_symbols(input);
        symbols.push(Symbol::EndMarker);
        symbols
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prod in &self.productions {
            writeln!(f, "{}", prod)?;
        }
        Ok(())
    }
}
