//! LL(1) predictive parser implementation.
//!
//! This module implements a top-down LL(1) predictive parser using a parse table.

use crate::error::{GrammarError, Ll1Conflict, ParseOutcome, RejectReason, Result};
use crate::first_follow::{first_of_string, FirstSets, FollowSets};
use crate::grammar::{Grammar, Production};
use crate::symbol::Symbol;
use std::collections::HashMap;

/// Builds the LL(1) parse table, returning every cell that was
/// written along with every conflicting write that lost out to an
/// earlier one for the same cell.
///
/// The first production to claim a cell keeps it; every later
/// production competing for the same cell is recorded as a conflict
/// rather than aborting the build, so a grammar with several
/// conflicting cells is reported in full.
fn build_table_with_conflicts(
    grammar: &Grammar,
    first_sets: &FirstSets,
    follow_sets: &FollowSets,
) -> (HashMap<(Symbol, Symbol), Production>, Vec<Ll1Conflict>) {
    let mut table: HashMap<(Symbol, Symbol), Production> = HashMap::new();
    let mut conflicts = Vec::new();

    fn claim(
        table: &mut HashMap<(Symbol, Symbol), Production>,
        conflicts: &mut Vec<Ll1Conflict>,
        lhs: Symbol,
        terminal: Symbol,
        production: &Production,
    ) {
        let key = (lhs, terminal);
        match table.get(&key) {
            Some(existing) => conflicts.push(Ll1Conflict {
                nonterminal: lhs,
                terminal,
                existing: existing.clone(),
                attempted: production.clone(),
            }),
            None => {
                table.insert(key, production.clone());
            }
        }
    }

    for production in grammar.all_productions() {
        let lhs = production.lhs;
        let first_alpha = first_of_string(first_sets, &production.rhs);

        for symbol in &first_alpha {
            if !symbol.is_epsilon() {
                claim(&mut table, &mut conflicts, lhs, *symbol, production);
            }
        }

        if first_alpha.contains(&Symbol::Epsilon) {
            let follow_lhs = follow_sets.get(&lhs).cloned().unwrap_or_default();
            for symbol in &follow_lhs {
                claim(&mut table, &mut conflicts, lhs, *symbol, production);
            }
        }
    }

    (table, conflicts)
}

/// LL(1) predictive parser.
#[derive(Debug)]
pub struct LL1Parser {
    grammar: Grammar,
    /// Parse table: M[Nonterminal, Terminal/EndMarker] = Production
    table: HashMap<(Symbol, Symbol), Production>,
    #[allow(dead_code)]
    first_sets: FirstSets,
    #[allow(dead_code)]
    follow_sets: FollowSets,
}

impl LL1Parser {
    /// Builds an LL(1) parser from a grammar.
    ///
    /// # Algorithm
    /// For each production A → α:
    /// 1. For each terminal a in FIRST(α), add A → α to M[A, a]
    /// 2. If ε ∈ FIRST(α), for each b in FOLLOW(A), add A → α to M[A, b]
    ///
    /// If any cell would receive more than one production, every
    /// conflicting write is collected and returned as an error instead
    /// of only the first.
    pub fn build(grammar: Grammar, first_sets: FirstSets, follow_sets: FollowSets) -> Result<Self> {
        let (table, conflicts) = build_table_with_conflicts(&grammar, &first_sets, &follow_sets);

        if !conflicts.is_empty() {
            return Err(GrammarError::Ll1Conflicts(conflicts));
        }

        Ok(Self {
            grammar,
            table,
            first_sets,
            follow_sets,
        })
    }

    /// Recognizes an input string using the LL(1) parse table,
    /// reporting why it was rejected when it was.
    ///
    /// # Algorithm
    /// Stack initially contains [$, S]. Input ends with $.
    ///
    /// At each step:
    /// - If top of stack = current input symbol: pop and advance
    /// - If top is nonterminal: use table to get production, pop and push RHS (reversed)
    /// - If top is terminal but ≠ input: reject (unexpected symbol)
    /// - If table entry is empty: reject (missing table entry)
    /// - Accept when stack is [$] and input is [$]
    pub fn recognize(&self, input: &str) -> ParseOutcome {
        let input_symbols = Grammar::terminate(input);

        let start = self.grammar.start_symbol();
        let mut stack = vec![Symbol::EndMarker, start];
        let mut input_index = 0;

        while !stack.is_empty() {
            if input_index >= input_symbols.len() {
                return ParseOutcome::Reject(RejectReason::StackExhaustion);
            }

            let top = *stack.last().unwrap();
            let current_input = input_symbols[input_index];

            if top == current_input {
                stack.pop();
                input_index += 1;
                continue;
            }

            if top.is_nonterminal() {
                let key = (top, current_input);
                match self.table.get(&key) {
                    Some(production) => {
                        stack.pop();
                        for symbol in production.rhs.iter().rev() {
                            stack.push(*symbol);
                        }
                    }
                    None => return ParseOutcome::Reject(RejectReason::MissingTableEntry),
                }
            } else {
                return ParseOutcome::Reject(RejectReason::UnexpectedSymbol);
            }
        }

        if input_index == input_symbols.len() {
            ParseOutcome::Accept
        } else {
            ParseOutcome::Reject(RejectReason::UnexpectedSymbol)
        }
    }

    /// Convenience wrapper around [`LL1Parser::recognize`] for callers
    /// that only need the accept/reject verdict.
    pub fn parse(&self, input: &str) -> bool {
        self.recognize(input).accepted()
    }

    /// Returns a reference to the parse table.
    pub fn table(&self) -> &HashMap<(Symbol, Symbol), Production> {
        &self.table
    }
}
