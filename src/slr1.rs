//! SLR(1) bottom-up parser implementation.
//!
//! This module implements a shift-reduce SLR(1) parser using the
//! LR(0) automaton from [`crate::lr0`] with lookahead from FOLLOW sets.

use crate::error::{GrammarError, ParseOutcome, RejectReason, Result, Slr1Conflict};
use crate::first_follow::FollowSets;
use crate::grammar::{Grammar, Production};
use crate::lr0::{self, AugmentedGrammar};
use crate::symbol::Symbol;
use std::collections::HashMap;

/// SLR(1) action.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Shift(usize),
    Reduce(Production),
    Accept,
}

/// The ACTION/GOTO tables produced by [`build_tables_with_conflicts`].
struct Tables {
    action: HashMap<(usize, Symbol), Action>,
    goto: HashMap<(usize, Symbol), usize>,
}

/// Builds the ACTION and GOTO tables for an augmented grammar's LR(0)
/// automaton, collecting every shift/reduce and reduce/reduce
/// conflict instead of stopping at the first one.
///
/// Shared by [`SLR1Parser::build`] and [`is_slr1`] so the two can
/// never disagree about what counts as a conflict.
fn build_tables_with_conflicts(
    ag: &AugmentedGrammar,
    states: &[lr0::ItemSet],
    transitions: &HashMap<(usize, Symbol), usize>,
    follow_sets: &FollowSets,
) -> (Tables, Vec<Slr1Conflict>) {
    let mut action: HashMap<(usize, Symbol), Action> = HashMap::new();
    let mut goto: HashMap<(usize, Symbol), usize> = HashMap::new();
    let mut conflicts = Vec::new();

    for (state_id, state) in states.iter().enumerate() {
        for item in state {
            if !lr0::is_reduce_item(ag, item) {
                // Shift items: [A -> α•aβ] where a is terminal or $
                if let Some(symbol) = lr0::symbol_after_dot(ag, item) {
                    if symbol.is_terminal() || symbol.is_end_marker() {
                        if let Some(&next_state) = transitions.get(&(state_id, symbol)) {
                            let key = (state_id, symbol);
                            match action.get(&key) {
                                None => {
                                    action.insert(key, Action::Shift(next_state));
                                }
                                Some(Action::Shift(existing)) if *existing == next_state => {}
                                _ => conflicts.push(Slr1Conflict::ShiftReduce {
                                    state: state_id,
                                    lookahead: symbol,
                                }),
                            }
                        }
                    }
                }
                continue;
            }

            let production = ag.production(item.production);

            if item.production == AugmentedGrammar::AUGMENTED_INDEX {
                // Accept item: [S' -> S•]
                action.insert((state_id, Symbol::EndMarker), Action::Accept);
                continue;
            }

            let follow_a = follow_sets
                .get(&production.lhs)
                .cloned()
                .unwrap_or_default();

            for symbol in follow_a {
                let key = (state_id, symbol);
                match action.get(&key) {
                    None => {
                        action.insert(key, Action::Reduce(production.clone()));
                    }
                    Some(Action::Shift(_)) => conflicts.push(Slr1Conflict::ShiftReduce {
                        state: state_id,
                        lookahead: symbol,
                    }),
                    Some(Action::Reduce(other)) => {
                        if *other != *production {
                            conflicts.push(Slr1Conflict::ReduceReduce {
                                state: state_id,
                                lookahead: symbol,
                                first: other.clone(),
                                second: production.clone(),
                            });
                        }
                    }
                    Some(Action::Accept) => {}
                }
            }
        }

        for (key, &next_state) in transitions {
            let (src, symbol) = key;
            if *src == state_id && symbol.is_nonterminal() {
                goto.insert((state_id, *symbol), next_state);
            }
        }
    }

    (Tables { action, goto }, conflicts)
}

/// Detects whether a grammar is SLR(1) without constructing a usable
/// parser, surfacing every conflict found.
pub fn is_slr1(grammar: &Grammar, follow_sets: &FollowSets) -> Vec<Slr1Conflict> {
    let ag = AugmentedGrammar::new(grammar);
    let collection = lr0::build_canonical_collection(&ag);
    let (_, conflicts) =
        build_tables_with_conflicts(&ag, &collection.states, &collection.transitions, follow_sets);
    conflicts
}

/// SLR(1) parser.
#[derive(Debug)]
pub struct SLR1Parser {
    grammar: Grammar,
    /// ACTION table: (state, terminal/end_marker) → Action
    action_table: HashMap<(usize, Symbol), Action>,
    /// GOTO table: (state, nonterminal) → state
    goto_table: HashMap<(usize, Symbol), usize>,
}

impl SLR1Parser {
    /// Builds an SLR(1) parser from a grammar.
    pub fn build(grammar: Grammar, follow_sets: FollowSets) -> Result<Self> {
        let ag = AugmentedGrammar::new(&grammar);
        let collection = lr0::build_canonical_collection(&ag);

        let (tables, conflicts) = build_tables_with_conflicts(
            &ag,
            &collection.states,
            &collection.transitions,
            &follow_sets,
        );

        if !conflicts.is_empty() {
            return Err(GrammarError::Slr1Conflicts(conflicts));
        }

        Ok(Self {
            grammar,
            action_table: tables.action,
            goto_table: tables.goto,
        })
    }

    /// Recognizes an input string using the SLR(1) shift-reduce
    /// algorithm, reporting why it was rejected when it was.
    pub fn recognize(&self, input: &str) -> ParseOutcome {
        let input_symbols = Grammar::terminate(input);

        let mut stack: Vec<usize> = vec![0];
        let mut input_index = 0;

        loop {
            if input_index >= input_symbols.len() {
                return ParseOutcome::Reject(RejectReason::StackExhaustion);
            }

            let state = *stack.last().unwrap();
            let current_symbol = input_symbols[input_index];
            let key = (state, current_symbol);

            match self.action_table.get(&key) {
                Some(Action::Accept) => return ParseOutcome::Accept,
                Some(Action::Shift(next_state)) => {
                    stack.push(*next_state);
                    input_index += 1;
                }
                Some(Action::Reduce(production)) => {
                    let rhs_len = production.rhs.len();
                    for _ in 0..rhs_len {
                        stack.pop();
                    }

                    let state_after_pop = match stack.last() {
                        Some(s) => *s,
                        None => return ParseOutcome::Reject(RejectReason::StackExhaustion),
                    };

                    let goto_key = (state_after_pop, production.lhs);
                    match self.goto_table.get(&goto_key) {
                        Some(&next_state) => stack.push(next_state),
                        None => return ParseOutcome::Reject(RejectReason::MissingTableEntry),
                    }
                }
                None => return ParseOutcome::Reject(RejectReason::UnknownAction),
            }
        }
    }

    /// Convenience wrapper around [`SLR1Parser::recognize`] for
    /// callers that only need the accept/reject verdict.
    pub fn parse(&self, input: &str) -> bool {
        self.recognize(input).accepted()
    }

    /// The grammar this parser was built from.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}
