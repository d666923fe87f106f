//! LR(0) item sets and the canonical collection they form.
//!
//! Shared by `slr1`, which adds FOLLOW-set lookahead on top of the
//! plain LR(0) automaton built here.

use crate::grammar::{Grammar, Production};
use crate::symbol::Symbol;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// A grammar augmented with the synthetic start production `S' -> S`.
///
/// `productions()[0]` is always the augmented production; the rest are
/// the underlying grammar's productions, in their original order and
/// at `index + 1`.
#[derive(Debug, Clone)]
pub struct AugmentedGrammar<'g> {
    grammar: &'g Grammar,
    productions: Vec<Production>,
}

impl<'g> AugmentedGrammar<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        let augmented = Production::new(Symbol::Augmented, vec![grammar.start_symbol()]);
        let mut productions = Vec::with_capacity(grammar.all_productions().len() + 1);
        productions.push(augmented);
        productions.extend(grammar.all_productions().iter().cloned());
        Self {
            grammar,
            productions,
        }
    }

    /// The index of the augmented start production, always `0`.
    pub const AUGMENTED_INDEX: usize = 0;

    pub fn production(&self, index: usize) -> &Production {
        &self.productions[index]
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Indices of every production with the given left-hand side.
    fn productions_for(&self, nt: Symbol) -> Vec<usize> {
        if nt == Symbol::Augmented {
            return vec![Self::AUGMENTED_INDEX];
        }
        self.productions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.lhs == nt)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn grammar(&self) -> &Grammar {
        self.grammar
    }
}

/// An LR(0) item: production index + dot position.
///
/// Indexing into a shared production table (rather than cloning the
/// whole `Production` into every item, as a naive port of the
/// textbook definition would) keeps item sets cheap to compare and
/// hash, and gives `ItemSet` a total order for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    pub production: usize,
    pub dot: usize,
}

impl Item {
    pub fn new(production: usize, dot: usize) -> Self {
        Self { production, dot }
    }

    fn symbol_after_dot(&self, ag: &AugmentedGrammar) -> Option<Symbol> {
        ag.production(self.production).rhs.get(self.dot).copied()
    }

    fn is_reduce_item(&self, ag: &AugmentedGrammar) -> bool {
        self.dot >= ag.production(self.production).rhs.len()
    }
}

/// A state of the LR(0) automaton: a set of items, ordered so that
/// two states built from the same items always compare equal and
/// iterate in the same order.
pub type ItemSet = BTreeSet<Item>;

/// Computes the closure of a set of items.
///
/// For every item `[A -> α•Bβ]` with `B` a nonterminal, adds
/// `[B -> •γ]` for every production `B -> γ`.
pub fn closure(ag: &AugmentedGrammar, items: ItemSet) -> ItemSet {
    let mut result = items;
    let mut changed = true;

    while changed {
        changed = false;
        let current = result.clone();

        for item in &current {
            if let Some(symbol) = item.symbol_after_dot(ag) {
                if symbol.is_nonterminal() {
                    for prod_index in ag.productions_for(symbol) {
                        let new_item = Item::new(prod_index, 0);
                        if result.insert(new_item) {
                            changed = true;
                        }
                    }
                }
            }
        }
    }

    result
}

/// Computes `goto(I, X)`: the closure of every item in `I` with its
/// dot moved past `X`.
pub fn goto(ag: &AugmentedGrammar, items: &ItemSet, symbol: Symbol) -> ItemSet {
    let mut moved = ItemSet::new();

    for item in items {
        if item.symbol_after_dot(ag) == Some(symbol) {
            moved.insert(Item::new(item.production, item.dot + 1));
        }
    }

    closure(ag, moved)
}

/// The canonical collection of LR(0) item sets plus the transition
/// function between them.
pub struct CanonicalCollection {
    pub states: Vec<ItemSet>,
    pub transitions: HashMap<(usize, Symbol), usize>,
}

/// Builds the canonical collection of LR(0) item sets, starting from
/// `[S' -> •S]`.
pub fn build_canonical_collection(ag: &AugmentedGrammar) -> CanonicalCollection {
    let initial = closure(
        ag,
        ItemSet::from([Item::new(AugmentedGrammar::AUGMENTED_INDEX, 0)]),
    );

    let mut states = vec![initial];
    let mut transitions: HashMap<(usize, Symbol), usize> = HashMap::new();
    let mut worklist: VecDeque<usize> = VecDeque::new();
    worklist.push_back(0);

    while let Some(state_id) = worklist.pop_front() {
        let state = states[state_id].clone();

        let mut symbols = HashSet::new();
        for item in &state {
            if let Some(symbol) = item.symbol_after_dot(ag) {
                symbols.insert(symbol);
            }
        }

        for symbol in symbols {
            let next_state = goto(ag, &state, symbol);
            if next_state.is_empty() {
                continue;
            }

            if let Some(existing_id) = states.iter().position(|s| s == &next_state) {
                transitions.insert((state_id, symbol), existing_id);
            } else {
                let new_id = states.len();
                states.push(next_state);
                worklist.push_back(new_id);
                transitions.insert((state_id, symbol), new_id);
            }
        }
    }

    CanonicalCollection {
        states,
        transitions,
    }
}

/// True iff the dot in `item` sits at the end of its production.
pub fn is_reduce_item(ag: &AugmentedGrammar, item: &Item) -> bool {
    item.is_reduce_item(ag)
}

/// The symbol immediately after the dot, if any.
pub fn symbol_after_dot(ag: &AugmentedGrammar, item: &Item) -> Option<Symbol> {
    item.symbol_after_dot(ag)
}
