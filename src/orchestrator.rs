//! Pure analysis sequencing: FIRST → FOLLOW → LL(1) → SLR(1).
//!
//! Kept free of I/O so it can be driven equally from the CLI, from a
//! batch of grammar files, or from tests. [`crate::loader`] and
//! [`crate::cli`] are the modules that touch the filesystem and the
//! terminal respectively.

use crate::error::{Ll1Conflict, Slr1Conflict};
use crate::first_follow::{compute_first_sets, compute_follow_sets, FirstSets, FollowSets};
use crate::grammar::Grammar;
use crate::ll1::LL1Parser;
use crate::slr1::SLR1Parser;
use crate::symbol::{symbols_to_string, Symbol};
use std::fmt::Write as _;

/// The result of analyzing one grammar: its FIRST/FOLLOW sets and
/// whichever of the LL(1)/SLR(1) parsers could be built.
pub struct Analysis {
    grammar: Grammar,
    first_sets: FirstSets,
    follow_sets: FollowSets,
    ll1: Option<LL1Parser>,
    ll1_conflicts: Vec<Ll1Conflict>,
    slr1: Option<SLR1Parser>,
    slr1_conflicts: Vec<Slr1Conflict>,
}

impl Analysis {
    /// Runs the full FIRST/FOLLOW/LL(1)/SLR(1) pipeline over a grammar.
    pub fn build(grammar: Grammar) -> Self {
        let first_sets = compute_first_sets(&grammar);
        let follow_sets = compute_follow_sets(&grammar, &first_sets);

        let (ll1, ll1_conflicts) =
            match LL1Parser::build(grammar.clone(), first_sets.clone(), follow_sets.clone()) {
                Ok(parser) => (Some(parser), Vec::new()),
                Err(crate::error::GrammarError::Ll1Conflicts(conflicts)) => (None, conflicts),
                Err(_) => (None, Vec::new()),
            };

        let (slr1, slr1_conflicts) = match SLR1Parser::build(grammar.clone(), follow_sets.clone())
        {
            Ok(parser) => (Some(parser), Vec::new()),
            Err(crate::error::GrammarError::Slr1Conflicts(conflicts)) => (None, conflicts),
            Err(_) => (None, Vec::new()),
        };

        Self {
            grammar,
            first_sets,
            follow_sets,
            ll1,
            ll1_conflicts,
            slr1,
            slr1_conflicts,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn ll1(&self) -> Option<&LL1Parser> {
        self.ll1.as_ref()
    }

    pub fn slr1(&self) -> Option<&SLR1Parser> {
        self.slr1.as_ref()
    }

    pub fn is_ll1(&self) -> bool {
        self.ll1.is_some()
    }

    pub fn is_slr1(&self) -> bool {
        self.slr1.is_some()
    }

    /// Renders an observable, human-readable report of the analysis:
    /// the start symbol, FIRST/FOLLOW sets for every nonterminal, and
    /// the LL(1)/SLR(1) verdicts with their conflicts when rejected.
    pub fn report(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "start symbol: {}", self.grammar.start_symbol());

        let mut nonterminals: Vec<Symbol> = self.grammar.nonterminals().iter().copied().collect();
        nonterminals.sort();

        let _ = writeln!(out, "FIRST sets:");
        for nt in &nonterminals {
            let mut set: Vec<Symbol> = self
                .first_sets
                .get(nt)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .collect();
            set.sort();
            let rendered = set
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  FIRST({nt}) = {{{rendered}}}");
        }

        let _ = writeln!(out, "FOLLOW sets:");
        for nt in &nonterminals {
            let mut set: Vec<Symbol> = self
                .follow_sets
                .get(nt)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .collect();
            set.sort();
            let rendered = set
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  FOLLOW({nt}) = {{{rendered}}}");
        }

        match &self.ll1 {
            Some(parser) => {
                let _ = writeln!(out, "LL(1): yes");
                let mut cells: Vec<(&(Symbol, Symbol), &crate::grammar::Production)> =
                    parser.table().iter().collect();
                cells.sort_by_key(|((nt, t), _)| (*nt, *t));
                for ((nt, t), production) in cells {
                    let alpha = if production.rhs.is_empty() {
                        "ε".to_string()
                    } else {
                        symbols_to_string(&production.rhs)
                    };
                    let _ = writeln!(out, "  ({nt}, {t}) -> {alpha}");
                }
            }
            None => {
                let _ = writeln!(out, "LL(1): no");
                for conflict in &self.ll1_conflicts {
                    let _ = writeln!(out, "  conflict: {conflict}");
                }
            }
        }

        match &self.slr1 {
            Some(_) => {
                let _ = writeln!(out, "SLR(1): yes");
            }
            None => {
                let _ = writeln!(out, "SLR(1): no");
                for conflict in &self.slr1_conflicts {
                    let _ = writeln!(out, "  conflict: {conflict}");
                }
            }
        }

        out
    }
}
