//! Error types for the CFG parser.

use crate::grammar::Production;
use crate::symbol::Symbol;
use std::fmt;
use thiserror::Error;

/// A single LL(1) table conflict: two productions of the same
/// non-terminal both claim cell `M[nonterminal, terminal]`.
///
/// The table builder keeps the first production it saw in the cell
/// and records every later attempt to overwrite it as one of these,
/// so a grammar with several conflicting cells is reported in full
/// rather than stopping at the first one (see `spec.md` §4.4, §5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ll1Conflict {
    pub nonterminal: Symbol,
    pub terminal: Symbol,
    pub existing: Production,
    pub attempted: Production,
}

impl fmt::Display for Ll1Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M[{}, {}]: {}  vs.  {}",
            self.nonterminal, self.terminal, self.existing, self.attempted
        )
    }
}

/// A single SLR(1) ACTION-table conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slr1Conflict {
    /// State `state` has both a shift and a reduce on `lookahead`.
    ShiftReduce { state: usize, lookahead: Symbol },
    /// State `state` has two distinct reductions on `lookahead`.
    ReduceReduce {
        state: usize,
        lookahead: Symbol,
        first: Production,
        second: Production,
    },
}

impl fmt::Display for Slr1Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slr1Conflict::ShiftReduce { state, lookahead } => {
                write!(f, "shift/reduce in state {state} on {lookahead}")
            }
            Slr1Conflict::ReduceReduce {
                state,
                lookahead,
                first,
                second,
            } => write!(
                f,
                "reduce/reduce in state {state} on {lookahead}: {first}  vs.  {second}"
            ),
        }
    }
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur during grammar parsing and analysis.
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Invalid grammar format: {0}")]
    InvalidFormat(String),

    #[error("Invalid production format: {0}")]
    InvalidProduction(String),

    #[error("Empty grammar input")]
    EmptyInput,

    #[error("Not enough production lines: expected {expected}, got {actual}")]
    NotEnoughProductions { expected: usize, actual: usize },

    #[error("grammar is not LL(1): {}", join_display(.0))]
    Ll1Conflicts(Vec<Ll1Conflict>),

    #[error("grammar is not SLR(1): {}", join_display(.0))]
    Slr1Conflicts(Vec<Slr1Conflict>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Why a recognizer rejected an input string.
///
/// These are the four cause classes required of the observable report
/// (`spec.md` §6). The LL(1) recognizer reports `UnexpectedSymbol`
/// when the terminal on top of the stack doesn't match the current
/// input symbol (or input remains after the stack has emptied) and
/// `MissingTableEntry` when `M[A, a]` is undefined. The SLR(1)
/// recognizer reports `MissingTableEntry` when a reduce leaves GOTO
/// undefined and `UnknownAction` when `ACTION[s, a]` itself is
/// undefined — including a non-terminal character appearing in the
/// input, since no shift/reduce/accept action is ever keyed by one.
/// Both recognizers report `StackExhaustion` when the input runs out
/// before the stack does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnexpectedSymbol,
    MissingTableEntry,
    StackExhaustion,
    UnknownAction,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::UnexpectedSymbol => "unexpected symbol",
            RejectReason::MissingTableEntry => "missing table entry",
            RejectReason::StackExhaustion => "stack exhaustion",
            RejectReason::UnknownAction => "unknown action",
        };
        write!(f, "{s}")
    }
}

/// The verdict of recognizing one input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Accept,
    Reject(RejectReason),
}

impl ParseOutcome {
    /// True iff this outcome is `Accept`.
    pub const fn accepted(&self) -> bool {
        matches!(self, ParseOutcome::Accept)
    }
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutcome::Accept => write!(f, "yes"),
            ParseOutcome::Reject(reason) => write!(f, "no ({reason})"),
        }
    }
}
