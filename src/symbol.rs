//! Symbol types and utilities for context-free grammars.
//!
//! This module defines the core Symbol type and utility functions for working with
//! grammar symbols (terminals, nonterminals, epsilon, and end marker).

use std::cmp::Ordering;
use std::fmt;

/// Represents a symbol in a context-free grammar.
///
/// # Grammar Conventions
/// - Terminals: Any character that is NOT uppercase (a-z, 0-9, symbols, etc.)
/// - Nonterminals: Uppercase letters (A-Z)
/// - Epsilon: The empty string, represented by 'e'
/// - EndMarker: The end-of-input marker '$'
///
/// A fifth case, [`Symbol::Augmented`], never comes from grammar text.
/// It is the synthetic left-hand side of the augmenting production
/// `S' -> S` used by the LR(0) builder. Grammar symbols are one
/// character wide, which leaves no room to spell a fresh nonterminal
/// by appending a quote to the start symbol's character, so it gets
/// its own variant instead: disjoint from every `Nonterminal(char)` by
/// construction rather than by picking an unused letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A terminal symbol (lowercase, digits, or special characters)
    Terminal(char),
    /// A nonterminal symbol (uppercase letter)
    Nonterminal(char),
    /// The empty string (ε)
    Epsilon,
    /// The end-of-input marker ($)
    EndMarker,
    /// The synthetic augmenting start symbol `S'`, used only by `lr0`/`slr1`.
    Augmented,
}

impl Symbol {
    /// Converts a character to a symbol based on grammar conventions.
    ///
    /// # Examples
    /// ```
    /// use cfg_parser::symbol::Symbol;
    /// let sym = Symbol::from_char('A'); // Nonterminal
    /// let sym = Symbol::from_char('a'); // Terminal
    /// let sym = Symbol::from_char('e'); // Epsilon
    /// let sym = Symbol::from_char('$'); // EndMarker
    /// ```
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Symbol::Nonterminal(c)
        } else if c == 'e' {
            Symbol::Epsilon
        } else if c == '$' {
            Symbol::EndMarker
        } else {
            Symbol::Terminal(c)
        }
    }

    /// Checks if this symbol is a terminal.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Checks if this symbol is a nonterminal.
    ///
    /// [`Symbol::Augmented`] is a synthetic left-hand side, not a
    /// nonterminal drawn from the input grammar, so it is excluded.
    #[inline]
    pub const fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    /// Checks if this symbol is epsilon (ε).
    #[inline]
    pub const fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Checks if this symbol is the end marker ($).
    #[inline]
    pub const fn is_end_marker(&self) -> bool {
        matches!(self, Symbol::EndMarker)
    }

    /// Checks if this is the synthetic augmenting start symbol.
    #[inline]
    pub const fn is_augmented(&self) -> bool {
        matches!(self, Symbol::Augmented)
    }

    /// Returns the character representation of this symbol, if applicable.
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Terminal(c) | Symbol::Nonterminal(c) => Some(*c),
            Symbol::Epsilon | Symbol::EndMarker | Symbol::Augmented => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(c) | Symbol::Nonterminal(c) => write!(f, "{}", c),
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::EndMarker => write!(f, "$"),
            Symbol::Augmented => write!(f, "S'"),
        }
    }
}

/// Custom ordering for symbols to ensure consistent sorting.
///
/// Order: Epsilon < Terminals < Nonterminals < Augmented < EndMarker
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Symbol::Epsilon, Symbol::Epsilon) => Ordering::Equal,
            (Symbol::Epsilon, _) => Ordering::Less,
            (_, Symbol::Epsilon) => Ordering::Greater,

            (Symbol::EndMarker, Symbol::EndMarker) => Ordering::Equal,
            (Symbol::EndMarker, _) => Ordering::Greater,
            (_, Symbol::EndMarker) => Ordering::Less,

            (Symbol::Augmented, Symbol::Augmented) => Ordering::Equal,
            (Symbol::Augmented, _) => Ordering::Greater,
            (_, Symbol::Augmented) => Ordering::Less,

            (Symbol::Terminal(c1), Symbol::Terminal(c2)) => c1.cmp(c2),
            (Symbol::Terminal(_), Symbol::Nonterminal(_)) => Ordering::Less,
            (Symbol::Nonterminal(_), Symbol::Terminal(_)) => Ordering::Greater,
            (Symbol::Nonterminal(c1), Symbol::Nonterminal(c2)) => c1.cmp(c2),
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Converts a string into a vector of symbols.
pub fn string_to_symbols(s: &str) -> Vec<Symbol> {
    s.chars().map(Symbol::from_char).collect()
}

/// Converts a vector of symbols back to a string.
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_from_char() {
        assert!(Symbol::from_char('A').is_nonterminal());
        assert!(Symbol::from_char('a').is_terminal());
        assert!(Symbol::from_char('e').is_epsilon());
        assert!(Symbol::from_char('$').is_end_marker());
        assert!(Symbol::from_char('+').is_terminal());
    }

    #[test]
    fn test_symbol_ordering() {
        assert!(Symbol::Epsilon < Symbol::Terminal('a'));
        assert!(Symbol::Terminal('a') < Symbol::Nonterminal('A'));
        assert!(Symbol::Nonterminal('A') < Symbol::Augmented);
        assert!(Symbol::Augmented < Symbol::EndMarker);
    }

    #[test]
    fn test_string_conversion() {
        let symbols = string_to_symbols("AaB");
        assert_eq!(symbols.len(), 3);
        assert!(symbols[0].is_nonterminal());
        assert!(symbols[1].is_terminal());
        assert!(symbols[2].is_nonterminal());
    }

    #[test]
    fn test_symbols_to_string() {
        let symbols = vec![
            Symbol::Nonterminal('S'),
            Symbol::Terminal('a'),
            Symbol::EndMarker,
        ];
        let s = symbols_to_string(&symbols);
        assert_eq!(s, "Sa$");
    }

    #[test]
    fn test_symbol_equality() {
        assert_eq!(Symbol::Terminal('a'), Symbol::Terminal('a'));
        assert_ne!(Symbol::Terminal('a'), Symbol::Terminal('b'));
        assert_ne!(Symbol::Terminal('a'), Symbol::Nonterminal('A'));
    }

    #[test]
    fn test_epsilon_special_case() {
        let epsilon = Symbol::from_char('e');
        assert!(epsilon.is_epsilon());
        assert!(!epsilon.is_terminal());
        assert!(!epsilon.is_nonterminal());
    }

    #[test]
    fn test_augmented_is_not_nonterminal() {
        let aug = Symbol::Augmented;
        assert!(aug.is_augmented());
        assert!(!aug.is_nonterminal());
        assert!(!aug.is_terminal());
        assert_ne!(aug, Symbol::Nonterminal('S'));
    }
}
