//! Unit tests for LL(1) parser

use cfg_parser::first_follow::{compute_first_sets, compute_follow_sets};
use cfg_parser::grammar::Grammar;
use cfg_parser::ll1::LL1Parser;

fn ad_bc_grammar() -> Vec<String> {
    vec![
        "5".to_string(),
        "S -> A B".to_string(),
        "A -> a A".to_string(),
        "A -> d".to_string(),
        "B -> b B c".to_string(),
        "B -> e".to_string(),
    ]
}

#[test]
fn test_ll1_simple() {
    let grammar = Grammar::parse(&ad_bc_grammar()).unwrap();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);

    let parser = LL1Parser::build(grammar, first_sets, follow_sets);
    assert!(parser.is_ok());

    let parser = parser.unwrap();
    assert!(parser.parse("d"));
    assert!(parser.parse("adbc"));
    assert!(!parser.parse("a"));
}

#[test]
fn test_ll1_accepts_valid_strings() {
    let grammar = Grammar::parse(&ad_bc_grammar()).unwrap();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);
    let parser = LL1Parser::build(grammar, first_sets, follow_sets).unwrap();

    assert!(parser.parse("d"));
    assert!(parser.parse("ad"));
    assert!(parser.parse("aad"));
    assert!(parser.parse("dbc"));
    assert!(parser.parse("adbc"));
}

#[test]
fn test_ll1_rejects_invalid_strings() {
    let grammar = Grammar::parse(&ad_bc_grammar()).unwrap();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);
    let parser = LL1Parser::build(grammar, first_sets, follow_sets).unwrap();

    assert!(!parser.parse("a"));
    assert!(!parser.parse("b"));
    assert!(!parser.parse("abc"));
    assert!(!parser.parse("dd"));
}

#[test]
fn test_ll1_conflict_detection() {
    // Left-recursive: FIRST(S a) and FIRST(b) collide at M[S, ...]? Actually
    // left recursion makes S -> S a loop without a base case; that should
    // fail to build an LL(1) table because FIRST(S a) is never well-defined
    // for a terminating derivation. Use an unambiguously conflicting pair
    // instead: both alternatives of S can start with 'a'.
    let lines = vec![
        "2".to_string(),
        "S -> a A".to_string(),
        "S -> a".to_string(),
    ];

    let grammar = Grammar::parse(&lines).unwrap();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);

    let result = LL1Parser::build(grammar, first_sets, follow_sets);
    assert!(result.is_err());
}

#[test]
fn test_ll1_epsilon_production() {
    let lines = vec![
        "3".to_string(),
        "S -> A".to_string(),
        "A -> a".to_string(),
        "A -> e".to_string(),
    ];

    let grammar = Grammar::parse(&lines).unwrap();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);
    let parser = LL1Parser::build(grammar, first_sets, follow_sets).unwrap();

    assert!(parser.parse("a"));
    assert!(parser.parse(""));
}
