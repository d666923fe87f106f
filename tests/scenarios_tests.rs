//! The six concrete scenarios from the grammar analyzer's specification.
//!
//! Each scenario's left-hand sides are restricted to one character, so
//! primed nonterminals from the textbook presentation (`E'`, `T'`) are
//! renamed to fresh single letters (`G`, `H`) here; the grammars are
//! otherwise exactly as given.

use cfg_parser::grammar::Grammar;
use cfg_parser::orchestrator::Analysis;

fn analyze(lines: Vec<&str>) -> Analysis {
    let lines: Vec<String> = lines.into_iter().map(String::from).collect();
    let grammar = Grammar::parse(&lines).unwrap();
    Analysis::build(grammar)
}

/// A. `S -> S + T | T`, `T -> T * F | F`, `F -> ( S ) | 1`.
/// Not LL(1) (left recursion); is SLR(1).
#[test]
fn scenario_a_left_recursive_expression_grammar() {
    let analysis = analyze(vec![
        "6",
        "S -> S + T",
        "S -> T",
        "T -> T * F",
        "T -> F",
        "F -> ( S )",
        "F -> 1",
    ]);

    assert!(!analysis.is_ll1());
    assert!(analysis.is_slr1());

    let parser = analysis.slr1().unwrap();
    assert!(parser.parse("1+1"));
    assert!(parser.parse("(1)"));
    assert!(parser.parse("1*1+1"));
    assert!(!parser.parse("1+"));
}

/// B. `S -> ( S ) S | ε`. Is LL(1); is SLR(1).
#[test]
fn scenario_b_balanced_parens() {
    let analysis = analyze(vec!["2", "S -> ( S ) S", "S -> e"]);

    assert!(analysis.is_ll1());
    assert!(analysis.is_slr1());

    let ll1 = analysis.ll1().unwrap();
    let slr1 = analysis.slr1().unwrap();

    let accepted = ["", "()", "(())", "(()())"];
    let rejected = ["("];

    for input in accepted {
        assert!(ll1.parse(input), "LL(1) should accept {input:?}");
        assert!(slr1.parse(input), "SLR(1) should accept {input:?}");
    }
    for input in rejected {
        assert!(!ll1.parse(input), "LL(1) should reject {input:?}");
        assert!(!slr1.parse(input), "SLR(1) should reject {input:?}");
    }
}

/// C. `E -> T E'`, `E' -> + T E' | ε`, `T -> F T'`, `T' -> * F T' | ε`,
/// `F -> ( E ) | 1` (primed nonterminals renamed to `G`, `H`). Is
/// LL(1); is SLR(1).
#[test]
fn scenario_c_classic_expression_grammar() {
    let analysis = analyze(vec![
        "8",
        "E -> T G",
        "G -> + T G",
        "G -> e",
        "T -> F H",
        "H -> * F H",
        "H -> e",
        "F -> ( E )",
        "F -> 1",
    ]);

    assert!(analysis.is_ll1());
    assert!(analysis.is_slr1());

    let ll1 = analysis.ll1().unwrap();
    let slr1 = analysis.slr1().unwrap();

    assert!(ll1.parse("1+1*1"));
    assert!(slr1.parse("1+1*1"));
    assert!(!ll1.parse("1++1"));
    assert!(!slr1.parse("1++1"));
}

/// D. `S -> a S b | ε`. Is LL(1); is SLR(1).
#[test]
fn scenario_d_matched_ab_counts() {
    let analysis = analyze(vec!["2", "S -> a S b", "S -> e"]);

    assert!(analysis.is_ll1());
    assert!(analysis.is_slr1());

    let ll1 = analysis.ll1().unwrap();
    let slr1 = analysis.slr1().unwrap();

    let accepted = ["", "ab", "aabb", "aaabbb"];
    let rejected = ["abb", "aab"];

    for input in accepted {
        assert!(ll1.parse(input), "LL(1) should accept {input:?}");
        assert!(slr1.parse(input), "SLR(1) should accept {input:?}");
    }
    for input in rejected {
        assert!(!ll1.parse(input), "LL(1) should reject {input:?}");
        assert!(!slr1.parse(input), "SLR(1) should reject {input:?}");
    }
}

/// E. `S -> A a | b A c | d c | b d a`, `A -> d`. Unambiguous, but the
/// `S -> A a` / `S -> d c` pair (and `S -> b A c` / `S -> b d a` pair)
/// share a FIRST symbol reached through a nonterminal on one side and
/// a terminal on the other, so a single lookahead token can't choose
/// between them: not LL(1). It is also not SLR(1): the state reached
/// on `d` from the start state contains both `A -> d·` and
/// `S -> d·c`, and `c ∈ FOLLOW(A)` (from `S -> b A c`), so the reduce
/// on `c` collides with the shift on `c` — a shift/reduce conflict.
/// This is the textbook LR(1)-but-not-SLR(1) grammar; neither
/// recognizer this crate builds exists for it.
#[test]
fn scenario_e_four_way_branch() {
    let analysis = analyze(vec![
        "5",
        "S -> A a",
        "S -> b A c",
        "S -> d c",
        "S -> b d a",
        "A -> d",
    ]);

    assert!(!analysis.is_ll1());
    assert!(!analysis.is_slr1());
    assert!(analysis.ll1().is_none());
    assert!(analysis.slr1().is_none());
}

/// F. `S -> S S | a`. Ambiguous: neither LL(1) nor SLR(1).
#[test]
fn scenario_f_ambiguous_grammar_builds_neither_parser() {
    let analysis = analyze(vec!["2", "S -> S S", "S -> a"]);

    assert!(!analysis.is_ll1());
    assert!(!analysis.is_slr1());
    assert!(analysis.ll1().is_none());
    assert!(analysis.slr1().is_none());
}
