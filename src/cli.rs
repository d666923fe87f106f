//! CLI module for the grammar parser application.

use crate::error::Result;
use crate::loader;
use crate::orchestrator::Analysis;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Runs the grammar analyzer against a grammar file.
///
/// Loads the grammar and its batch of input strings from `path`,
/// prints the observable analysis report, then — if the grammar is
/// LL(1) and/or SLR(1) — lets the user choose which parser to run the
/// batch through.
pub fn run(path: &Path) -> Result<()> {
    let loaded = loader::load(path)?;
    let analysis = Analysis::build(loaded.grammar);

    print!("{}", analysis.report());

    match (analysis.is_ll1(), analysis.is_slr1()) {
        (true, true) => {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            interactive_mode(&analysis, &loaded.strings, &mut lines)?;
        }
        (true, false) => {
            println!("Grammar is LL(1).");
            let ll1 = analysis.ll1().expect("is_ll1 implies ll1 is Some");
            run_batch(|s| ll1.recognize(s), &loaded.strings);
        }
        (false, true) => {
            println!("Grammar is SLR(1).");
            let slr1 = analysis.slr1().expect("is_slr1 implies slr1 is Some");
            run_batch(|s| slr1.recognize(s), &loaded.strings);
        }
        (false, false) => {
            println!("Grammar is neither LL(1) nor SLR(1).");
        }
    }

    Ok(())
}

/// Runs every string in `batch` through `recognize_fn`, printing the
/// accept/reject verdict for each — and, on rejection, the cause class
/// (`spec.md` §6), via [`crate::error::ParseOutcome`]'s `Display`.
fn run_batch<F>(recognize_fn: F, batch: &[String])
where
    F: Fn(&str) -> crate::error::ParseOutcome,
{
    for input in batch {
        println!("{}", recognize_fn(input));
    }
}

/// Interactive mode for when the grammar is both LL(1) and SLR(1):
/// repeatedly asks which recognizer to run the preloaded batch
/// through.
fn interactive_mode<R: BufRead>(
    analysis: &Analysis,
    batch: &[String],
    lines: &mut io::Lines<R>,
) -> Result<()> {
    let ll1 = analysis.ll1().expect("both parsers available");
    let slr1 = analysis.slr1().expect("both parsers available");

    loop {
        print!("Select a parser (T: for LL(1), B: for SLR(1), Q: quit):\n");
        io::stdout().flush()?;

        let choice = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => return Err(e.into()),
            None => break,
        };

        match choice.as_str() {
            "Q" | "q" => break,
            "T" | "t" => run_batch(|s| ll1.recognize(s), batch),
            "B" | "b" => run_batch(|s| slr1.recognize(s), batch),
            _ => continue,
        }
    }

    Ok(())
}
