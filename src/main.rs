//! Context-Free Grammar Parser
//!
//! A Rust implementation of LL(1) and SLR(1) parsers for context-free grammars.
//!
//! This implementation provides:
//! - Algorithms to compute FIRST and FOLLOW sets
//! - LL(1) predictive parser (Top-Down)
//! - SLR(1) parser (Bottom-Up)
//! - A CLI that loads a grammar file and its input batch, reports the
//!   analysis, and lets the user pick which recognizer to run
//!
//! # Author
//! Juan Manuel Young Hoyos
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools" (2nd Edition).
//! Addison-Wesley, 2006.

mod cli;
mod error;
mod first_follow;
mod grammar;
mod ll1;
mod loader;
mod lr0;
mod orchestrator;
mod slr1;
mod symbol;

use std::env;
use std::path::Path;
use std::process;

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "cfg_parser".to_string());

    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: {program} <grammar-file>");
            process::exit(2);
        }
    };

    if let Err(e) = cli::run(Path::new(&path)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
