//! First Terms — the evaluator in one screen
//!
//! Prints the opening of the sequence, demonstrates the validation error,
//! and shows an advisory landing in a captured sink.
//!
//! Run with: cargo run --example first_terms -p lento

use lento::{CaptureSink, Evaluator};

fn main() {
    let eval = Evaluator::new();

    // ---------------------------------------------------------------------
    // The happy path: exact terms, recomputed on every call
    // ---------------------------------------------------------------------
    for n in 0..=10 {
        match eval.term(n) {
            Ok(value) => println!("term({n}) = {value}"),
            Err(e) => eprintln!("term({n}) failed: {e}"),
        }
    }

    // ---------------------------------------------------------------------
    // Validation: negative indices fail before any computation
    // ---------------------------------------------------------------------
    match eval.term(-1) {
        Ok(_) => unreachable!("negative indices are rejected"),
        Err(e) => println!("term(-1): {e}"),
    }

    // ---------------------------------------------------------------------
    // Advisories: valid but impractical indices are flagged, not refused
    // ---------------------------------------------------------------------
    let sink = CaptureSink::new();
    let advised = Evaluator::with_sink(&sink);

    // The iterative variant crosses the threshold without the wait.
    let value = advised.term_fast(41).expect("41 is a valid index");
    println!("term_fast(41) = {value}");
    for message in sink.messages() {
        println!("advisory: {message}");
    }
}
