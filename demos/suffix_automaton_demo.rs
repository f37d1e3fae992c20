//! Demonstration of suffix automaton construction and queries.

use libsam::automaton::{AutomatonError, SuffixAutomaton};

fn main() -> Result<(), AutomatonError> {
    let text = "abcbc";
    let mut sam = SuffixAutomaton::new(text.len())?;

    println!("=== Online Construction ===");
    for symbol in text.chars() {
        sam.extend(symbol)?;
        println!(
            "after {:?}: {} states, {} distinct substrings",
            symbol,
            sam.state_count(),
            sam.count_distinct_substrings()
        );
    }

    println!("\n=== Automaton Structure ===");
    print!("{}", sam);

    println!("\n=== Membership ===");
    for pattern in ["", "bcb", "cab", "abcbc", "cc"] {
        println!("contains({:?}) = {}", pattern, sam.contains(pattern));
    }

    println!("\n=== Aggregates ===");
    println!("Distinct substrings: {}", sam.count_distinct_substrings());
    println!("Longest substring length: {}", sam.longest_substring_length());

    let index = sam.occurrences();
    for pattern in ["b", "bc", "cb"] {
        println!(
            "{:?}: {} occurrence(s), first at {:?}",
            pattern,
            index.count(pattern),
            sam.first_occurrence(pattern)
        );
    }

    println!("\n=== Capacity ===");
    match sam.extend('x') {
        Ok(()) => println!("unexpectedly extended past the declared length"),
        Err(e) => println!("extend('x') rejected: {}", e),
    }

    Ok(())
}
