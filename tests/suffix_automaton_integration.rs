//! Integration tests for SuffixAutomaton construction and queries.
//!
//! These tests exercise the public API end to end: the documented example
//! texts, capacity handling, and agreement with brute-force answers.

use std::collections::HashSet;

use libsam::prelude::*;

fn distinct_substrings(text: &str) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut set = HashSet::new();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            set.insert(chars[start..end].iter().collect::<String>());
        }
    }
    set
}

#[test]
fn test_abcbc() {
    let mut sam = SuffixAutomaton::new(5).unwrap();
    for symbol in "abcbc".chars() {
        sam.extend(symbol).unwrap();
    }

    assert_eq!(sam.count_distinct_substrings(), 12);
    assert_eq!(distinct_substrings("abcbc").len(), 12);
    assert!(sam.contains("bcb"));
    assert!(!sam.contains("cab"));
    assert_eq!(sam.longest_substring_length(), 5);
    sam.validate().unwrap();
}

#[test]
fn test_aaaa() {
    let sam = SuffixAutomaton::from_text("aaaa").unwrap();
    assert_eq!(sam.count_distinct_substrings(), 4);
    assert!(sam.contains("aa"));
    assert!(!sam.contains("aaaaa"));
}

#[test]
fn test_empty_text() {
    let sam = SuffixAutomaton::new(10).unwrap();
    assert_eq!(sam.count_distinct_substrings(), 0);
    assert!(sam.contains(""));
    assert!(!sam.contains("a"));
    assert_eq!(sam.longest_substring_length(), 0);
    assert_eq!(sam.state_count(), 1);
}

#[test]
fn test_single_character_needs_no_clone() {
    let sam = SuffixAutomaton::from_text("x").unwrap();
    assert_eq!(sam.count_distinct_substrings(), 1);
    // The root plus one primary state.
    assert_eq!(sam.state_count(), 2);
    assert!(sam.states().all(|state| !state.is_clone()));
}

#[test]
fn test_zero_capacity_rejects_first_character() {
    let mut sam = SuffixAutomaton::new(0).unwrap();
    assert_eq!(
        sam.extend('a'),
        Err(AutomatonError::CapacityExceeded {
            max_length: 0,
            length: 0,
            requested: 1,
        })
    );
    assert_eq!(sam.state_count(), 1);
}

#[test]
fn test_failed_extension_leaves_automaton_unchanged() {
    let mut sam = SuffixAutomaton::new(6).unwrap();
    sam.push_str("abcabc").unwrap();
    let dump = sam.to_string();
    let distinct = sam.count_distinct_substrings();

    assert!(sam.extend('a').is_err());
    assert!(sam.push_str("").is_ok());
    assert!(sam.push_str("zz").is_err());

    assert_eq!(sam.to_string(), dump);
    assert_eq!(sam.count_distinct_substrings(), distinct);
    assert_eq!(sam.longest_substring_length(), 6);
}

#[test]
fn test_longest_length_counts_extensions() {
    let mut sam = SuffixAutomaton::new(100).unwrap();
    for (i, symbol) in "the rain in spain".chars().enumerate() {
        sam.extend(symbol).unwrap();
        assert_eq!(sam.longest_substring_length(), i + 1);
    }
    assert_eq!(sam.remaining(), 100 - 17);
}

#[test]
fn test_membership_matches_brute_force() {
    let text = "mississippi";
    let sam = SuffixAutomaton::from_text(text).unwrap();
    let substrings = distinct_substrings(text);

    for pattern in &substrings {
        assert!(sam.contains(pattern), "missing {:?}", pattern);
    }
    assert_eq!(sam.count_distinct_substrings(), substrings.len() as u64);

    for pattern in ["ms", "ssss", "pis", "mississippii", "x", "ippim"] {
        assert!(!sam.contains(pattern), "unexpected {:?}", pattern);
    }
}

#[test]
fn test_state_bound_on_worst_case_text() {
    // "abbb...b" reaches the 2n - 1 bound.
    let text = format!("a{}", "b".repeat(20));
    let sam = SuffixAutomaton::from_text(&text).unwrap();
    let n = text.len();
    assert_eq!(sam.state_count(), 2 * n - 1);
    sam.validate().unwrap();
}

#[test]
fn test_suffix_links_form_tree_rooted_at_zero() {
    let sam = SuffixAutomaton::from_text("abracadabra").unwrap();
    for (id, state) in sam.states().enumerate().skip(1) {
        let mut current = id;
        let mut steps = 0;
        while let Some(link) = sam.state(current).unwrap().link() {
            assert!(sam.state(link).unwrap().length() < sam.state(current).unwrap().length());
            current = link;
            steps += 1;
            assert!(steps <= state.length());
        }
        assert_eq!(current, ROOT);
    }
}

#[test]
fn test_occurrence_queries() {
    let sam = SuffixAutomaton::from_text("abracadabra").unwrap();
    let index = sam.occurrences();
    assert_eq!(index.count("abra"), 2);
    assert_eq!(index.count("a"), 5);
    assert_eq!(index.count("cad"), 1);
    assert_eq!(index.count(""), 12);
    assert_eq!(sam.first_occurrence("bra"), Some(1));
    assert_eq!(sam.first_occurrence("dab"), Some(6));
    assert_eq!(sam.longest_common_substring("cadabrx"), "cadabr");
}

#[test]
fn test_shared_automaton_round_trip() {
    let shared = SharedSuffixAutomaton::new(5).unwrap();
    shared.push_str("abcbc").unwrap();
    assert_eq!(shared.count_distinct_substrings(), 12);
    assert_eq!(shared.read().first_occurrence("cbc"), Some(2));

    let sam = shared.try_into_inner().unwrap();
    assert_eq!(sam.longest_substring_length(), 5);
}
