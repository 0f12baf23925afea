//! Domain-specific assertion macros for rosparse harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that make it clear
//! *which* parsing invariant was violated.

use rosparse_core::{LogEntry, LogStore};

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that a `LogEntry` holds exactly the given four fields, in order.
///
/// ```rust
/// assert_fields!(entry, ["INFO", "1", "talker", "hello"]);
/// ```
#[macro_export]
macro_rules! assert_fields {
    ($entry:expr, [$s:expr, $t:expr, $n:expr, $m:expr]) => {{
        let entry: &rosparse_core::LogEntry = &$entry;
        let expected: [&str; 4] = [$s, $t, $n, $m];
        pretty_assertions::assert_eq!(
            entry.fields(),
            expected,
            "assert_fields! failed for entry {:?}",
            entry
        );
    }};
}

/// Assert that a line is rejected by the grammar.
#[macro_export]
macro_rules! assert_rejected {
    ($line:expr) => {{
        let line: &str = &$line;
        if let Ok(entry) = rosparse_core::grammar::parse_line(line) {
            panic!(
                "assert_rejected! failed: line parsed but should not have.\n  line:  {:?}\n  entry: {:?}",
                line, entry
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Store assertions
// ---------------------------------------------------------------------------

/// Assert that both projections have one element per stored entry.
pub fn assert_projections_aligned(store: &LogStore) {
    let sequences = store.entries_as_sequences();
    let mappings = store.entries_as_mappings();
    assert_eq!(
        sequences.len(),
        store.len(),
        "sequence projection length differs from corpus length"
    );
    assert_eq!(
        mappings.len(),
        store.len(),
        "mapping projection length differs from corpus length"
    );
    for ((entry, seq), map) in store.iter().zip(&sequences).zip(&mappings) {
        assert_eq!(&entry.to_sequence(), seq);
        assert_eq!(&entry.to_mapping(), map);
    }
}

/// Assert that a `parse_many` result holds successes exactly at `accepted`.
pub fn assert_accepted_at(results: &[Option<LogEntry>], accepted: &[usize]) {
    let actual: Vec<usize> = results
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.as_ref().map(|_| i))
        .collect();
    pretty_assertions::assert_eq!(
        actual,
        accepted.to_vec(),
        "parse_many accepted the wrong positions"
    );
}
