// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::strategies::arb_outputs;
use crate::record::ExitInfo;
use crate::test_support::{record, record_at, record_exit};
use proptest::prelude::*;

fn history(capacity: usize) -> History {
    History::new(NonZeroUsize::new(capacity).unwrap())
}

fn texts(history: &History) -> Vec<String> {
    history.iter_oldest_first().map(|r| r.text().into_owned()).collect()
}

#[test]
fn empty_history_has_no_current_record() {
    let mut history = history(3);
    assert!(history.is_empty());
    assert!(history.current().is_none());
    assert!(history.previous().is_none());
    assert!(!history.navigate_older());
    assert!(!history.navigate_newer());
}

#[test]
fn append_inserts_newest_first() {
    let mut history = history(3);
    assert_eq!(history.append(record("a")), AppendOutcome::Inserted { evicted: false });
    assert_eq!(history.append(record("b")), AppendOutcome::Inserted { evicted: false });

    assert_eq!(history.len(), 2);
    assert_eq!(history.newest().unwrap().text(), "b");
    assert_eq!(history.get(1).unwrap().text(), "a");
    assert!(history.get(2).is_none());
}

#[test]
fn capacity_overflow_evicts_oldest() {
    let mut history = history(3);
    for output in ["a", "b", "c"] {
        history.append(record(output));
    }
    assert_eq!(history.append(record("d")), AppendOutcome::Inserted { evicted: true });

    assert_eq!(history.len(), 3);
    assert_eq!(texts(&history), vec!["b", "c", "d"]);
}

#[test]
fn ring_wraps_more_than_once() {
    let mut history = history(2);
    for output in ["1", "2", "3", "4", "5", "6", "7"] {
        history.append(record(output));
    }
    assert_eq!(texts(&history), vec!["6", "7"]);
}

#[test]
fn identical_output_only_refreshes_timestamp() {
    let mut history = history(3);
    history.append(record_at("same", 100));
    assert_eq!(history.append(record_at("same", 200)), AppendOutcome::Deduplicated);

    assert_eq!(history.len(), 1);
    assert_eq!(history.newest().unwrap().timestamp_ms(), 200);
}

#[test]
fn duplicate_keeps_first_exit_status() {
    let mut history = history(3);
    history.append(record_exit("same", 0));
    assert_eq!(history.append(record_exit("same", 7)), AppendOutcome::Deduplicated);
    assert_eq!(history.len(), 1);
    assert_eq!(history.newest().unwrap().exit(), &ExitInfo::Exited(0));
}

#[test]
fn dedup_compares_only_against_newest() {
    let mut history = history(3);
    history.append(record("a"));
    history.append(record("b"));
    assert_eq!(history.append(record("a")), AppendOutcome::Inserted { evicted: false });
    assert_eq!(texts(&history), vec!["a", "b", "a"]);
}

#[test]
fn repeated_output_does_not_consume_a_slot() {
    let mut history = history(3);
    for output in ["A", "A", "B", "C", "D"] {
        history.append(record(output));
    }
    assert_eq!(texts(&history), vec!["B", "C", "D"]);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current().unwrap().text(), "D");
}

#[test]
fn navigation_is_clamped() {
    let mut history = history(5);
    for output in ["a", "b", "c"] {
        history.append(record(output));
    }

    assert!(!history.navigate_newer());
    assert!(history.navigate_older());
    assert!(history.navigate_older());
    assert_eq!(history.current().unwrap().text(), "a");
    assert!(history.previous().is_none());
    assert!(!history.navigate_older());
    assert_eq!(history.cursor(), 2);

    assert!(history.navigate_newer());
    assert_eq!(history.current().unwrap().text(), "b");
    assert_eq!(history.previous().unwrap().text(), "a");
}

#[test]
fn reset_cursor_reports_movement() {
    let mut history = history(3);
    history.append(record("a"));
    history.append(record("b"));
    assert!(!history.reset_cursor());
    history.navigate_older();
    assert!(history.reset_cursor());
    assert_eq!(history.cursor(), 0);
}

proptest! {
    #[test]
    fn never_exceeds_capacity(capacity in 1usize..6, outputs in arb_outputs(30)) {
        let mut history = history(capacity);
        let mut previous_len = 0;
        for output in &outputs {
            history.append(record(output));
            prop_assert!(history.len() <= capacity);
            prop_assert!(history.len() >= previous_len);
            previous_len = history.len();
        }
    }

    #[test]
    fn retains_newest_distinct_runs(capacity in 1usize..6, outputs in arb_outputs(30)) {
        let mut history = history(capacity);
        let mut expected: Vec<String> = Vec::new();
        for output in &outputs {
            history.append(record(output));
            if expected.last() != Some(output) {
                expected.push(output.clone());
            }
        }
        let keep = expected.len().saturating_sub(capacity);
        prop_assert_eq!(texts(&history), expected[keep..].to_vec());
    }

    #[test]
    fn cursor_stays_on_populated_record(
        outputs in arb_outputs(10),
        moves in proptest::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut history = history(4);
        for output in &outputs {
            history.append(record(output));
        }
        for older in moves {
            if older { history.navigate_older(); } else { history.navigate_newer(); }
            prop_assert!(history.cursor() < history.len());
            prop_assert!(history.current().is_some());
        }
    }
}

#[test]
fn insert_keeps_cursor_on_browsed_record() {
    let mut history = history(5);
    for output in ["a", "b", "c"] {
        history.append(record(output));
    }
    history.navigate_older();
    assert_eq!(history.current().unwrap().text(), "b");

    history.append(record("d"));
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.current().unwrap().text(), "b");
}

#[test]
fn insert_moves_cursor_to_oldest_when_browsed_record_is_evicted() {
    let mut history = history(3);
    for output in ["a", "b", "c"] {
        history.append(record(output));
    }
    history.navigate_older();
    history.navigate_older();
    assert_eq!(history.current().unwrap().text(), "a");

    history.append(record("d"));
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.current().unwrap().text(), "b");
}

#[test]
fn insert_at_newest_keeps_cursor_at_zero() {
    let mut history = history(3);
    history.append(record("a"));
    history.append(record("b"));
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current().unwrap().text(), "b");
}
