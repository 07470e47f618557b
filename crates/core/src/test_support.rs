// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::record::{ExecutionRecord, ExitInfo};

// ── Proptest strategies ─────────────────────────────────────────────────

pub mod strategies {
    use proptest::prelude::*;

    /// Short command outputs drawn from a small alphabet so that repeats,
    /// shared prefixes and multi-byte characters all show up often.
    pub fn arb_output() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just('a'), Just('b'), Just('\n'), Just('é')], 0..12)
            .prop_map(|chars| chars.into_iter().collect())
    }

    pub fn arb_outputs(max: usize) -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(arb_output(), 1..max)
    }
}

// ── Record factory functions ────────────────────────────────────────────

/// Successful run with the given output
pub fn record(output: &str) -> ExecutionRecord {
    ExecutionRecord::builder().output(output).build()
}

/// Successful run with the given output, completed at `timestamp_ms`
pub fn record_at(output: &str, timestamp_ms: u64) -> ExecutionRecord {
    ExecutionRecord::builder().output(output).timestamp_ms(timestamp_ms).build()
}

/// Run that exited with `code`
pub fn record_exit(output: &str, code: i32) -> ExecutionRecord {
    ExecutionRecord::builder().output(output).exit(ExitInfo::Exited(code)).build()
}
