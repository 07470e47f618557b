// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution records: the captured result of one command run

use std::borrow::Cow;
use std::fmt;

/// How a command run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitInfo {
    /// The process exited with a status code
    Exited(i32),
    /// The process was terminated by a signal
    Signaled,
    /// The shell could not be spawned
    StartFailed(String),
}

impl ExitInfo {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitInfo::Exited(0))
    }

    /// Exit code to report when this run makes the process exit
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitInfo::Exited(code) => *code,
            ExitInfo::Signaled | ExitInfo::StartFailed(_) => 1,
        }
    }
}

impl fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitInfo::Exited(code) => write!(f, "exit {code}"),
            ExitInfo::Signaled => f.write_str("killed by signal"),
            ExitInfo::StartFailed(reason) => write!(f, "failed to start: {reason}"),
        }
    }
}

/// One captured execution result. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    output: Vec<u8>,
    exit: ExitInfo,
    timestamp_ms: u64,
}

impl ExecutionRecord {
    pub fn new(output: Vec<u8>, exit: ExitInfo, timestamp_ms: u64) -> Self {
        Self { output, exit, timestamp_ms }
    }

    /// Record for a run whose shell never started
    pub fn start_failed(reason: impl Into<String>, timestamp_ms: u64) -> Self {
        Self::new(Vec::new(), ExitInfo::StartFailed(reason.into()), timestamp_ms)
    }

    /// Merged stdout/stderr bytes
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }

    pub fn exit(&self) -> &ExitInfo {
        &self.exit
    }

    /// Completion time in epoch milliseconds
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn same_output(&self, other: &ExecutionRecord) -> bool {
        self.output == other.output
    }

    /// Fold a later run with identical output into this record. Only the
    /// completion time moves; the exit info stays that of the first run.
    pub(crate) fn absorb(&mut self, later: ExecutionRecord) {
        self.timestamp_ms = later.timestamp_ms;
    }
}

crate::builder! {
    pub struct ExecutionRecordBuilder => ExecutionRecord {
        into {
            output: Vec<u8> = "",
        }
        set {
            exit: ExitInfo = ExitInfo::Exited(0),
            timestamp_ms: u64 = 1_000_000,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
