// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render-ready snapshot handed to the presentation layer after every event

use crate::diff::{DiffMode, Span, SpanKind};
use crate::record::ExitInfo;
use crate::scheduler::SchedulerState;
use std::sync::Arc;
use std::time::Duration;

/// A run of displayed text, highlighted when it was inserted by the diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub inserted: bool,
}

/// Text to show for the viewed record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText {
    segments: Vec<Segment>,
}

impl DisplayText {
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self { segments: vec![Segment { text, inserted: false }] }
    }

    /// Build from diff spans; deleted spans are dropped.
    pub fn from_spans(spans: &[Span]) -> Self {
        let mut segments: Vec<Segment> = Vec::new();
        for span in spans {
            let inserted = match span.kind {
                SpanKind::Equal => false,
                SpanKind::Inserted => true,
                SpanKind::Deleted => continue,
            };
            match segments.last_mut() {
                Some(last) if last.inserted == inserted => last.text.push_str(&span.text),
                _ => segments.push(Segment { text: span.text.clone(), inserted }),
            }
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|s| s.inserted)
    }

    /// The text without highlighting
    pub fn to_plain_string(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Transient message shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Copied,
    CopyFailed,
}

crate::simple_display! {
    Notification {
        Copied => "Copied!",
        CopyFailed => "Copy failed",
    }
}

/// Why the watch loop should stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The user asked to quit
    UserQuit,
    /// Output changed and exit-on-change is enabled
    OutputChanged,
    /// The command failed and exit-on-error is enabled
    CommandFailed(ExitInfo),
}

impl ExitReason {
    /// Process exit code for this reason
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitReason::UserQuit | ExitReason::OutputChanged => 0,
            ExitReason::CommandFailed(exit) => exit.exit_code(),
        }
    }
}

/// Immutable snapshot of everything the presenter needs
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub command: String,
    pub interval: Duration,
    pub title: Option<String>,
    pub displayed: Arc<DisplayText>,
    /// Offset of the viewed record from the newest
    pub cursor: usize,
    pub populated: usize,
    pub capacity: usize,
    pub scheduler: SchedulerState,
    pub paused: bool,
    pub diff_mode: DiffMode,
    pub notification: Option<Notification>,
    /// Completion time of the viewed record, epoch milliseconds
    pub viewed_at_ms: Option<u64>,
    pub viewed_exit: Option<ExitInfo>,
    pub show_help: bool,
    pub viewport: (u16, u16),
    pub exit: Option<ExitReason>,
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
