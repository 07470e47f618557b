// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events consumed by the controller, one at a time

use crate::record::ExecutionRecord;
use crate::scheduler::RunTicket;

/// Everything that can change watch state.
///
/// Timer expiries, user input and finished runs all arrive as one of these
/// and are applied strictly in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The interval timer fired
    IntervalElapsed,
    /// Pause if running, resume if paused
    TogglePause,
    /// Run the command now
    ForceRun,
    /// Show the next older record (pauses first)
    NavigateOlder,
    /// Show the next newer record
    NavigateNewer,
    /// Cycle off → diff → permdiff
    ToggleDiffMode,
    /// Copy the viewed record's raw output
    CopyRequested,
    /// Result of a clipboard write
    CopyFinished { ok: bool },
    ToggleHelp,
    Resize { width: u16, height: u16 },
    /// A dispatched run finished
    ExecutionCompleted { ticket: RunTicket, record: ExecutionRecord },
    /// A transient notification's display time is over
    FeedbackExpired { generation: u64 },
    Quit,
}

impl Event {
    /// Event name for log spans
    pub fn name(&self) -> &'static str {
        match self {
            Event::IntervalElapsed => "interval_elapsed",
            Event::TogglePause => "toggle_pause",
            Event::ForceRun => "force_run",
            Event::NavigateOlder => "navigate_older",
            Event::NavigateNewer => "navigate_newer",
            Event::ToggleDiffMode => "toggle_diff_mode",
            Event::CopyRequested => "copy_requested",
            Event::CopyFinished { .. } => "copy_finished",
            Event::ToggleHelp => "toggle_help",
            Event::Resize { .. } => "resize",
            Event::ExecutionCompleted { .. } => "execution_completed",
            Event::FeedbackExpired { .. } => "feedback_expired",
            Event::Quit => "quit",
        }
    }

    /// One-line description for debug logs
    pub fn log_summary(&self) -> String {
        match self {
            Event::CopyFinished { ok } => format!("{} ok={ok}", self.name()),
            Event::Resize { width, height } => format!("{} {width}x{height}", self.name()),
            Event::ExecutionCompleted { ticket, record } => format!(
                "{} ticket={ticket} bytes={} {}",
                self.name(),
                record.output().len(),
                record.exit()
            ),
            Event::FeedbackExpired { generation } => {
                format!("{} generation={generation}", self.name())
            }
            _ => self.name().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
