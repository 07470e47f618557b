// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects represent side effects the controller needs performed

use crate::scheduler::RunTicket;
use crate::timer::TimerId;
use std::time::Duration;

/// Effects that need to be executed by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the command on the background worker. The result comes back as
    /// `Event::ExecutionCompleted` carrying the same ticket.
    Execute { ticket: RunTicket, command: String },

    /// Set (or replace) a timer
    SetTimer { id: TimerId, duration: Duration },

    /// Cancel a timer
    CancelTimer { id: TimerId },

    /// Write text to the system clipboard; answered by `Event::CopyFinished`.
    ///
    /// Clipboards take text only, so output that is not valid UTF-8 arrives
    /// here with invalid sequences replaced by U+FFFD.
    Copy { text: String },
}

impl Effect {
    /// Effect name for log spans (e.g., "execute", "set_timer")
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Execute { .. } => "execute",
            Effect::SetTimer { .. } => "set_timer",
            Effect::CancelTimer { .. } => "cancel_timer",
            Effect::Copy { .. } => "copy",
        }
    }

    /// Key-value pairs for structured logging
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Execute { ticket, command } => {
                vec![("ticket", ticket.to_string()), ("command", command.clone())]
            }
            Effect::SetTimer { id, duration } => vec![
                ("timer_id", id.to_string()),
                ("duration_ms", duration.as_millis().to_string()),
            ],
            Effect::CancelTimer { id } => vec![("timer_id", id.to_string())],
            Effect::Copy { text } => vec![("bytes", text.len().to_string())],
        }
    }

    /// Whether to log at info level. Timer bookkeeping happens on every
    /// run and is only logged at debug.
    pub fn verbose(&self) -> bool {
        match self {
            Effect::SetTimer { .. } | Effect::CancelTimer { .. } => false,
            Effect::Execute { .. } | Effect::Copy { .. } => true,
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
