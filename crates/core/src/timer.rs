// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer identifiers for the deadlines the controller schedules

use crate::event::Event;
use std::fmt;

/// A scheduled deadline. Setting a timer with an id that is already set
/// replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// End of the current interval window
    Interval,
    /// Expiry of a transient notification, tagged with the notification's
    /// generation so an older expiry cannot clear a newer message
    Feedback(u64),
}

impl TimerId {
    /// Event delivered to the controller when this timer fires
    pub fn fired(self) -> Event {
        match self {
            TimerId::Interval => Event::IntervalElapsed,
            TimerId::Feedback(generation) => Event::FeedbackExpired { generation },
        }
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerId::Interval => f.write_str("interval"),
            TimerId::Feedback(generation) => write!(f, "feedback:{generation}"),
        }
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
