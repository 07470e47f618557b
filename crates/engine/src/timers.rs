// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline queue for the timers the controller asks for

use std::collections::HashMap;
use std::time::{Duration, Instant};
use vigil_core::{Event, TimerId, MAX_INTERVAL};

/// Pending timers keyed by id. Setting an id again replaces its deadline.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: HashMap<TimerId, Instant>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timer(&mut self, id: TimerId, duration: Duration, now: Instant) {
        self.timers.insert(id, now + duration.min(MAX_INTERVAL));
    }

    pub fn cancel_timer(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }

    /// Remove every timer due at `now` and return their events, earliest first
    pub fn fired_timers(&mut self, now: Instant) -> Vec<Event> {
        let mut fired: Vec<(Instant, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        fired.sort_by_key(|(deadline, _)| *deadline);

        for (_, id) in &fired {
            self.timers.remove(id);
        }
        fired.into_iter().map(|(_, id)| id.fired()).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().min().copied()
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
