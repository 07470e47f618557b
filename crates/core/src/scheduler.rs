// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger state machine for periodic runs.
//!
//! The scheduler never runs anything itself. It decides when a run should be
//! dispatched and refuses a second dispatch while one is in flight, which is
//! the only thing keeping executions from overlapping.

use crate::config::MAX_INTERVAL;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifies one dispatched run so its completion can be matched up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunTicket(u64);

impl RunTicket {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What caused a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The first run when watching starts
    Startup,
    /// The interval elapsed
    Interval,
    /// The user asked for an immediate run
    Forced,
}

crate::simple_display! {
    Trigger {
        Startup => "startup",
        Interval => "interval",
        Forced => "forced",
    }
}

/// Externally visible scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Paused; no interval is counting
    Idle,
    /// Counting toward the next run
    Armed,
    /// A run is in flight
    Pending,
}

crate::simple_display! {
    SchedulerState {
        Idle => "idle",
        Armed => "armed",
        Pending => "pending",
    }
}

/// A run the caller must start now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: RunTicket,
    pub trigger: Trigger,
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub trigger: Trigger,
    /// Whether the result should be shown. While paused only forced runs
    /// are shown; anything started before the pause is discarded.
    pub apply: bool,
    /// Deadline of the fresh interval window, when not paused
    pub rearm: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed { due: Instant },
    Pending { ticket: RunTicket, trigger: Trigger },
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    phase: Phase,
    paused: bool,
    issued: u64,
}

impl Scheduler {
    /// Intervals longer than [`MAX_INTERVAL`] are shortened to it.
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.min(MAX_INTERVAL), phase: Phase::Idle, paused: false, issued: 0 }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> SchedulerState {
        match self.phase {
            Phase::Idle => SchedulerState::Idle,
            Phase::Armed { .. } => SchedulerState::Armed,
            Phase::Pending { .. } => SchedulerState::Pending,
        }
    }

    /// Deadline of the current interval window
    pub fn due(&self) -> Option<Instant> {
        match self.phase {
            Phase::Armed { due } => Some(due),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<Dispatch> {
        match self.phase {
            Phase::Pending { ticket, trigger } => Some(Dispatch { ticket, trigger }),
            _ => None,
        }
    }

    /// Kick off the first run. Only valid before anything was dispatched.
    pub fn start(&mut self) -> Option<Dispatch> {
        if self.issued > 0 || self.phase != Phase::Idle {
            return None;
        }
        Some(self.dispatch(Trigger::Startup))
    }

    /// The interval timer fired. Timers that fire early (left over from an
    /// earlier window) and timers that fire while idle or pending are ignored.
    pub fn interval_elapsed(&mut self, now: Instant) -> Option<Dispatch> {
        match self.phase {
            Phase::Armed { due } if now >= due => Some(self.dispatch(Trigger::Interval)),
            _ => None,
        }
    }

    /// Run now, unless a run is already in flight.
    pub fn force_run(&mut self) -> Option<Dispatch> {
        match self.phase {
            Phase::Pending { .. } => None,
            Phase::Idle | Phase::Armed { .. } => Some(self.dispatch(Trigger::Forced)),
        }
    }

    /// Stop counting. A run already in flight keeps going. Returns whether
    /// anything changed.
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        if let Phase::Armed { .. } = self.phase {
            self.phase = Phase::Idle;
        }
        true
    }

    /// Start counting a full interval from `now`. While a run is in flight the
    /// window starts at its completion instead. Returns the new deadline.
    pub fn resume(&mut self, now: Instant) -> Option<Instant> {
        if !self.paused {
            return None;
        }
        self.paused = false;
        match self.phase {
            Phase::Pending { .. } => None,
            Phase::Idle | Phase::Armed { .. } => Some(self.arm(now)),
        }
    }

    /// The run identified by `ticket` finished at `now`.
    ///
    /// Returns `None` for a ticket that is not in flight.
    pub fn complete(&mut self, ticket: RunTicket, now: Instant) -> Option<Completion> {
        let Phase::Pending { ticket: in_flight, trigger } = self.phase else {
            return None;
        };
        if in_flight != ticket {
            return None;
        }
        if self.paused {
            self.phase = Phase::Idle;
            let apply = trigger == Trigger::Forced;
            return Some(Completion { trigger, apply, rearm: None });
        }
        let due = self.arm(now);
        Some(Completion { trigger, apply: true, rearm: Some(due) })
    }

    fn dispatch(&mut self, trigger: Trigger) -> Dispatch {
        self.issued += 1;
        let ticket = RunTicket(self.issued);
        self.phase = Phase::Pending { ticket, trigger };
        Dispatch { ticket, trigger }
    }

    fn arm(&mut self, now: Instant) -> Instant {
        let due = now + self.interval;
        self.phase = Phase::Armed { due };
        due
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
