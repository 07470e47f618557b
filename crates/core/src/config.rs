// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch configuration, fixed for the lifetime of the process

use crate::diff::DiffMode;
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);
/// Longest accepted interval. Deadlines are computed as `now + interval`,
/// which must stay representable as an `Instant`.
pub const MAX_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no command given")]
    EmptyCommand,
    #[error("interval must be greater than zero")]
    ZeroInterval,
    #[error("interval must be at most 365 days")]
    IntervalTooLong,
    #[error("history must keep at least one record")]
    ZeroCapacity,
}

/// Conditions under which watching stops on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitPolicy {
    /// Stop when the output differs from the previous run
    pub on_change: bool,
    /// Stop when the command does not exit successfully
    pub on_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    command: String,
    interval: Duration,
    capacity: NonZeroUsize,
    diff_mode: DiffMode,
    exit_policy: ExitPolicy,
    title: Option<String>,
}

impl Config {
    /// Configuration with defaults for everything but the command line
    pub fn new(command: impl Into<String>) -> Result<Self, ConfigError> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        Ok(Self {
            command,
            interval: DEFAULT_INTERVAL,
            capacity: DEFAULT_CAPACITY,
            diff_mode: DiffMode::Off,
            exit_policy: ExitPolicy::default(),
            title: None,
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if interval > MAX_INTERVAL {
            return Err(ConfigError::IntervalTooLong);
        }
        self.interval = interval;
        Ok(self)
    }

    pub fn with_capacity(mut self, capacity: usize) -> Result<Self, ConfigError> {
        self.capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(self)
    }

    pub fn with_diff_mode(mut self, diff_mode: DiffMode) -> Self {
        self.diff_mode = diff_mode;
        self
    }

    pub fn with_exit_policy(mut self, exit_policy: ExitPolicy) -> Self {
        self.exit_policy = exit_policy;
        self
    }

    /// Replace the hostname shown in the status bar
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn diff_mode(&self) -> DiffMode {
        self.diff_mode
    }

    pub fn exit_policy(&self) -> ExitPolicy {
        self.exit_policy
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
