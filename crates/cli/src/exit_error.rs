// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! `run` returns `ExitError` instead of calling `std::process::exit()`
//! directly, so the terminal and the log writer are torn down before the
//! process terminates.

use std::fmt;
use vigil_core::ExitReason;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Error for a watch that stopped on its own, `None` for a clean stop
    pub fn from_reason(command: &str, reason: &ExitReason) -> Option<Self> {
        match reason {
            ExitReason::UserQuit | ExitReason::OutputChanged => None,
            ExitReason::CommandFailed(exit) => {
                Some(Self::new(reason.exit_code(), format!("{command}: {exit}")))
            }
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
