// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::stdout;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("cannot set up terminal: {0}")]
    Setup(#[from] std::io::Error),
}

/// Raw mode on the alternate screen for as long as the guard lives
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    /// Current size as (columns, rows)
    pub fn size(&self) -> Result<(u16, u16), TerminalError> {
        Ok(crossterm::terminal::size()?)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), Show, LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to restore terminal mode");
        }
    }
}
