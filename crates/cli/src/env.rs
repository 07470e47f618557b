// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Version string shown by `--version`
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Log filter directives (`VIGIL_LOG`), e.g. `debug` or `vigil_engine=trace`
pub fn log_filter() -> Option<String> {
    std::env::var("VIGIL_LOG").ok().filter(|s| !s.is_empty())
}

/// Resolve log directory: VIGIL_LOG_DIR > XDG_STATE_HOME/vigil > ~/.local/state/vigil
pub fn log_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("VIGIL_LOG_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("vigil"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/vigil"))
}

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

/// `FORCE_COLOR` set to anything but empty or `0`
pub fn force_color() -> bool {
    std::env::var("FORCE_COLOR").is_ok_and(|v| !v.is_empty() && v != "0")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
