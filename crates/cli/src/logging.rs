// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log file setup. The terminal belongs to the UI, so logs only ever go to a
//! file, and only when asked for.

use crate::env;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "vigil.log";

/// Filter used with `--debug` when `VIGIL_LOG` is not set
const DEBUG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("cannot determine a log directory; set VIGIL_LOG_DIR")]
    NoLogDir,
    #[error("cannot create log directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("invalid VIGIL_LOG filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logger already installed")]
    AlreadyInstalled,
}

/// Filter directives to log with, `None` when logging is off
pub fn filter_directives(from_env: Option<String>, debug: bool) -> Option<String> {
    match (from_env, debug) {
        (Some(directives), _) => Some(directives),
        (None, true) => Some(DEBUG_FILTER.to_string()),
        (None, false) => None,
    }
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Install the global subscriber. The returned guard flushes the writer on
/// drop and must outlive the watch loop.
pub fn init(debug: bool) -> Result<Option<WorkerGuard>, LogError> {
    let Some(directives) = filter_directives(env::log_filter(), debug) else {
        return Ok(None);
    };
    let filter = EnvFilter::try_new(&directives)?;
    let dir = env::log_dir().ok_or(LogError::NoLogDir)?;
    std::fs::create_dir_all(&dir)
        .map_err(|source| LogError::CreateDir { path: dir.clone(), source })?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;

    tracing::info!(path = %log_path(&dir).display(), %directives, "logging started");
    Ok(Some(guard))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
