// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments

use crate::{color, env};
use clap::Parser;
use std::time::Duration;
use vigil_core::{Config, ConfigError, DiffMode, ExitPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "vigil",
    version = env::VERSION,
    about = "Run a command periodically, showing its output fullscreen",
    long_about = "Run a command periodically, showing its output fullscreen.\n\n\
        Every distinct output is kept in a browsable history, and changes \
        between runs can be highlighted.",
    styles = color::styles(),
)]
pub struct Cli {
    /// Seconds between runs (fractions allowed)
    #[arg(short = 'n', long, value_name = "SECONDS", default_value = "2", value_parser = parse_interval)]
    pub interval: Duration,

    /// How many distinct outputs to keep in memory
    #[arg(short = 'r', long, value_name = "N", default_value_t = 50)]
    pub records: usize,

    /// Highlight the differences between successive updates
    #[arg(short = 'd', long)]
    pub diff: bool,

    /// Highlight every position that changed since watching started
    #[arg(short = 'P', long)]
    pub permdiff: bool,

    /// Exit when the output of the command changes
    #[arg(short = 'g', long)]
    pub chgexit: bool,

    /// Exit when the command exits with a non-zero status
    #[arg(short = 'e', long)]
    pub errexit: bool,

    /// Show this instead of the hostname in the status bar
    #[arg(short = 'T', long = "set-title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Write a debug log (see VIGIL_LOG_DIR)
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// Command to watch; words are joined with spaces and run by `sh -c`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Command line to run, `None` when no command was given
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            return None;
        }
        Some(self.command.join(" "))
    }

    pub fn diff_mode(&self) -> DiffMode {
        if self.permdiff {
            DiffMode::Cumulative
        } else if self.diff {
            DiffMode::Step
        } else {
            DiffMode::Off
        }
    }

    pub fn to_config(&self, command: String) -> Result<Config, ConfigError> {
        let mut config = Config::new(command)?
            .with_interval(self.interval)?
            .with_capacity(self.records)?
            .with_diff_mode(self.diff_mode())
            .with_exit_policy(ExitPolicy { on_change: self.chgexit, on_error: self.errexit });
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        Ok(config)
    }
}

fn parse_interval(value: &str) -> Result<Duration, String> {
    let secs: f64 = value.parse().map_err(|_| format!("invalid number of seconds: {value}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid interval {value}: {e}"))
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
