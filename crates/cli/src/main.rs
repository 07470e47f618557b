// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vigil: run a command periodically and watch its output change

mod args;
mod color;
mod env;
mod exit_error;
mod logging;
mod tui;

use args::Cli;
use clap::{CommandFactory, Parser};
use exit_error::ExitError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("vigil: {e:#}");
                1
            }
        },
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command_line() else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let config = cli.to_config(command)?;
    let _log_guard = logging::init(cli.debug)?;

    let reason = tui::watch(&config).await?;
    tracing::info!(?reason, "exiting");
    match ExitError::from_reason(config.command(), &reason) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
