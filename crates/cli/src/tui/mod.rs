// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fullscreen terminal front end

mod clipboard;
mod input;
mod keys;
mod render;
mod screen;
mod terminal;

use anyhow::Context;
use clipboard::SystemClipboard;
use parking_lot::Mutex;
use screen::Screen;
use std::sync::Arc;
use terminal::TerminalGuard;
use vigil_core::{Config, Event, ExitReason, SystemClock};
use vigil_engine::{Runtime, ShellRunner};

/// Watch the configured command fullscreen until the loop stops.
///
/// The terminal is restored before this returns.
pub async fn watch(config: &Config) -> anyhow::Result<ExitReason> {
    let clock = SystemClock;
    let runtime = Runtime::new(config, ShellRunner::new(clock), SystemClipboard, clock);
    let events = runtime.event_sender();

    let terminal = TerminalGuard::enter()?;
    let (width, height) = terminal.size()?;
    events
        .try_send(Event::Resize { width, height })
        .context("queueing initial terminal size")?;

    let screen = Arc::new(Mutex::new(Screen::new(hostname())));
    let input = input::spawn(events, Arc::clone(&screen)).context("starting input thread")?;

    let reason = runtime.run(|view| screen.lock().present(view)).await;

    drop(terminal);
    match tokio::task::spawn_blocking(move || input.join()).await {
        Ok(Ok(())) => {}
        _ => tracing::warn!("input thread did not stop cleanly"),
    }
    Ok(reason)
}

fn hostname() -> String {
    nix::unistd::gethostname()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}
