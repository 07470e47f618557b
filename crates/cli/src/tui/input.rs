// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal input thread

use super::keys::{action_for_key, Action};
use super::screen::Screen;
use crossterm::event::Event as TermEvent;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;
use vigil_core::Event;

/// How often the thread checks whether the watch loop is gone
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Read terminal input until the event channel closes. Controller events go
/// to the channel; pager scrolling goes straight to the screen.
pub fn spawn(
    events: mpsc::Sender<Event>,
    screen: Arc<Mutex<Screen>>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("vigil-input".to_string())
        .spawn(move || read_loop(&events, &screen))
}

fn read_loop(events: &mpsc::Sender<Event>, screen: &Mutex<Screen>) {
    while !events.is_closed() {
        let action = match next_action() {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                tracing::error!(error = %e, "reading terminal input failed");
                let _ = events.blocking_send(Event::Quit);
                return;
            }
        };
        match action {
            Action::Send(event) => {
                if events.blocking_send(event).is_err() {
                    return;
                }
            }
            Action::Scroll(scroll) => screen.lock().scroll(scroll),
        }
    }
    tracing::debug!("input thread stopped");
}

fn next_action() -> std::io::Result<Option<Action>> {
    if !crossterm::event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }
    let action = match crossterm::event::read()? {
        TermEvent::Key(key) => action_for_key(key),
        TermEvent::Resize(width, height) => Some(Action::Send(Event::Resize { width, height })),
        _ => None,
    };
    Ok(action)
}
