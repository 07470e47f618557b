// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event loop driving the controller

use crate::clipboard::ClipboardAdapter;
use crate::controller::Controller;
use crate::executor::Executor;
use crate::runner::CommandRunner;
use tokio::sync::mpsc;
use vigil_core::{Clock, Config, Effect, Event, ExitReason, ViewState};

/// Buffered input events before senders start waiting
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Owns the controller and everything that feeds it events: user input
/// through the channel, the in-flight run, and the timer queue.
pub struct Runtime<R, B, C: Clock> {
    controller: Controller<C>,
    executor: Executor<R, B, C>,
    event_tx: mpsc::Sender<Event>,
    event_rx: mpsc::Receiver<Event>,
}

impl<R, B, C> Runtime<R, B, C>
where
    R: CommandRunner,
    B: ClipboardAdapter,
    C: Clock,
{
    pub fn new(config: &Config, runner: R, clipboard: B, clock: C) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let executor = Executor::new(runner, clipboard, clock.clone(), event_tx.clone());
        Self { controller: Controller::new(config, clock), executor, event_tx, event_rx }
    }

    /// Sender for user input events
    pub fn event_sender(&self) -> mpsc::Sender<Event> {
        self.event_tx.clone()
    }

    /// Run until the user quits or a termination policy fires.
    ///
    /// `present` receives a snapshot after the initial dispatch and after
    /// every processed event.
    pub async fn run<F>(mut self, mut present: F) -> ExitReason
    where
        F: FnMut(&ViewState),
    {
        tracing::info!(command = %self.controller.view().command, "watch started");
        let effects = self.controller.start();
        self.perform(effects);
        present(&self.controller.view());

        loop {
            if let Some(reason) = self.controller.exit_reason() {
                tracing::info!(?reason, "watch stopped");
                return reason.clone();
            }

            let wait = self
                .executor
                .timers()
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(self.executor.clock().now()));
            let sleep = async move {
                match wait {
                    Some(wait) => tokio::time::sleep(wait).await,
                    None => std::future::pending().await,
                }
            };

            let events = tokio::select! {
                event = self.executor.completion() => vec![event],
                Some(event) = self.event_rx.recv() => vec![event],
                () = sleep => self.executor.fired_timers(),
            };

            for event in events {
                let effects = self.controller.handle(event);
                self.perform(effects);
                present(&self.controller.view());
                if self.controller.exit_reason().is_some() {
                    break;
                }
            }
        }
    }

    fn perform(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            // Overlap is already refused by the scheduler; a failure here is logged and skipped
            let _ = self.executor.execute(effect);
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
