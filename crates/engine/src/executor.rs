// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::clipboard::ClipboardAdapter;
use crate::runner::CommandRunner;
use crate::timers::TimerQueue;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use vigil_core::{Clock, Effect, Event, ExecutionRecord, RunTicket};

/// Errors that can occur during effect execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("run {requested} dispatched while {in_flight} is still in flight")]
    Overlap { requested: RunTicket, in_flight: RunTicket },
}

/// The one run currently executing on the blocking pool
struct InFlight {
    ticket: RunTicket,
    rx: oneshot::Receiver<ExecutionRecord>,
}

/// Executes effects using the configured adapters
pub struct Executor<R, B, C: Clock> {
    runner: Arc<R>,
    clipboard: B,
    clock: C,
    timers: TimerQueue,
    in_flight: Option<InFlight>,
    /// Channel for clipboard results
    event_tx: mpsc::Sender<Event>,
}

impl<R, B, C> Executor<R, B, C>
where
    R: CommandRunner,
    B: ClipboardAdapter,
    C: Clock,
{
    pub fn new(runner: R, clipboard: B, clock: C, event_tx: mpsc::Sender<Event>) -> Self {
        Self {
            runner: Arc::new(runner),
            clipboard,
            clock,
            timers: TimerQueue::new(),
            in_flight: None,
            event_tx,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Ticket of the run awaiting completion, if any
    pub fn in_flight(&self) -> Option<RunTicket> {
        self.in_flight.as_ref().map(|f| f.ticket)
    }

    /// Execute a single effect with tracing
    pub fn execute(&mut self, effect: Effect) -> Result<(), ExecuteError> {
        let info = effect
            .fields()
            .into_iter()
            .map(|(key, val)| format!("{key}={val}"))
            .collect::<Vec<_>>()
            .join(" ");
        let op = effect.name();
        if effect.verbose() {
            tracing::info!("executing effect={} {}", op, info);
        } else {
            tracing::debug!("executing effect={} {}", op, info);
        }

        let result = self.execute_inner(effect);
        if let Err(e) = &result {
            tracing::error!(error = %e, "error effect={} {}", op, info);
        }
        result
    }

    fn execute_inner(&mut self, effect: Effect) -> Result<(), ExecuteError> {
        match effect {
            Effect::Execute { ticket, command } => {
                if let Some(in_flight) = self.in_flight() {
                    return Err(ExecuteError::Overlap { requested: ticket, in_flight });
                }
                let (tx, rx) = oneshot::channel();
                let runner = Arc::clone(&self.runner);
                tokio::task::spawn_blocking(move || {
                    let record = runner.run(&command);
                    if tx.send(record).is_err() {
                        tracing::debug!(%ticket, "run finished after the loop stopped");
                    }
                });
                self.in_flight = Some(InFlight { ticket, rx });
                Ok(())
            }

            Effect::SetTimer { id, duration } => {
                self.timers.set_timer(id, duration, self.clock.now());
                Ok(())
            }

            Effect::CancelTimer { id } => {
                self.timers.cancel_timer(id);
                Ok(())
            }

            Effect::Copy { text } => {
                let clipboard = self.clipboard.clone();
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let ok = match clipboard.copy(&text).await {
                        Ok(()) => true,
                        Err(e) => {
                            tracing::warn!(error = %e, "copy to clipboard failed");
                            false
                        }
                    };
                    let _ = event_tx.send(Event::CopyFinished { ok }).await;
                });
                Ok(())
            }
        }
    }

    /// Wait for the in-flight run. Never resolves while nothing is running.
    ///
    /// Cancel safe: dropping the future leaves the run in flight.
    pub async fn completion(&mut self) -> Event {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return std::future::pending().await;
        };
        let ticket = in_flight.ticket;
        let record = match (&mut in_flight.rx).await {
            Ok(record) => record,
            Err(_) => {
                tracing::error!(%ticket, "worker exited without a result");
                ExecutionRecord::start_failed("worker exited without a result", self.clock.epoch_ms())
            }
        };
        self.in_flight = None;
        Event::ExecutionCompleted { ticket, record }
    }

    /// Remove due timers and return their events
    pub fn fired_timers(&mut self) -> Vec<Event> {
        let now = self.clock.now();
        self.timers.fired_timers(now)
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
