// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-driven watch state.
//!
//! The controller owns the history, the scheduler and the diff baseline. It
//! consumes one [`Event`] at a time and answers with the [`Effect`]s the
//! runtime has to perform. It never runs a command or touches a timer itself.

use std::sync::Arc;
use std::time::Duration;
use vigil_core::{
    AppendOutcome, Clock, Config, DiffEngine, DisplayText, Dispatch, Effect, Event,
    ExecutionRecord, ExitPolicy, ExitReason, History, Notification, RunTicket, Scheduler,
    TimerId, ViewState,
};

/// How long a copy notification stays in the status bar
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(3);

pub struct Controller<C: Clock> {
    clock: C,
    command: String,
    title: Option<String>,
    exit_policy: ExitPolicy,
    scheduler: Scheduler,
    history: History,
    diff: DiffEngine,
    /// Cached render of the viewed record
    displayed: Arc<DisplayText>,
    notification: Option<Notification>,
    feedback_generation: u64,
    show_help: bool,
    viewport: (u16, u16),
    exit: Option<ExitReason>,
}

impl<C: Clock> Controller<C> {
    pub fn new(config: &Config, clock: C) -> Self {
        Self {
            clock,
            command: config.command().to_string(),
            title: config.title().map(str::to_string),
            exit_policy: config.exit_policy(),
            scheduler: Scheduler::new(config.interval()),
            history: History::new(config.capacity()),
            diff: DiffEngine::new(config.diff_mode()),
            displayed: Arc::new(DisplayText::default()),
            notification: None,
            feedback_generation: 0,
            show_help: false,
            viewport: (0, 0),
            exit: None,
        }
    }

    /// Dispatch the initial run
    pub fn start(&mut self) -> Vec<Effect> {
        match self.scheduler.start() {
            Some(dispatch) => vec![self.execute(dispatch)],
            None => Vec::new(),
        }
    }

    /// Apply one event
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        tracing::debug!(event = %event.log_summary(), "handling event");
        match event {
            Event::IntervalElapsed => {
                let now = self.clock.now();
                match self.scheduler.interval_elapsed(now) {
                    Some(dispatch) => vec![self.execute(dispatch)],
                    None => {
                        tracing::debug!(state = %self.scheduler.state(), "stale interval timer");
                        Vec::new()
                    }
                }
            }
            Event::TogglePause => self.toggle_pause(),
            Event::ForceRun => self.force_run(),
            Event::NavigateOlder => {
                let mut effects = Vec::new();
                if !self.scheduler.is_paused() {
                    effects.extend(self.pause());
                }
                if self.history.navigate_older() {
                    self.refresh();
                }
                effects
            }
            Event::NavigateNewer => {
                if self.history.navigate_newer() {
                    self.refresh();
                }
                Vec::new()
            }
            Event::ToggleDiffMode => {
                let mode = self.diff.cycle(&self.history);
                tracing::info!(%mode, "diff mode changed");
                self.refresh();
                Vec::new()
            }
            Event::CopyRequested => match self.history.current() {
                Some(record) => vec![Effect::Copy { text: record.text().into_owned() }],
                None => Vec::new(),
            },
            Event::CopyFinished { ok } => self.notify(if ok {
                Notification::Copied
            } else {
                Notification::CopyFailed
            }),
            Event::FeedbackExpired { generation } => {
                if generation == self.feedback_generation {
                    self.notification = None;
                }
                Vec::new()
            }
            Event::ToggleHelp => {
                self.show_help = !self.show_help;
                Vec::new()
            }
            Event::Resize { width, height } => {
                self.viewport = (width, height);
                self.refresh();
                Vec::new()
            }
            Event::ExecutionCompleted { ticket, record } => self.complete(ticket, record),
            Event::Quit => {
                tracing::info!("quit requested");
                self.exit = Some(ExitReason::UserQuit);
                Vec::new()
            }
        }
    }

    /// Snapshot for the presenter
    pub fn view(&self) -> ViewState {
        let viewed = self.history.current();
        ViewState {
            command: self.command.clone(),
            interval: self.scheduler.interval(),
            title: self.title.clone(),
            displayed: Arc::clone(&self.displayed),
            cursor: self.history.cursor(),
            populated: self.history.len(),
            capacity: self.history.capacity(),
            scheduler: self.scheduler.state(),
            paused: self.scheduler.is_paused(),
            diff_mode: self.diff.mode(),
            notification: self.notification,
            viewed_at_ms: viewed.map(ExecutionRecord::timestamp_ms),
            viewed_exit: viewed.map(|r| r.exit().clone()),
            show_help: self.show_help,
            viewport: self.viewport,
            exit: self.exit.clone(),
        }
    }

    /// Set once a termination policy fired or the user quit
    pub fn exit_reason(&self) -> Option<&ExitReason> {
        self.exit.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn execute(&self, dispatch: Dispatch) -> Effect {
        tracing::debug!(ticket = %dispatch.ticket, trigger = ?dispatch.trigger, "dispatching run");
        Effect::Execute { ticket: dispatch.ticket, command: self.command.clone() }
    }

    fn toggle_pause(&mut self) -> Vec<Effect> {
        if !self.scheduler.is_paused() {
            return self.pause();
        }
        let now = self.clock.now();
        let mut effects = Vec::new();
        if self.scheduler.resume(now).is_some() {
            effects.push(Effect::SetTimer {
                id: TimerId::Interval,
                duration: self.scheduler.interval(),
            });
        }
        tracing::info!("resumed");
        if self.history.reset_cursor() {
            self.refresh();
        }
        effects
    }

    fn pause(&mut self) -> Vec<Effect> {
        if !self.scheduler.pause() {
            return Vec::new();
        }
        tracing::info!("paused");
        vec![Effect::CancelTimer { id: TimerId::Interval }]
    }

    fn force_run(&mut self) -> Vec<Effect> {
        if self.history.reset_cursor() {
            self.refresh();
        }
        match self.scheduler.force_run() {
            Some(dispatch) => {
                vec![Effect::CancelTimer { id: TimerId::Interval }, self.execute(dispatch)]
            }
            None => {
                tracing::debug!("run already in flight, ignoring force-run");
                Vec::new()
            }
        }
    }

    fn complete(&mut self, ticket: RunTicket, record: ExecutionRecord) -> Vec<Effect> {
        let now = self.clock.now();
        let Some(completion) = self.scheduler.complete(ticket, now) else {
            tracing::warn!(%ticket, "completion for a run that is not in flight");
            return Vec::new();
        };

        let mut effects = Vec::new();
        if completion.rearm.is_some() {
            effects.push(Effect::SetTimer {
                id: TimerId::Interval,
                duration: self.scheduler.interval(),
            });
        }
        if !completion.apply {
            tracing::debug!(%ticket, "discarding run that finished while paused");
            return effects;
        }

        let exit = record.exit().clone();
        let first = self.history.is_empty();
        let outcome = self.history.append(record);
        tracing::debug!(%ticket, ?outcome, %exit, "run applied");
        self.refresh();

        if self.exit_policy.on_error && !exit.is_success() {
            tracing::info!(%exit, "command failed, stopping");
            self.exit = Some(ExitReason::CommandFailed(exit));
        } else if self.exit_policy.on_change
            && !first
            && matches!(outcome, AppendOutcome::Inserted { .. })
        {
            tracing::info!("output changed, stopping");
            self.exit = Some(ExitReason::OutputChanged);
        }
        effects
    }

    fn notify(&mut self, notification: Notification) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.notification.is_some() {
            effects.push(Effect::CancelTimer { id: TimerId::Feedback(self.feedback_generation) });
        }
        self.feedback_generation += 1;
        self.notification = Some(notification);
        effects.push(Effect::SetTimer {
            id: TimerId::Feedback(self.feedback_generation),
            duration: FEEDBACK_DURATION,
        });
        effects
    }

    fn refresh(&mut self) {
        self.displayed = Arc::new(self.diff.render(&self.history));
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
