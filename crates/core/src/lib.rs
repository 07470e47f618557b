// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vigil-core: pure state for the vigil periodic command watcher
//!
//! Nothing in this crate performs I/O. Time comes in through [`Clock`],
//! command results come in as [`ExecutionRecord`]s, and side effects go out
//! as [`Effect`]s for the engine to perform.

pub mod macros;

pub mod clock;
pub mod config;
pub mod diff;
pub mod effect;
pub mod event;
pub mod history;
pub mod record;
pub mod scheduler;
pub mod timer;
pub mod view;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, ConfigError, ExitPolicy, MAX_INTERVAL};
pub use diff::{Baseline, ChangeMark, DiffEngine, DiffMode, Span, SpanKind};
pub use effect::Effect;
pub use event::Event;
pub use history::{AppendOutcome, History};
#[cfg(any(test, feature = "test-support"))]
pub use record::ExecutionRecordBuilder;
pub use record::{ExecutionRecord, ExitInfo};
pub use scheduler::{Completion, Dispatch, RunTicket, Scheduler, SchedulerState, Trigger};
pub use timer::TimerId;
pub use view::{DisplayText, ExitReason, Notification, Segment, ViewState};
