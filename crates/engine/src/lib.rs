// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Watch loop: the event-driven controller and the runtime that drives it

pub mod clipboard;
mod controller;
mod executor;
pub mod runner;
mod runtime;
mod timers;

pub use clipboard::{ClipboardAdapter, ClipboardError};
pub use controller::{Controller, FEEDBACK_DURATION};
pub use executor::{ExecuteError, Executor};
pub use runner::{CommandRunner, ShellRunner};
pub use runtime::Runtime;
pub use timers::TimerQueue;

#[cfg(any(test, feature = "test-support"))]
pub use clipboard::FakeClipboard;
#[cfg(any(test, feature = "test-support"))]
pub use runner::FakeRunner;
