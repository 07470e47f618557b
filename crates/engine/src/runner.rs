// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution

use std::process::{Command, Stdio};
use vigil_core::{Clock, ExecutionRecord, ExitInfo};

/// Runs the watched command to completion.
///
/// Implementations block; the executor calls them from a blocking worker.
pub trait CommandRunner: Send + Sync + 'static {
    fn run(&self, command: &str) -> ExecutionRecord;
}

/// Runs the command through `sh -c` with stderr folded into stdout
#[derive(Debug, Clone)]
pub struct ShellRunner<C: Clock> {
    clock: C,
}

impl<C: Clock> ShellRunner<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> CommandRunner for ShellRunner<C> {
    fn run(&self, command: &str) -> ExecutionRecord {
        let script = format!("exec 2>&1\n{command}");
        let result = Command::new("sh")
            .arg("-c")
            .arg(&script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output();
        let timestamp_ms = self.clock.epoch_ms();

        match result {
            Ok(output) => {
                let exit = match output.status.code() {
                    Some(code) => ExitInfo::Exited(code),
                    None => ExitInfo::Signaled,
                };
                tracing::debug!(bytes = output.stdout.len(), %exit, "command finished");
                ExecutionRecord::new(output.stdout, exit, timestamp_ms)
            }
            Err(e) => {
                tracing::warn!(error = %e, "command failed to start");
                ExecutionRecord::start_failed(e.to_string(), timestamp_ms)
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::CommandRunner;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use vigil_core::{ExecutionRecord, ExitInfo};

    #[derive(Default)]
    struct FakeRunnerState {
        script: VecDeque<(String, ExitInfo)>,
        last: Option<(String, ExitInfo)>,
        calls: Vec<String>,
    }

    /// Fake runner returning scripted outputs in order. Once the script runs
    /// out the last entry repeats.
    #[derive(Clone, Default)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script successful runs with these outputs
        pub fn with_outputs<'a>(outputs: impl IntoIterator<Item = &'a str>) -> Self {
            let runner = Self::new();
            for output in outputs {
                runner.push(output, ExitInfo::Exited(0));
            }
            runner
        }

        pub fn push(&self, output: &str, exit: ExitInfo) {
            self.inner.lock().script.push_back((output.to_string(), exit));
        }

        /// Commands run so far
        pub fn calls(&self) -> Vec<String> {
            self.inner.lock().calls.clone()
        }

        pub fn call_count(&self) -> usize {
            self.inner.lock().calls.len()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, command: &str) -> ExecutionRecord {
            let mut inner = self.inner.lock();
            inner.calls.push(command.to_string());
            let call = inner.calls.len() as u64;
            let (output, exit) = match inner.script.pop_front() {
                Some(entry) => {
                    inner.last = Some(entry.clone());
                    entry
                }
                None => inner.last.clone().unwrap_or_else(|| (String::new(), ExitInfo::Exited(0))),
            };
            ExecutionRecord::new(output.into_bytes(), exit, 1_000_000 + call * 1_000)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRunner;

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
