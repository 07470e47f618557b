// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the specs

use assert_cmd::Command;

/// A `vigil` invocation with the environment scrubbed of settings that
/// would leak into the output.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new() }
}

pub struct CliBuilder {
    args: Vec<String>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    fn output(self) -> std::process::Output {
        let mut cmd = Command::cargo_bin("vigil").expect("vigil binary is built");
        cmd.args(&self.args)
            .env_remove("VIGIL_LOG")
            .env_remove("VIGIL_LOG_DIR")
            .env("NO_COLOR", "1")
            .timeout(std::time::Duration::from_secs(10));
        cmd.output().expect("vigil runs")
    }

    /// Run and assert a zero exit code
    pub fn passes(self) -> RunAssert {
        let args = self.args.join(" ");
        let run = RunAssert::new(self.output());
        assert_eq!(run.code, Some(0), "`vigil {args}` failed:\n{}", run.stderr);
        run
    }

    /// Run and assert a non-zero exit code
    pub fn fails(self) -> RunAssert {
        let args = self.args.join(" ");
        let run = RunAssert::new(self.output());
        assert_ne!(run.code, Some(0), "`vigil {args}` unexpectedly passed:\n{}", run.stdout);
        run
    }
}

pub struct RunAssert {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl RunAssert {
    fn new(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.code, Some(expected), "stderr:\n{}", self.stderr);
        self
    }
}
