// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use vigil_core::FakeClock;

fn run(command: &str) -> ExecutionRecord {
    ShellRunner::new(FakeClock::new()).run(command)
}

#[test]
fn captures_stdout() {
    let record = run("echo hello");
    assert_eq!(record.text(), "hello\n");
    assert_eq!(record.exit(), &ExitInfo::Exited(0));
}

#[test]
fn stderr_is_merged_into_output() {
    let record = run("echo out; echo err >&2");
    assert_eq!(record.text(), "out\nerr\n");
}

#[yare::parameterized(
    success = { "true", 0 },
    failure = { "false", 1 },
    custom = { "exit 7", 7 },
)]
fn exit_codes(command: &str, code: i32) {
    assert_eq!(run(command).exit(), &ExitInfo::Exited(code));
}

#[test]
fn killed_by_signal() {
    let record = run("kill -9 $$");
    assert_eq!(record.exit(), &ExitInfo::Signaled);
}

#[test]
fn stdin_is_closed() {
    let record = run("cat");
    assert_eq!(record.text(), "");
    assert!(record.exit().is_success());
}

#[test]
fn multiline_commands_run_in_order() {
    let record = run("echo one\necho two");
    assert_eq!(record.text(), "one\ntwo\n");
}

#[test]
fn timestamp_comes_from_clock() {
    let clock = FakeClock::new();
    clock.advance_ms(500);
    let record = ShellRunner::new(clock.clone()).run("true");
    assert_eq!(record.timestamp_ms(), clock.epoch_ms());
}

#[test]
fn fake_runner_replays_script_then_repeats_last() {
    let runner = FakeRunner::with_outputs(["a", "b"]);
    let outputs: Vec<String> =
        (0..4).map(|_| runner.run("cmd").text().into_owned()).collect();
    assert_eq!(outputs, vec!["a", "b", "b", "b"]);
    assert_eq!(runner.call_count(), 4);
    assert_eq!(runner.calls()[0], "cmd");
}

#[test]
fn fake_runner_timestamps_increase() {
    let runner = FakeRunner::with_outputs(["a"]);
    let first = runner.run("cmd").timestamp_ms();
    let second = runner.run("cmd").timestamp_ms();
    assert!(second > first);
}
