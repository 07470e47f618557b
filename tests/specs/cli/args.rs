//! Argument validation happens before the terminal is touched.

use crate::prelude::*;

#[test]
fn zero_interval_is_rejected() {
    cli()
        .args(&["-n", "0", "date"])
        .fails()
        .code(1)
        .stderr_has("interval must be greater than zero");
}

#[test]
fn non_numeric_interval_is_a_usage_error() {
    cli().args(&["-n", "soon", "date"]).fails().code(2).stderr_has("invalid number of seconds");
}

#[test]
fn negative_interval_is_a_usage_error() {
    cli().args(&["--interval=-1", "date"]).fails().code(2).stderr_has("invalid interval");
}

#[test]
fn zero_records_is_rejected() {
    cli()
        .args(&["-r", "0", "date"])
        .fails()
        .code(1)
        .stderr_has("history must keep at least one record");
}

#[test]
fn blank_command_is_rejected() {
    cli().args(&["  "]).fails().code(1).stderr_has("no command given");
}

#[test]
fn interval_longer_than_a_year_is_rejected() {
    cli().args(&["-n", "1e19", "date"]).fails().code(1).stderr_has("at most 365 days");
}
