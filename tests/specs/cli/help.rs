//! Help and version output

use crate::prelude::*;

#[test]
fn vigil_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn vigil_help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--interval")
        .stdout_has("--records")
        .stdout_has("--permdiff")
        .stdout_has("--chgexit")
        .stdout_has("--errexit")
        .stdout_has("--set-title");
}

#[test]
fn vigil_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
