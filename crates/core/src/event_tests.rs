// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::record::ExitInfo;

#[test]
fn summary_for_unit_events_is_the_name() {
    assert_eq!(Event::TogglePause.log_summary(), "toggle_pause");
    assert_eq!(Event::Quit.log_summary(), "quit");
}

#[test]
fn summary_for_completion_includes_size_and_exit() {
    let event = Event::ExecutionCompleted {
        ticket: RunTicket::new(2),
        record: ExecutionRecord::new(b"abc".to_vec(), ExitInfo::Exited(3), 0),
    };
    assert_eq!(event.log_summary(), "execution_completed ticket=#2 bytes=3 exit 3");
}

#[test]
fn summary_for_resize() {
    let event = Event::Resize { width: 80, height: 24 };
    assert_eq!(event.log_summary(), "resize 80x24");
}
