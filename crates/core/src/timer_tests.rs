// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn interval_timer_fires_interval_elapsed() {
    assert_eq!(TimerId::Interval.fired(), Event::IntervalElapsed);
}

#[test]
fn feedback_timer_carries_generation() {
    assert_eq!(TimerId::Feedback(4).fired(), Event::FeedbackExpired { generation: 4 });
}

#[test]
fn display() {
    assert_eq!(TimerId::Interval.to_string(), "interval");
    assert_eq!(TimerId::Feedback(9).to_string(), "feedback:9");
}
