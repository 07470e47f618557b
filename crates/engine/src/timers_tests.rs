// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use vigil_core::{Clock, FakeClock};

#[test]
fn timer_lifecycle() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set_timer(TimerId::Interval, Duration::from_secs(10), clock.now());
    assert!(timers.has_timers());
    assert_eq!(timers.next_deadline(), Some(clock.now() + Duration::from_secs(10)));

    // Not due yet
    clock.advance(Duration::from_secs(5));
    assert!(timers.fired_timers(clock.now()).is_empty());
    assert!(timers.has_timers());

    clock.advance(Duration::from_secs(5));
    assert_eq!(timers.fired_timers(clock.now()), vec![Event::IntervalElapsed]);
    assert!(!timers.has_timers());
}

#[test]
fn oversized_duration_is_capped() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set_timer(TimerId::Interval, Duration::MAX, clock.now());
    assert_eq!(timers.next_deadline(), Some(clock.now() + MAX_INTERVAL));
}

#[test]
fn cancel_timer() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set_timer(TimerId::Interval, Duration::from_secs(10), clock.now());
    timers.cancel_timer(TimerId::Interval);

    clock.advance(Duration::from_secs(15));
    assert!(timers.fired_timers(clock.now()).is_empty());
    assert_eq!(timers.next_deadline(), None);
}

#[test]
fn setting_again_replaces_deadline() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set_timer(TimerId::Interval, Duration::from_secs(1), clock.now());
    timers.set_timer(TimerId::Interval, Duration::from_secs(5), clock.now());

    clock.advance(Duration::from_secs(2));
    assert!(timers.fired_timers(clock.now()).is_empty());
    clock.advance(Duration::from_secs(3));
    assert_eq!(timers.fired_timers(clock.now()).len(), 1);
}

#[test]
fn fired_timers_come_out_earliest_first() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set_timer(TimerId::Interval, Duration::from_secs(3), clock.now());
    timers.set_timer(TimerId::Feedback(1), Duration::from_secs(1), clock.now());

    assert_eq!(timers.next_deadline(), Some(clock.now() + Duration::from_secs(1)));
    clock.advance(Duration::from_secs(3));
    assert_eq!(
        timers.fired_timers(clock.now()),
        vec![Event::FeedbackExpired { generation: 1 }, Event::IntervalElapsed]
    );
}

#[test]
fn feedback_generations_are_separate_timers() {
    let clock = FakeClock::new();
    let mut timers = TimerQueue::new();

    timers.set_timer(TimerId::Feedback(1), Duration::from_secs(3), clock.now());
    timers.set_timer(TimerId::Feedback(2), Duration::from_secs(3), clock.now());
    timers.cancel_timer(TimerId::Feedback(1));

    clock.advance(Duration::from_secs(3));
    assert_eq!(timers.fired_timers(clock.now()), vec![Event::FeedbackExpired { generation: 2 }]);
}
