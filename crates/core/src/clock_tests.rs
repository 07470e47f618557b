// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    assert!(clock.now() > t1);
}

#[test]
fn system_clock_epoch_is_after_2020() {
    assert!(SystemClock.epoch_ms() > 1_577_836_800_000);
}

#[test]
fn fake_clock_only_moves_when_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    let e1 = clock.epoch_ms();
    assert_eq!(clock.now(), t1);

    clock.advance(Duration::from_secs(2));
    assert_eq!(clock.now().duration_since(t1), Duration::from_secs(2));
    assert_eq!(clock.epoch_ms() - e1, 2_000);
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::new();
    let other = clock.clone();
    let t1 = clock.now();
    other.advance_ms(500);
    assert_eq!(clock.now().duration_since(t1), Duration::from_millis(500));
}
