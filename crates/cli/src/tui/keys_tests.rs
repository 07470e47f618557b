// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn press(code: KeyCode) -> Option<Action> {
    action_for_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[yare::parameterized(
    space = { KeyCode::Char(' '), Event::TogglePause },
    enter = { KeyCode::Enter, Event::ForceRun },
    bracket_open = { KeyCode::Char('['), Event::NavigateOlder },
    brace_open = { KeyCode::Char('{'), Event::NavigateOlder },
    bracket_close = { KeyCode::Char(']'), Event::NavigateNewer },
    brace_close = { KeyCode::Char('}'), Event::NavigateNewer },
    diff = { KeyCode::Char('d'), Event::ToggleDiffMode },
    yank = { KeyCode::Char('y'), Event::CopyRequested },
    copy = { KeyCode::Char('c'), Event::CopyRequested },
    question = { KeyCode::Char('?'), Event::ToggleHelp },
    help = { KeyCode::Char('h'), Event::ToggleHelp },
    quit = { KeyCode::Char('q'), Event::Quit },
)]
fn controller_keys(code: KeyCode, expected: Event) {
    assert_eq!(press(code), Some(Action::Send(expected)));
}

#[test]
fn ctrl_c_quits() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(action_for_key(key), Some(Action::Send(Event::Quit)));
}

#[yare::parameterized(
    up = { KeyCode::Up, Scroll::Up },
    down = { KeyCode::Down, Scroll::Down },
    page_up = { KeyCode::PageUp, Scroll::PageUp },
    page_down = { KeyCode::PageDown, Scroll::PageDown },
    home = { KeyCode::Home, Scroll::Top },
    end = { KeyCode::End, Scroll::Bottom },
)]
fn pager_keys(code: KeyCode, expected: Scroll) {
    assert_eq!(press(code), Some(Action::Scroll(expected)));
}

#[test]
fn unbound_keys_do_nothing() {
    assert_eq!(press(KeyCode::Char('x')), None);
    assert_eq!(press(KeyCode::Esc), None);
}

#[test]
fn key_release_is_ignored() {
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    assert_eq!(action_for_key(key), None);
}

#[yare::parameterized(
    up_at_top = { Scroll::Up, 0, 0 },
    up = { Scroll::Up, 5, 4 },
    down_clamped = { Scroll::Down, 10, 10 },
    page_down = { Scroll::PageDown, 0, 8 },
    page_down_clamped = { Scroll::PageDown, 5, 10 },
    page_up = { Scroll::PageUp, 9, 1 },
    top = { Scroll::Top, 7, 0 },
    bottom = { Scroll::Bottom, 0, 10 },
)]
fn scrolling(scroll: Scroll, from: usize, expected: usize) {
    assert_eq!(scroll.apply(from, 8, 10), expected);
}
