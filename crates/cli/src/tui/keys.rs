// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vigil_core::Event;

/// Pager movement, handled by the screen without involving the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

impl Scroll {
    /// New top line given the current one, the page height and the largest
    /// allowed offset
    pub fn apply(self, offset: usize, page: usize, max: usize) -> usize {
        let page = page.max(1);
        let moved = match self {
            Scroll::Up => offset.saturating_sub(1),
            Scroll::Down => offset.saturating_add(1),
            Scroll::PageUp => offset.saturating_sub(page),
            Scroll::PageDown => offset.saturating_add(page),
            Scroll::Top => 0,
            Scroll::Bottom => max,
        };
        moved.min(max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forward to the controller
    Send(Event),
    Scroll(Scroll),
}

pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Event::Quit,
        KeyCode::Char(' ') => Event::TogglePause,
        KeyCode::Enter => Event::ForceRun,
        KeyCode::Char('[' | '{') => Event::NavigateOlder,
        KeyCode::Char(']' | '}') => Event::NavigateNewer,
        KeyCode::Char('d') => Event::ToggleDiffMode,
        KeyCode::Char('y' | 'c') => Event::CopyRequested,
        KeyCode::Char('?' | 'h') => Event::ToggleHelp,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Up => return Some(Action::Scroll(Scroll::Up)),
        KeyCode::Down => return Some(Action::Scroll(Scroll::Down)),
        KeyCode::PageUp => return Some(Action::Scroll(Scroll::PageUp)),
        KeyCode::PageDown => return Some(Action::Scroll(Scroll::PageDown)),
        KeyCode::Home => return Some(Action::Scroll(Scroll::Top)),
        KeyCode::End => return Some(Action::Scroll(Scroll::Bottom)),
        _ => return None,
    };
    Some(Action::Send(event))
}

/// One row of the key help: key label and what it does
pub struct Binding {
    pub keys: &'static str,
    pub help: &'static str,
}

const fn binding(keys: &'static str, help: &'static str) -> Binding {
    Binding { keys, help }
}

/// Bindings shown in the one-line help
pub const SHORT_HELP: &[Binding] =
    &[binding("d", "change diff mode"), binding("?/h", "help"), binding("ctrl+c/q", "quit")];

/// Bindings shown in the full help panel, one slice per column
pub const FULL_HELP: &[&[Binding]] = &[
    &[
        binding("space", "pause/unpause"),
        binding("enter", "trigger command"),
        binding("[", "previous record"),
        binding("]", "next record"),
    ],
    &[
        binding("d", "change diff mode"),
        binding("y/c", "copy to clipboard"),
        binding("↑↓", "pager navigation"),
    ],
    &[binding("?/h", "help"), binding("ctrl+c/q", "quit")],
];

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
