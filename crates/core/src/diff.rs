// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Character-level diffing between runs.
//!
//! [`DiffMode::Step`] compares the viewed record with the one right before
//! it. [`DiffMode::Cumulative`] compares against a [`Baseline`] that
//! remembers every position that has ever changed since the mode was
//! entered, so a value that flickered once stays highlighted.

use crate::history::History;
use crate::view::DisplayText;
use similar::{capture_diff_slices_deadline, Algorithm, DiffTag};
use std::collections::BTreeMap;
use std::hash::Hash;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Past this, the alignment falls back to a coarser (still correct) diff
const DIFF_DEADLINE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiffMode {
    #[default]
    Off,
    Step,
    Cumulative,
}

crate::simple_display! {
    DiffMode {
        Off => "off",
        Step => "diff",
        Cumulative => "permdiff",
    }
}

impl DiffMode {
    /// Off → Step → Cumulative → Off
    pub fn next(self) -> Self {
        match self {
            DiffMode::Off => DiffMode::Step,
            DiffMode::Step => DiffMode::Cumulative,
            DiffMode::Cumulative => DiffMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Equal,
    Inserted,
    /// Present only in the comparison target, never rendered
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// Diff `new` against `old`. Equal and inserted spans, in order, spell out `new`.
pub fn diff_spans(old: &str, new: &str) -> Vec<Span> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    let mut spans = Vec::new();
    for (tag, old_range, new_range) in align(&old, &new) {
        if matches!(tag, DiffTag::Delete | DiffTag::Replace) {
            push_span(&mut spans, SpanKind::Deleted, &old[old_range]);
        }
        match tag {
            DiffTag::Equal => push_span(&mut spans, SpanKind::Equal, &new[new_range]),
            DiffTag::Insert | DiffTag::Replace => {
                push_span(&mut spans, SpanKind::Inserted, &new[new_range])
            }
            DiffTag::Delete => {}
        }
    }
    spans
}

fn align<T>(old: &[T], new: &[T]) -> Vec<(DiffTag, Range<usize>, Range<usize>)>
where
    T: Eq + Hash + Ord,
{
    let deadline = Instant::now() + DIFF_DEADLINE;
    capture_diff_slices_deadline(Algorithm::Myers, old, new, Some(deadline))
        .iter()
        .map(|op| op.as_tag_tuple())
        .collect()
}

fn push_span(spans: &mut Vec<Span>, kind: SpanKind, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.kind == kind => last.text.extend(chars),
        _ => spans.push(Span { kind, text: chars.iter().collect() }),
    }
}

/// Marker on a position that has changed at least once.
///
/// Each time a marked position shows up as inserted again its mark flips,
/// but it never goes back to unmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeMark {
    Primary,
    Alternate,
}

impl ChangeMark {
    pub fn toggled(self) -> Self {
        match self {
            ChangeMark::Primary => ChangeMark::Alternate,
            ChangeMark::Alternate => ChangeMark::Primary,
        }
    }
}

/// One position of the baseline as seen by the aligner. A marked position
/// never equals a real character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Cell {
    Char(char),
    Mark(ChangeMark),
}

/// Reference text for cumulative diffing, plus the positions that have
/// changed since it was captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Baseline {
    text: Vec<char>,
    marks: BTreeMap<usize, ChangeMark>,
}

impl Baseline {
    pub fn new(text: &str) -> Self {
        Self { text: text.chars().collect(), marks: BTreeMap::new() }
    }

    /// Character offsets that have changed, keyed by offset
    pub fn marks(&self) -> &BTreeMap<usize, ChangeMark> {
        &self.marks
    }

    pub fn is_marked(&self, offset: usize) -> bool {
        self.marks.contains_key(&offset)
    }

    /// Diff `current` against the baseline, then realign the baseline to
    /// `current` carrying every mark forward.
    pub fn compare(&mut self, current: &str) -> Vec<Span> {
        let old = self.cells();
        let new_chars: Vec<char> = current.chars().collect();
        let new: Vec<Cell> = new_chars.iter().copied().map(Cell::Char).collect();

        let mut spans = Vec::new();
        let mut marks = BTreeMap::new();
        for (tag, old_range, new_range) in align(&old, &new) {
            if matches!(tag, DiffTag::Delete | DiffTag::Replace) {
                push_span(&mut spans, SpanKind::Deleted, &self.text[old_range.clone()]);
            }
            match tag {
                DiffTag::Equal => push_span(&mut spans, SpanKind::Equal, &new_chars[new_range]),
                DiffTag::Insert | DiffTag::Replace => {
                    for (i, pos) in new_range.clone().enumerate() {
                        let prior = old_range
                            .clone()
                            .nth(i)
                            .filter(|_| tag == DiffTag::Replace)
                            .and_then(|old_pos| self.marks.get(&old_pos).copied());
                        let mark = prior.map_or(ChangeMark::Primary, ChangeMark::toggled);
                        marks.insert(pos, mark);
                    }
                    push_span(&mut spans, SpanKind::Inserted, &new_chars[new_range]);
                }
                DiffTag::Delete => {}
            }
        }

        tracing::trace!(marked = marks.len(), len = new_chars.len(), "baseline realigned");
        self.text = new_chars;
        self.marks = marks;
        spans
    }

    fn cells(&self) -> Vec<Cell> {
        self.text
            .iter()
            .enumerate()
            .map(|(i, c)| self.marks.get(&i).map_or(Cell::Char(*c), |m| Cell::Mark(*m)))
            .collect()
    }
}

/// Renders the record under the history cursor according to the diff mode
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    mode: DiffMode,
    baseline: Option<Baseline>,
}

impl DiffEngine {
    pub fn new(mode: DiffMode) -> Self {
        Self { mode, baseline: None }
    }

    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    /// Advance to the next mode. Entering cumulative mode captures a fresh
    /// baseline from the newest record; leaving it drops the baseline.
    pub fn cycle(&mut self, history: &History) -> DiffMode {
        self.mode = self.mode.next();
        self.baseline = match self.mode {
            DiffMode::Cumulative => history.newest().map(|r| Baseline::new(&r.text())),
            DiffMode::Off | DiffMode::Step => None,
        };
        self.mode
    }

    pub fn render(&mut self, history: &History) -> DisplayText {
        let Some(current) = history.current() else {
            return DisplayText::default();
        };
        let text = current.text();
        match self.mode {
            DiffMode::Off => DisplayText::plain(text),
            DiffMode::Step => match history.previous() {
                Some(previous) => DisplayText::from_spans(&diff_spans(&previous.text(), &text)),
                None => DisplayText::plain(text),
            },
            DiffMode::Cumulative => {
                let baseline = self.baseline.get_or_insert_with(|| {
                    // Entered before any output existed
                    history.newest().map(|r| Baseline::new(&r.text())).unwrap_or_default()
                });
                DisplayText::from_spans(&baseline.compare(&text))
            }
        }
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
