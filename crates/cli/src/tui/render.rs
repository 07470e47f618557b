// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screen layout.
//!
//! [`Frame::build`] turns a view snapshot into rows of styled text; nothing
//! in there touches the terminal. [`Frame::draw`] writes a frame out with
//! crossterm.

use super::keys::{Binding, FULL_HELP, SHORT_HELP};
use crate::color::codes;
use chrono::{Local, TimeZone};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vigil_core::{DiffMode, DisplayText, Notification, Segment, ViewState};

const STATUS_HEIGHT: usize = 1;
const TAB_WIDTH: usize = 8;
const STAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";
const HELP_SEPARATOR: &str = " • ";
const HELP_COLUMN_GAP: usize = 4;

/// Color role of a piece of the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Bar,
    Running,
    Paused,
    Notice,
    Success,
    Failure,
}

impl Tone {
    fn colors(self) -> Colors {
        let (fg, bg) = match self {
            Tone::Bar => (codes::BAR_FG, codes::BAR_BG),
            Tone::Running => (codes::BAR_FG, codes::RUNNING),
            Tone::Paused => (codes::BAR_FG, codes::STOPPED),
            Tone::Notice => (codes::NOTICE, codes::BAR_BG),
            Tone::Success => (codes::RUNNING, codes::BAR_BG),
            Tone::Failure => (codes::STOPPED, codes::BAR_BG),
        };
        Colors::new(Color::AnsiValue(fg), Color::AnsiValue(bg))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub tone: Tone,
}

impl Piece {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }
}

/// Everything one redraw puts on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    /// Left part of the status bar
    pub status: Vec<Piece>,
    /// Right-aligned `{title}: {time}`
    pub stamp: String,
    /// Visible body rows, already clipped to the width
    pub body: Vec<Vec<Segment>>,
    pub help: Vec<String>,
    /// Top body line after clamping
    pub scroll: usize,
    /// Largest useful scroll offset
    pub max_scroll: usize,
}

impl Frame {
    pub fn build(view: &ViewState, host: &str, scroll: usize) -> Self {
        let width = usize::from(view.viewport.0);
        let height = usize::from(view.viewport.1);

        let stamp = match view.viewed_at_ms {
            Some(ms) => format!("{host}: {}", format_stamp(ms)),
            None => format!("{host}:"),
        };
        let (status, stamp) = fit_status(status_pieces(view), stamp, width);

        let help = if view.show_help { full_help(width) } else { vec![short_help(width)] };
        let body_height = height.saturating_sub(STATUS_HEIGHT + help.len());

        let lines = split_lines(&view.displayed);
        let max_scroll = lines.len().saturating_sub(body_height);
        let scroll = scroll.min(max_scroll);
        let body = lines
            .iter()
            .skip(scroll)
            .take(body_height)
            .map(|line| clip_line(line, width))
            .collect();

        Self { width, height, status, stamp, body, help, scroll, max_scroll }
    }

    /// Rows available to the body
    pub fn page(&self) -> usize {
        self.height.saturating_sub(STATUS_HEIGHT + self.help.len())
    }

    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        // Status bar
        queue!(out, MoveTo(0, 0))?;
        let mut used = 0;
        for piece in &self.status {
            queue!(out, SetColors(piece.tone.colors()), Print(&piece.text))?;
            used += piece.text.width();
        }
        let gap = self.width.saturating_sub(used + self.stamp.width());
        queue!(
            out,
            SetColors(Tone::Bar.colors()),
            Print(" ".repeat(gap)),
            Print(&self.stamp),
            ResetColor
        )?;

        // Body
        for (row, line) in self.body.iter().enumerate() {
            queue!(out, MoveTo(0, to_row(STATUS_HEIGHT + row)), Clear(ClearType::UntilNewLine))?;
            for segment in line {
                if segment.inserted {
                    let highlight = Colors::new(Color::Reset, Color::AnsiValue(codes::STOPPED));
                    queue!(out, SetColors(highlight), Print(&segment.text), ResetColor)?;
                } else {
                    queue!(out, Print(&segment.text))?;
                }
            }
        }
        for row in self.body.len()..self.page() {
            queue!(out, MoveTo(0, to_row(STATUS_HEIGHT + row)), Clear(ClearType::UntilNewLine))?;
        }

        // Help
        let help_top = self.height.saturating_sub(self.help.len());
        for (i, line) in self.help.iter().enumerate() {
            queue!(
                out,
                MoveTo(0, to_row(help_top + i)),
                Clear(ClearType::UntilNewLine),
                SetColors(Colors::new(Color::AnsiValue(codes::CONTEXT), Color::Reset)),
                Print(line),
                ResetColor
            )?;
        }
        out.flush()
    }
}

fn to_row(row: usize) -> u16 {
    u16::try_from(row).unwrap_or(u16::MAX)
}

/// Go-style duration: `2s`, `1.5s`, `500ms`
pub fn format_interval(interval: Duration) -> String {
    let ms = interval.as_millis();
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{}s", interval.as_secs_f64())
    }
}

fn format_stamp(epoch_ms: u64) -> String {
    let ms = i64::try_from(epoch_ms).unwrap_or(i64::MAX);
    match Local.timestamp_millis_opt(ms).single() {
        Some(time) => time.format(STAMP_FORMAT).to_string(),
        None => String::new(),
    }
}

fn status_pieces(view: &ViewState) -> Vec<Piece> {
    let (glyph, tone) = if view.paused { ('■', Tone::Paused) } else { ('▶', Tone::Running) };
    let mut pieces = vec![Piece::new(
        format!(" {glyph} Every {}: {} ", format_interval(view.interval), view.command),
        tone,
    )];

    let position = if view.cursor == 0 {
        format!(" latest/{} ", view.populated)
    } else {
        format!(" {}/{} ", view.cursor + 1, view.populated)
    };
    pieces.push(Piece::new(position, Tone::Notice));

    if view.diff_mode != DiffMode::Off {
        pieces.push(Piece::new(format!("| {} ", view.diff_mode), Tone::Notice));
    }
    if let Some(exit) = view.viewed_exit.as_ref().filter(|exit| !exit.is_success()) {
        pieces.push(Piece::new(format!("| {exit} "), Tone::Failure));
    }
    match view.notification {
        Some(Notification::Copied) => pieces.push(Piece::new(" Copied!", Tone::Success)),
        Some(notification @ Notification::CopyFailed) => {
            pieces.push(Piece::new(format!(" {notification}"), Tone::Failure));
        }
        None => {}
    }
    pieces
}

/// Truncate the left part so at least one column separates it from the
/// stamp, then truncate the stamp if it still does not fit.
pub fn fit_status(pieces: Vec<Piece>, stamp: String, width: usize) -> (Vec<Piece>, String) {
    let left_max = width.saturating_sub(stamp.width() + 1);
    let pieces = truncate_pieces(pieces, left_max);
    let used: usize = pieces.iter().map(|p| p.text.width()).sum();
    let stamp = truncate(&stamp, width.saturating_sub(used));
    (pieces, stamp)
}

fn truncate_pieces(pieces: Vec<Piece>, max: usize) -> Vec<Piece> {
    let total: usize = pieces.iter().map(|p| p.text.width()).sum();
    if total <= max {
        return pieces;
    }
    let mut out = Vec::new();
    let mut room = max;
    for piece in pieces {
        let width = piece.text.width();
        if width < room {
            room -= width;
            out.push(piece);
            continue;
        }
        out.push(Piece::new(truncate(&piece.text, room), piece.tone));
        break;
    }
    out
}

/// Cut `text` to at most `max` columns, ending in `…` when anything was cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Split highlighted text into lines. A trailing newline does not start an
/// extra empty line.
pub fn split_lines(text: &DisplayText) -> Vec<Vec<Segment>> {
    let mut lines: Vec<Vec<Segment>> = vec![Vec::new()];
    for segment in text.segments() {
        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.push(Segment { text: part.to_string(), inserted: segment.inserted });
            }
        }
    }
    if lines.len() > 1 && lines.last().is_some_and(Vec::is_empty) {
        lines.pop();
    }
    if lines.len() == 1 && lines[0].is_empty() {
        lines.clear();
    }
    lines
}

/// Expand tabs, drop control characters and cut the line at `width` columns
pub fn clip_line(line: &[Segment], width: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut col = 0;
    'segments: for segment in line {
        let mut text = String::new();
        for c in segment.text.chars() {
            if c == '\t' {
                let spaces = TAB_WIDTH - col % TAB_WIDTH;
                let fit = spaces.min(width.saturating_sub(col));
                text.extend(std::iter::repeat(' ').take(fit));
                col += fit;
                if fit < spaces {
                    push_segment(&mut out, text, segment.inserted);
                    break 'segments;
                }
                continue;
            }
            if c.is_control() {
                continue;
            }
            let w = c.width().unwrap_or(0);
            if col + w > width {
                push_segment(&mut out, text, segment.inserted);
                break 'segments;
            }
            col += w;
            text.push(c);
        }
        push_segment(&mut out, text, segment.inserted);
    }
    out
}

fn push_segment(out: &mut Vec<Segment>, text: String, inserted: bool) {
    if !text.is_empty() {
        out.push(Segment { text, inserted });
    }
}

fn short_help(width: usize) -> String {
    let line = SHORT_HELP
        .iter()
        .map(|b| format!("{} {}", b.keys, b.help))
        .collect::<Vec<_>>()
        .join(HELP_SEPARATOR);
    truncate(&line, width)
}

fn full_help(width: usize) -> Vec<String> {
    let rows = FULL_HELP.iter().map(|column| column.len()).max().unwrap_or(0);
    let mut lines = vec![String::new(); rows];
    for column in FULL_HELP {
        let cells: Vec<String> = column.iter().map(help_cell).collect();
        let column_width = cells.iter().map(|c| c.width()).max().unwrap_or(0);
        for (row, line) in lines.iter_mut().enumerate() {
            let cell = cells.get(row).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            line.push_str(&" ".repeat(column_width - cell.width() + HELP_COLUMN_GAP));
        }
    }
    lines.into_iter().map(|line| truncate(line.trim_end(), width)).collect()
}

fn help_cell(binding: &Binding) -> String {
    format!("{:<8} {}", binding.keys, binding.help)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
