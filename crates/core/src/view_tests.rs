// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::record::ExitInfo;

#[test]
fn plain_text_is_one_unhighlighted_segment() {
    let text = DisplayText::plain("hello\n");
    assert_eq!(text.segments(), &[Segment { text: "hello\n".into(), inserted: false }]);
    assert!(!text.has_changes());
}

#[test]
fn empty_plain_text_has_no_segments() {
    assert!(DisplayText::plain("").segments().is_empty());
}

#[test]
fn from_spans_drops_deletions_and_merges_neighbours() {
    let spans = vec![
        Span::new(SpanKind::Equal, "ab"),
        Span::new(SpanKind::Deleted, "c"),
        Span::new(SpanKind::Equal, "d"),
        Span::new(SpanKind::Inserted, "X"),
        Span::new(SpanKind::Deleted, "y"),
        Span::new(SpanKind::Inserted, "Z"),
    ];
    let text = DisplayText::from_spans(&spans);
    assert_eq!(
        text.segments(),
        &[
            Segment { text: "abd".into(), inserted: false },
            Segment { text: "XZ".into(), inserted: true },
        ]
    );
    assert_eq!(text.to_plain_string(), "abdXZ");
    assert!(text.has_changes());
}

#[yare::parameterized(
    quit    = { ExitReason::UserQuit,                                      0 },
    changed = { ExitReason::OutputChanged,                                 0 },
    failed  = { ExitReason::CommandFailed(ExitInfo::Exited(4)),            4 },
    no_exec = { ExitReason::CommandFailed(ExitInfo::StartFailed("x".into())), 1 },
)]
fn exit_reason_codes(reason: ExitReason, code: i32) {
    assert_eq!(reason.exit_code(), code);
}

#[test]
fn notification_labels() {
    assert_eq!(Notification::Copied.to_string(), "Copied!");
    assert_eq!(Notification::CopyFailed.to_string(), "Copy failed");
}
