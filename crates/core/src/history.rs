// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity ring of execution records with a browsing cursor.
//!
//! Offsets are counted from the newest record: offset 0 is the most recent
//! run, offset `len() - 1` the oldest one still retained.

use crate::record::ExecutionRecord;
use std::num::NonZeroUsize;

/// What [`History::append`] did with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Output matched the newest record; only its timestamp moved
    Deduplicated,
    /// Stored as the newest record
    Inserted { evicted: bool },
}

#[derive(Debug, Clone)]
pub struct History {
    slots: Vec<ExecutionRecord>,
    capacity: NonZeroUsize,
    /// Slot the next distinct record is written to
    next: usize,
    cursor: usize,
}

impl History {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { slots: Vec::with_capacity(capacity.get()), capacity, next: 0, cursor: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of populated records
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Store a completed run.
    ///
    /// Identical output to the newest record only refreshes that record's
    /// timestamp and exit status, so an unchanging command never consumes
    /// more than one slot.
    pub fn append(&mut self, record: ExecutionRecord) -> AppendOutcome {
        if let Some(idx) = self.slot_index(0) {
            if self.slots[idx].same_output(&record) {
                self.slots[idx].absorb(record);
                return AppendOutcome::Deduplicated;
            }
        }

        let evicted = self.slots.len() == self.capacity.get();
        if evicted {
            self.slots[self.next] = record;
        } else {
            self.slots.push(record);
        }
        self.next = (self.next + 1) % self.capacity.get();
        // Stay on the record being browsed; if it was just evicted, land on the oldest
        if self.cursor > 0 {
            self.cursor = (self.cursor + 1).min(self.slots.len() - 1);
        }
        AppendOutcome::Inserted { evicted }
    }

    /// Record at `offset` from the newest
    pub fn get(&self, offset: usize) -> Option<&ExecutionRecord> {
        self.slot_index(offset).map(|idx| &self.slots[idx])
    }

    pub fn newest(&self) -> Option<&ExecutionRecord> {
        self.get(0)
    }

    /// Record under the cursor
    pub fn current(&self) -> Option<&ExecutionRecord> {
        self.get(self.cursor)
    }

    /// Record immediately older than the one under the cursor
    pub fn previous(&self) -> Option<&ExecutionRecord> {
        self.get(self.cursor + 1)
    }

    /// Move the cursor one record back in time. Returns whether it moved.
    pub fn navigate_older(&mut self) -> bool {
        if self.cursor + 1 < self.slots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one record forward in time. Returns whether it moved.
    pub fn navigate_newer(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Point the cursor back at the newest record. Returns whether it moved.
    pub fn reset_cursor(&mut self) -> bool {
        std::mem::replace(&mut self.cursor, 0) != 0
    }

    /// Records from oldest to newest
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &ExecutionRecord> + '_ {
        (0..self.slots.len()).rev().filter_map(move |offset| self.get(offset))
    }

    fn slot_index(&self, offset: usize) -> Option<usize> {
        let len = self.slots.len();
        if offset >= len {
            return None;
        }
        // `next` trails the newest slot by one, both while filling and once saturated
        Some((self.next + len - 1 - offset) % len)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
