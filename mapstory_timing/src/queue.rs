// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Handle to a scheduled entry in a [`TimerQueue`].
///
/// Ids are never reused by the queue that issued them, so a stale id is
/// simply not found after its entry fired or was cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// Ordered set of pending timers keyed by millisecond deadlines.
///
/// Entries are kept sorted by deadline; entries sharing a deadline fire in the
/// order they were scheduled. Interactions usually hold one or two timers, so
/// storage is inline for small counts.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: SmallVec<[Entry<T>; 4]>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.insert(Entry {
            id,
            deadline,
            payload,
        });
        id
    }

    /// Cancels a scheduled entry, returning its payload if it was pending.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Moves a pending entry to a new deadline, keeping its id.
    ///
    /// Returns `false` if the entry is no longer pending.
    pub fn reschedule(&mut self, id: TimerId, deadline: u64) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let mut entry = self.entries.remove(index);
        entry.deadline = deadline;
        self.insert(entry);
        true
    }

    /// Returns the deadline of a pending entry.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.position(id).map(|index| self.entries[index].deadline)
    }

    /// Returns `true` if the entry is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.deadline)
    }

    /// Removes and returns the earliest entry whose deadline is `<= now`.
    ///
    /// Call repeatedly to drain everything that is due.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.payload))
    }

    /// Drops every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: TimerId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn insert(&mut self, entry: Entry<T>) {
        // Ties go after existing entries so equal deadlines stay FIFO by id.
        let index = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (entry.deadline, entry.id));
        self.entries.insert(index, entry);
    }
}
