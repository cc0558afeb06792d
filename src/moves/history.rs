//! Bounded move history for undo.
//!
//! A FIFO-evicting log: appends go on the back, and once the capacity is
//! reached the oldest record falls off the front. Undo pops from the
//! back. Persistent vectors keep both ends cheap and make cloning the
//! whole history (snapshots included) structural sharing.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::{MoveKind, MoveRecord};
use crate::stacks::board::BoardSnapshot;

/// Bounded log of move records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vector<MoveRecord>,
    capacity: usize,
    next_sequence: u32,
}

impl MoveHistory {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be at least 1");
        Self {
            records: Vector::new(),
            capacity,
            next_sequence: 0,
        }
    }

    /// Maximum retained records.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the history empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Is there a record to undo?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.records.is_empty()
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Iterate records oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Append a record for a move that just happened.
    ///
    /// Evicts the oldest record at capacity. Returns the assigned
    /// sequence number.
    pub fn record_move(&mut self, kind: MoveKind, before: BoardSnapshot) -> u32 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(MoveRecord::new(sequence, kind, before));
        sequence
    }

    /// Pop and return the most recent record.
    #[must_use]
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Drop every record, e.g. on a new deal. Sequence numbers restart.
    pub fn clear(&mut self) {
        self.records.clear();
        self.next_sequence = 0;
    }
}
