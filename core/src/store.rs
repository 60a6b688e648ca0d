//! # Snapshot Store
//!
//! Replace-on-write holder for the latest published snapshot. Writes
//! are serialized by the scheduler; reads come from arbitrarily many
//! concurrent clients.
//!
//! The new snapshot is built in full before a single atomic pointer
//! swap makes it current, so a reader always holds a complete snapshot
//! from exactly one cycle — never an empty or half-written view.

use std::sync::Arc;

use arc_swap::ArcSwap;
use netpulse_common::model::{PresenceRecord, Snapshot};

pub struct SnapshotStore {
    inner: ArcSwap<Snapshot>,
}

impl SnapshotStore {
    /// Starts empty: `current` yields an empty snapshot until the first
    /// publish.
    pub fn new() -> Self {
        Self {
            inner: ArcSwap::from_pointee(Snapshot::default()),
        }
    }

    /// Replaces the prior snapshot wholesale. The only mutator.
    pub fn publish(&self, records: Vec<PresenceRecord>) {
        self.inner.store(Arc::new(Snapshot::new(records)));
    }

    /// The latest published snapshot. Readers holding an older `Arc`
    /// keep their complete view until they drop it.
    pub fn current(&self) -> Arc<Snapshot> {
        self.inner.load_full()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
