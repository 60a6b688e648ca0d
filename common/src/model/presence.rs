use std::time::SystemTime;

use serde::Serialize;

/// Sentinel primary address for hosts discovered without any address.
/// The sentinel never matches the agent set.
pub const NO_ADDRESS: &str = "N/A";

/// The reconciled judgment for one discovered host: is it known to be
/// running an agent, and under what name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceRecord {
    pub primary_address: String,
    pub hardware_id: String,
    pub vendor: String,
    /// Display name of the matching agent, `"Unknown"` when unmatched.
    pub agent_name: String,
    pub has_agent: bool,
    /// Start time of the cycle that produced this record.
    pub observed_at: SystemTime,
}

/// The complete output of exactly one reconciliation cycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub records: Vec<PresenceRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<PresenceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
