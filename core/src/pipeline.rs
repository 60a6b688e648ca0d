//! # Cycle Scheduler
//!
//! Drives discover → decode → reconcile → publish on a fixed cadence,
//! forever. Cycles never overlap: the next pass starts only after the
//! previous cycle (and the inter-cycle delay) has fully completed, so
//! the store sees at most one writer at a time by construction.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use netpulse_common::error::CycleError;
use netpulse_common::model::DiscoveredHost;
use tracing::{debug, info, warn};

use crate::decode::{FrameStatus, scan_frame};
use crate::inventory::AgentInventory;
use crate::reconcile::{absent_agents, reconcile};
use crate::store::SnapshotStore;
use crate::supervisor::DiscoveryRunner;

pub struct Pipeline {
    runner: Box<dyn DiscoveryRunner>,
    agents: Box<dyn AgentInventory>,
    store: Arc<SnapshotStore>,
    cycle_delay: Duration,
}

impl Pipeline {
    pub fn new(
        runner: Box<dyn DiscoveryRunner>,
        agents: Box<dyn AgentInventory>,
        store: Arc<SnapshotStore>,
        cycle_delay: Duration,
    ) -> Self {
        Self {
            runner,
            agents,
            store,
            cycle_delay,
        }
    }

    /// Handle for the query side.
    pub fn store(&self) -> Arc<SnapshotStore> {
        Arc::clone(&self.store)
    }

    /// Runs exactly one cycle and returns the number of records
    /// published. Nothing reaches the store unless the whole chain
    /// succeeded; any failure leaves the prior snapshot in place.
    pub async fn run_cycle(&self) -> Result<usize, CycleError> {
        let started = SystemTime::now();

        let raw = self.runner.run_once().await?;
        let discovered: Vec<DiscoveredHost> = match scan_frame(&raw)? {
            FrameStatus::Complete(hosts) => hosts,
            // The process already exited; nothing more is coming.
            FrameStatus::Incomplete => return Err(CycleError::Truncated),
        };

        let agents = self
            .agents
            .interfaces()
            .await
            .map_err(CycleError::Agents)?;

        let absent = absent_agents(&discovered, &agents);
        if !absent.is_empty() {
            debug!(count = absent.len(), "agents with no discovered host this cycle");
        }

        let records = reconcile(&discovered, &agents, started);
        let count = records.len();
        self.store.publish(records);
        Ok(count)
    }

    /// The infinite loop. A failed cycle is logged and skipped — the
    /// previous snapshot stays current until the next success — and the
    /// loop itself never terminates on a cycle's outcome.
    pub async fn run(&self) {
        loop {
            match self.run_cycle().await {
                Ok(count) => info!(devices = count, "snapshot published"),
                Err(err) => warn!(error = %err, "cycle failed, keeping previous snapshot"),
            }
            tokio::time::sleep(self.cycle_delay).await;
        }
    }
}
