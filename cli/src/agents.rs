//! Agent inventory adapter backed by a JSON file.

use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use netpulse_common::model::{AgentInterface, AgentReport};
use netpulse_core::inventory::AgentInventory;

/// Reads the inventory from a JSON file of agent reports:
/// `[{"agent_name": "...", "addresses": ["...", ...]}, ...]`.
///
/// The file is re-read on every cycle, the same way the dashboard
/// re-queried its agent collection per update, so edits show up without
/// a restart.
pub struct FileInventory {
    path: PathBuf,
}

impl FileInventory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AgentInventory for FileInventory {
    async fn interfaces(&self) -> anyhow::Result<Vec<AgentInterface>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading agents file {}", self.path.display()))?;
        let reports: Vec<AgentReport> =
            serde_json::from_str(&raw).context("agents file is not valid JSON")?;
        Ok(reports.iter().flat_map(AgentReport::interfaces).collect())
    }
}
