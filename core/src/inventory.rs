//! Outbound port for the agent inventory collaborator.

use async_trait::async_trait;
use netpulse_common::model::AgentInterface;

/// Read-only query over the continuously-updated agent inventory.
///
/// The pipeline asks for the full interface list once per cycle and
/// never writes back.
#[async_trait]
pub trait AgentInventory: Send + Sync {
    async fn interfaces(&self) -> anyhow::Result<Vec<AgentInterface>>;
}

/// Fixed in-memory inventory, for tests and one-shot runs without an
/// agent backend.
pub struct StaticInventory {
    rows: Vec<AgentInterface>,
}

impl StaticInventory {
    pub fn new(rows: Vec<AgentInterface>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl AgentInventory for StaticInventory {
    async fn interfaces(&self) -> anyhow::Result<Vec<AgentInterface>> {
        Ok(self.rows.clone())
    }
}
