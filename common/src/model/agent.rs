use serde::Deserialize;

/// One reported interface row from the agent inventory.
///
/// The inventory is maintained by the self-reporting agents themselves
/// and is strictly read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentInterface {
    pub address: String,
    /// Display name of the agent owning the interface.
    #[serde(default = "crate::model::unknown")]
    pub agent_name: String,
}

/// A self-reporting agent as the inventory collaborator stores it: one
/// display name owning any number of interface addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReport {
    #[serde(default = "crate::model::unknown")]
    pub agent_name: String,
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl AgentReport {
    /// Flattens the report into one [`AgentInterface`] row per address.
    pub fn interfaces(&self) -> impl Iterator<Item = AgentInterface> + '_ {
        self.addresses.iter().map(|address| AgentInterface {
            address: address.clone(),
            agent_name: self.agent_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flattens_to_one_row_per_address() {
        let report: AgentReport = serde_json::from_str(
            r#"{"agent_name":"desk-01","addresses":["10.0.0.5","fe80::1"]}"#,
        )
        .unwrap();
        let rows: Vec<AgentInterface> = report.interfaces().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.agent_name == "desk-01"));
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let row: AgentInterface = serde_json::from_str(r#"{"address":"10.0.0.9"}"#).unwrap();
        assert_eq!(row.agent_name, "Unknown");
    }
}
