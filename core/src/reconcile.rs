//! # Inventory Reconciler
//!
//! The core merge: one discovery pass crossed with the agent-reported
//! inventory, keyed by normalized address. Pure functions of their
//! inputs, no I/O, no hidden state.

use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use netpulse_common::addr::normalize;
use netpulse_common::model::{AgentInterface, DiscoveredHost, NO_ADDRESS, PresenceRecord};

const UNKNOWN: &str = "Unknown";

/// Produces one [`PresenceRecord`] per discovered host, in input order.
///
/// A host's primary address is its first reported address (normalized),
/// or the [`NO_ADDRESS`] sentinel when it reported none; the sentinel
/// never counts as present in the agent set. Hosts are neither
/// deduplicated nor reordered, and agents with no matching host
/// contribute nothing here (see [`absent_agents`]).
pub fn reconcile(
    discovered: &[DiscoveredHost],
    agents: &[AgentInterface],
    observed_at: SystemTime,
) -> Vec<PresenceRecord> {
    // First writer wins when two agents claim the same address.
    let mut names: HashMap<String, &str> = HashMap::new();
    for agent in agents {
        names
            .entry(normalize(&agent.address))
            .or_insert(agent.agent_name.as_str());
    }

    discovered
        .iter()
        .map(|host| {
            let addr = host
                .addresses
                .first()
                .map(|a| normalize(a))
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| NO_ADDRESS.to_string());

            let has_agent = addr != NO_ADDRESS && names.contains_key(&addr);
            let agent_name = if has_agent {
                names[addr.as_str()].to_string()
            } else {
                UNKNOWN.to_string()
            };

            PresenceRecord {
                primary_address: addr,
                hardware_id: host
                    .hardware_id
                    .clone()
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                vendor: host.vendor.clone().unwrap_or_else(|| UNKNOWN.to_string()),
                agent_name,
                has_agent,
                observed_at,
            }
        })
        .collect()
}

/// The complement report: agents whose address matched no discovered
/// host this cycle. Deliberately separate from [`reconcile`], which
/// only ever iterates the discovered side.
pub fn absent_agents(
    discovered: &[DiscoveredHost],
    agents: &[AgentInterface],
) -> Vec<AgentInterface> {
    let seen: HashSet<String> = discovered
        .iter()
        .filter_map(|host| host.addresses.first())
        .map(|a| normalize(a))
        .collect();

    agents
        .iter()
        .filter(|agent| {
            let addr = normalize(&agent.address);
            !addr.is_empty() && !seen.contains(&addr)
        })
        .cloned()
        .collect()
}
