pub mod agent;
pub mod host;
pub mod presence;

pub use agent::{AgentInterface, AgentReport};
pub use host::DiscoveredHost;
pub use presence::{NO_ADDRESS, PresenceRecord, Snapshot};

pub(crate) fn unknown() -> String {
    String::from("Unknown")
}
