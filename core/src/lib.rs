//! # netpulse core
//!
//! The continuous device-presence reconciliation pipeline: supervise an
//! external discovery process, decode its JSON frame out of noisy
//! chunked output, merge the discovered hosts with the agent-reported
//! inventory, and publish the result as a replace-on-write snapshot.
//!
//! Data flows one way per cycle:
//! [`supervisor`] → [`decode`] → [`reconcile`] → [`store`], driven by
//! the [`pipeline`] scheduler. Collaborators plug in through the
//! [`supervisor::DiscoveryRunner`] and [`inventory::AgentInventory`]
//! ports.

pub mod decode;
pub mod inventory;
pub mod pipeline;
pub mod reconcile;
pub mod store;
pub mod supervisor;
