//! Error taxonomy for the presence pipeline.
//!
//! Every variant here is handled locally within one cycle; nothing in
//! this module ever escapes the scheduler loop.

use std::process::ExitStatus;

use thiserror::Error;

/// Failure modes of a single discovery pass.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The discovery process could not be started at all.
    #[error("failed to launch discovery process: {0}")]
    Spawn(#[source] std::io::Error),

    /// The process ran but exited non-zero. Stderr is retained for
    /// logging only and is never parsed as data.
    #[error("discovery process exited with {status}")]
    Exited { status: ExitStatus, stderr: String },

    /// The pass outlived the configured timeout and was killed. Any
    /// output accumulated up to that point is discarded.
    #[error("discovery pass timed out")]
    TimedOut,

    /// Waiting on or signalling the child failed after it started.
    #[error("discovery process I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A frame boundary was found but the candidate slice does not parse.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload candidate is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can sink one reconciliation cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The process exited cleanly but its output never formed a frame.
    #[error("discovery output ended without a complete payload")]
    Truncated,

    #[error("agent inventory query failed: {0}")]
    Agents(#[source] anyhow::Error),
}
