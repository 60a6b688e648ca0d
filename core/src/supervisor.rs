//! # Scan Process Supervisor
//!
//! Launches the external discovery process, drains its output channels,
//! and reports exactly one outcome per invocation. Decoding is NOT done
//! here: exit status and output completeness are independent signals,
//! so the accumulated bytes go to the frame decoder only after the
//! process has finished.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use netpulse_common::config::PipelineConfig;
use netpulse_common::error::ScanError;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Outbound port for running one discovery pass.
///
/// `Ok` carries the raw stdout of a zero-exit pass; every failure mode
/// maps onto a [`ScanError`] variant.
#[async_trait]
pub trait DiscoveryRunner: Send + Sync {
    async fn run_once(&self) -> Result<String, ScanError>;
}

/// Supervises the external discovery process.
///
/// One child is live at a time per instance; [`DiscoveryRunner::run_once`]
/// returns only once the process has exited, been killed on timeout, or
/// failed to spawn.
pub struct ScanSupervisor {
    command: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ScanSupervisor {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            command: config.scanner_command.clone(),
            args: config.scanner_args.clone(),
            working_dir: config.working_dir.clone(),
            timeout: config.scan_timeout,
        }
    }
}

/// Drains a pipe to the end off-task so the child can never stall on a
/// full pipe buffer. Bytes are decoded lossily; the scanner's payload is
/// expected to be UTF-8 but its diagnostics need not be.
fn drain<R>(mut pipe: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut bytes = Vec::new();
        let _ = pipe.read_to_end(&mut bytes).await;
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

#[async_trait]
impl DiscoveryRunner for ScanSupervisor {
    async fn run_once(&self) -> Result<String, ScanError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!(command = %self.command, "launching discovery process");
        let mut child = cmd.spawn().map_err(ScanError::Spawn)?;

        let stdout_task = drain(child.stdout.take().expect("stdout is piped"));
        let stderr_task = drain(child.stderr.take().expect("stderr is piped"));

        // Race process exit against the optional timeout. Whichever
        // loses gets cleaned up: the sleep is dropped on exit, the
        // child is killed and reaped on timeout.
        let status = if let Some(limit) = self.timeout {
            tokio::select! {
                status = child.wait() => status?,
                _ = tokio::time::sleep(limit) => {
                    warn!(?limit, "discovery pass exceeded timeout, killing process");
                    child.start_kill()?;
                    let _ = child.wait().await;
                    // Whatever arrived before the kill cannot be
                    // trusted to be complete.
                    stdout_task.abort();
                    stderr_task.abort();
                    return Err(ScanError::TimedOut);
                }
            }
        } else {
            child.wait().await?
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        if !status.success() {
            return Err(ScanError::Exited { status, stderr });
        }

        debug!(bytes = stdout.len(), "discovery pass completed");
        Ok(stdout)
    }
}
