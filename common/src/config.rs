use std::path::PathBuf;
use std::time::Duration;

/// Settings for one pipeline instance, handed down from the CLI.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Command launched for each discovery pass.
    pub scanner_command: String,
    /// Arguments causing the scanner to run exactly one pass and emit JSON.
    pub scanner_args: Vec<String>,
    /// Working directory for the scanner process.
    pub working_dir: Option<PathBuf>,
    /// Kill a pass that outlives this. `None` lets it run unbounded.
    pub scan_timeout: Option<Duration>,
    /// Pause between the end of one cycle and the start of the next.
    pub cycle_delay: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scanner_command: String::from("python"),
            scanner_args: vec![
                String::from("./scanner/network_scanner_cli.py"),
                String::from("--auto"),
                String::from("--json"),
            ],
            working_dir: None,
            scan_timeout: None,
            cycle_delay: Duration::from_secs(30),
        }
    }
}
