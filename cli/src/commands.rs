use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use netpulse_common::config::PipelineConfig;

#[derive(Parser)]
#[command(name = "netpulse")]
#[command(about = "Continuous device-presence monitor for your network.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the reconciliation loop until interrupted
    #[command(alias = "r")]
    Run(ScanOpts),
    /// Run a single cycle and print the snapshot as JSON
    #[command(alias = "o")]
    Once(ScanOpts),
}

#[derive(Args)]
pub struct ScanOpts {
    /// Command launched for each discovery pass
    #[arg(long, default_value = "python")]
    pub scanner: String,

    /// Argument handed to the discovery command (repeatable)
    #[arg(long = "scanner-arg", value_name = "ARG")]
    pub scanner_args: Vec<String>,

    /// Working directory for the discovery process
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Kill a discovery pass running longer than this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Pause between cycles, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    pub delay_ms: u64,

    /// JSON file with the agent-reported inventory
    #[arg(long)]
    pub agents_file: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ScanOpts {
    pub fn to_config(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            scanner_command: self.scanner.clone(),
            scanner_args: if self.scanner_args.is_empty() {
                defaults.scanner_args
            } else {
                self.scanner_args.clone()
            },
            working_dir: self.workdir.clone(),
            scan_timeout: self.timeout_secs.map(Duration::from_secs),
            cycle_delay: Duration::from_millis(self.delay_ms),
        }
    }
}
