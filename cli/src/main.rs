mod agents;
mod commands;
mod terminal;

use std::sync::Arc;

use commands::{CommandLine, Commands, ScanOpts};
use netpulse_core::inventory::{AgentInventory, StaticInventory};
use netpulse_core::pipeline::Pipeline;
use netpulse_core::store::SnapshotStore;
use netpulse_core::supervisor::ScanSupervisor;
use tracing::info;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    match commands.command {
        Commands::Run(opts) => {
            let pipeline = build_pipeline(&opts);
            info!("starting presence pipeline");
            pipeline.run().await;
            Ok(())
        }
        Commands::Once(opts) => {
            let pipeline = build_pipeline(&opts);
            let count = pipeline.run_cycle().await?;
            info!(devices = count, "cycle complete");
            println!(
                "{}",
                serde_json::to_string_pretty(&*pipeline.store().current())?
            );
            Ok(())
        }
    }
}

fn build_pipeline(opts: &ScanOpts) -> Pipeline {
    let cfg = opts.to_config();
    let runner = ScanSupervisor::new(&cfg);
    let inventory: Box<dyn AgentInventory> = match &opts.agents_file {
        Some(path) => Box::new(agents::FileInventory::new(path.clone())),
        None => Box::new(StaticInventory::new(Vec::new())),
    };

    Pipeline::new(
        Box::new(runner),
        inventory,
        Arc::new(SnapshotStore::new()),
        cfg.cycle_delay,
    )
}
