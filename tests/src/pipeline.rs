#![cfg(test)]
//! Full pipeline cycles driven by a scripted `/bin/sh` scanner.

use std::sync::Arc;
use std::time::Duration;

use netpulse_common::config::PipelineConfig;
use netpulse_common::error::CycleError;
use netpulse_common::model::AgentInterface;
use netpulse_core::inventory::StaticInventory;
use netpulse_core::pipeline::Pipeline;
use netpulse_core::store::SnapshotStore;
use netpulse_core::supervisor::ScanSupervisor;

fn sh_config(script: &str) -> PipelineConfig {
    PipelineConfig {
        scanner_command: "/bin/sh".to_string(),
        scanner_args: vec!["-c".to_string(), script.to_string()],
        working_dir: None,
        scan_timeout: Some(Duration::from_secs(10)),
        cycle_delay: Duration::from_millis(1),
    }
}

fn sh_pipeline(script: &str, agents: Vec<AgentInterface>, store: Arc<SnapshotStore>) -> Pipeline {
    let config = sh_config(script);
    Pipeline::new(
        Box::new(ScanSupervisor::new(&config)),
        Box::new(StaticInventory::new(agents)),
        store,
        config.cycle_delay,
    )
}

#[tokio::test]
async fn end_to_end_cycle_publishes_presence_records() {
    let script = "echo 'Scanning network: 127.0.0.0/8 ...'; \
        echo '[{\"ips\":[\"127.0.0.1\"],\"mac\":\"aa:bb:cc:dd:ee:ff\",\"vendor\":\"Loopback\",\"mobile\":false}]'";

    let agents = vec![AgentInterface {
        address: "127.0.0.1".to_string(),
        agent_name: "localhost".to_string(),
    }];
    let pipeline = sh_pipeline(script, agents, Arc::new(SnapshotStore::new()));

    let count = pipeline.run_cycle().await.expect("cycle should succeed");
    assert_eq!(count, 1);

    let snapshot = pipeline.store().current();
    let record = &snapshot.records[0];
    assert_eq!(record.primary_address, "127.0.0.1");
    assert_eq!(record.hardware_id, "aa:bb:cc:dd:ee:ff");
    assert_eq!(record.vendor, "Loopback");
    assert!(record.has_agent);
    assert_eq!(record.agent_name, "localhost");
}

#[tokio::test]
async fn second_cycle_replaces_the_first_snapshot() {
    // The scanner reports a different host set once the marker exists.
    let marker = std::env::temp_dir().join(format!("netpulse-cycle-{}", std::process::id()));
    let _ = std::fs::remove_file(&marker);
    let script = format!(
        "if [ -f {m} ]; then echo '[{{\"ips\":[\"10.0.0.2\"]}}]'; \
         else touch {m}; echo '[{{\"ips\":[\"10.0.0.1\"]}}]'; fi",
        m = marker.display()
    );

    let pipeline = sh_pipeline(&script, Vec::new(), Arc::new(SnapshotStore::new()));

    pipeline.run_cycle().await.expect("first cycle");
    assert_eq!(
        pipeline.store().current().records[0].primary_address,
        "10.0.0.1"
    );

    pipeline.run_cycle().await.expect("second cycle");
    let snapshot = pipeline.store().current();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.records[0].primary_address, "10.0.0.2");

    let _ = std::fs::remove_file(&marker);
}

#[tokio::test]
async fn failing_scanner_leaves_the_previous_snapshot_in_place() {
    let store = Arc::new(SnapshotStore::new());

    let good = sh_pipeline(
        "echo '[{\"ips\":[\"10.0.0.1\"]}]'",
        Vec::new(),
        Arc::clone(&store),
    );
    good.run_cycle().await.expect("seed cycle");
    assert_eq!(store.current().len(), 1);

    let bad = sh_pipeline("echo 'scanner blew up' >&2; exit 1", Vec::new(), Arc::clone(&store));
    let err = bad.run_cycle().await.unwrap_err();
    assert!(matches!(err, CycleError::Scan(_)));

    // Readers still see the last successful cycle.
    assert_eq!(store.current().records[0].primary_address, "10.0.0.1");
}
