#![cfg(test)]
//! Supervisor tests against real `/bin/sh` children.

use std::time::{Duration, Instant};

use netpulse_common::config::PipelineConfig;
use netpulse_common::error::ScanError;
use netpulse_core::supervisor::{DiscoveryRunner, ScanSupervisor};

fn sh(script: &str, timeout: Option<Duration>) -> ScanSupervisor {
    let config = PipelineConfig {
        scanner_command: "/bin/sh".to_string(),
        scanner_args: vec!["-c".to_string(), script.to_string()],
        working_dir: None,
        scan_timeout: timeout,
        cycle_delay: Duration::from_millis(1),
    };
    ScanSupervisor::new(&config)
}

#[tokio::test]
async fn captures_stdout_of_a_clean_exit() {
    let out = sh("printf 'hello'", None).run_once().await.unwrap();
    assert_eq!(out, "hello");
}

#[tokio::test]
async fn nonzero_exit_reports_status_and_stderr() {
    let err = sh("echo oops >&2; exit 3", None)
        .run_once()
        .await
        .unwrap_err();

    match err {
        ScanError::Exited { status, stderr } => {
            assert_eq!(status.code(), Some(3));
            assert!(stderr.contains("oops"));
        }
        other => panic!("unexpected outcome: {other}"),
    }
}

#[tokio::test]
async fn missing_binary_is_a_spawn_error() {
    let config = PipelineConfig {
        scanner_command: "/nonexistent/netpulse-scanner".to_string(),
        scanner_args: Vec::new(),
        working_dir: None,
        scan_timeout: None,
        cycle_delay: Duration::from_millis(1),
    };

    let err = ScanSupervisor::new(&config).run_once().await.unwrap_err();
    assert!(matches!(err, ScanError::Spawn(_)));
}

#[tokio::test]
async fn slow_process_is_killed_on_timeout() {
    let started = Instant::now();

    let err = sh("sleep 5", Some(Duration::from_millis(200)))
        .run_once()
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::TimedOut));
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "kill should not wait for the child's natural exit"
    );
}

#[tokio::test]
async fn large_output_does_not_stall_the_child() {
    let out = sh("head -c 262144 /dev/zero | tr '\\0' 'x'", None)
        .run_once()
        .await
        .unwrap();
    assert_eq!(out.len(), 262144);
}

#[tokio::test]
async fn stderr_noise_does_not_pollute_the_payload() {
    let out = sh("echo 'diagnostic' >&2; printf '[1,2]'", None)
        .run_once()
        .await
        .unwrap();
    assert_eq!(out, "[1,2]");
}
