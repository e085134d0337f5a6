use std::process::Command;

use cacheload_test::server::{TestServer, unreachable_host};

const CACHELOAD_EXE: &str = env!("CARGO_BIN_EXE_cacheload");

/// Flags that keep parallel runs from competing for the controller ports.
const NO_CONTROLLERS: [&str; 2] = ["--no-telnet", "--no-websocket"];

#[test]
fn lists_scenario() {
    let output = Command::new(CACHELOAD_EXE)
        .args(["--host", &unreachable_host(), "--list"])
        .output()
        .expect("Failed to run cacheload");

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RequestTest"), "{stdout}");
    assert!(stdout.contains("local_test"), "{stdout}");
}

#[test]
fn requires_host() {
    let output = Command::new(CACHELOAD_EXE)
        .args(NO_CONTROLLERS)
        .output()
        .expect("Failed to run cacheload");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load test failed"), "{stderr}");
    assert!(stderr.contains("host"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn runs_against_target() {
    let server = TestServer::new().await;

    let output = Command::new(CACHELOAD_EXE)
        .args(["--host", &server.host(), "-u", "1", "-r", "1", "--iterations", "2"])
        .args(NO_CONTROLLERS)
        .output()
        .expect("Failed to run cacheload");

    assert!(output.status.success(), "{output:?}");
    assert_eq!(server.request_count(), 2);
}

#[test]
fn exits_with_failure_when_requests_fail() {
    let output = Command::new(CACHELOAD_EXE)
        .args(["--host", &unreachable_host(), "-u", "1", "-r", "1", "--iterations", "1"])
        .args(NO_CONTROLLERS)
        .output()
        .expect("Failed to run cacheload");

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("some requests failed"), "{stderr}");
}
