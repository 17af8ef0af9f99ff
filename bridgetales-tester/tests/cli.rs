use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "bridgetales-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_bridgetales-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("overlay"));
}

#[test]
fn cli_runs_every_scenario_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_bridgetales-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--scenarios",
            "all",
            "--seeds",
            "1,7",
            "--iterations",
            "2",
            "--report",
            "json",
            "--api-base",
            "https://stories.example",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BridgeTales Scenario Tester"));

    let report = std::fs::read_to_string(output_path).expect("read report");
    let results: Vec<serde_json::Value> = serde_json::from_str(&report).expect("json report");
    assert_eq!(results.len(), 16);
    assert!(results.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_rejects_a_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_bridgetales-tester");
    let output = Command::new(exe)
        .args(["--seeds", "abc", "--output"])
        .arg(temp_path("bad-seed"))
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
