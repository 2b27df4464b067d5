use std::path::PathBuf;
use std::process::Command;

fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "legacy-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../legacy-web/static/assets/data/site.config.json")
}

fn write_config(label: &str, json: &str) -> PathBuf {
    let path = temp_path(label);
    std::fs::write(&path, json).expect("write temp config");
    path
}

#[test]
fn cli_list_checks_writes_output() {
    let exe = env!("CARGO_BIN_EXE_legacy-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-checks", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available checks"));
    assert!(content.contains("anchors-unique"));
}

#[test]
fn cli_passes_shipped_config_strictly() {
    let exe = env!("CARGO_BIN_EXE_legacy-tester");
    let output = Command::new(exe)
        .arg("--config")
        .arg(shipped_config())
        .args(["--strict", "--query", "pvp"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Complex Legacy Config Tester"));
    assert!(stdout.contains("#regla-pvp"));
    assert!(stdout.contains("Result: OK"));
}

#[test]
fn cli_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_legacy-tester");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .arg("--config")
        .arg(shipped_config())
        .args(["--report", "json", "--query", "descanso", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_path).expect("read report"))
            .expect("valid json");
    assert_eq!(report["passed"], true);
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(6));
    assert_eq!(report["queries"][0]["anchors"][0], "regla-menu-de-descanso");
}

#[test]
fn cli_warns_on_duplicates_and_fails_when_strict() {
    let exe = env!("CARGO_BIN_EXE_legacy-tester");
    let config = write_config(
        "dupes",
        r#"{ "server": { "name": "L", "maxPlayers": 10, "discord": "d" },
             "social": { "discord": "d" },
             "rules": [ { "title": "A" }, { "title": "A" } ] }"#,
    );
    let lenient = Command::new(exe)
        .arg("--config")
        .arg(&config)
        .args(["--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(lenient.status.success());
    assert!(String::from_utf8_lossy(&lenient.stdout).contains("| anchors-unique | WARN |"));

    let strict = Command::new(exe)
        .arg("--config")
        .arg(&config)
        .args(["--report", "markdown", "--strict"])
        .output()
        .expect("run cli");
    assert_eq!(strict.status.code(), Some(1));
}

#[test]
fn cli_fails_on_unreadable_config() {
    let exe = env!("CARGO_BIN_EXE_legacy-tester");
    let config = write_config("broken", "{ \"rules\": [");
    let output = Command::new(exe)
        .arg("--config")
        .arg(&config)
        .args(["--report", "json"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json on stdout");
    assert_eq!(report["checks"][0]["name"], "config-parses");
    assert_eq!(report["checks"][0]["status"], "fail");
    assert_eq!(report["checks"][1]["status"], "skip");
}
