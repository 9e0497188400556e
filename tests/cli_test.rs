use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

const TYPE_NAME: &str = "k8s_gateway_solo_io_virtual_service_v1";

fn k8s_provider(work_dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_k8s-provider"));
    command.current_dir(work_dir.path());
    command
}

#[test]
fn test_help_lists_commands() {
    let work_dir = TempDir::new().unwrap();
    let output = k8s_provider(&work_dir).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("data-sources"));
    assert!(stdout.contains("read"));
}

#[test]
fn test_data_sources_command() {
    let work_dir = TempDir::new().unwrap();
    let output = k8s_provider(&work_dir).arg("data-sources").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(TYPE_NAME));
}

#[test]
fn test_schema_command_prints_json() {
    let work_dir = TempDir::new().unwrap();
    let output = k8s_provider(&work_dir)
        .args(["schema", TYPE_NAME])
        .output()
        .unwrap();

    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = schema["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["id", "api_version", "kind", "metadata", "spec"]);
}

#[test]
fn test_schema_command_unknown_type() {
    let work_dir = TempDir::new().unwrap();
    let output = k8s_provider(&work_dir)
        .args(["schema", "k8s_missing"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown data source type"));
}

#[test]
fn test_offline_read_reports_diagnostic() {
    let work_dir = TempDir::new().unwrap();
    let output = k8s_provider(&work_dir)
        .args(["read", TYPE_NAME, "--name", "storefront", "--namespace", "gloo-system", "--offline"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Provider in Offline Mode"));
}

#[test]
fn test_init_then_validate() {
    let work_dir = TempDir::new().unwrap();

    let output = k8s_provider(&work_dir).arg("init").output().unwrap();
    assert!(output.status.success());
    assert!(work_dir.path().join(".k8s-provider.yaml").exists());

    // a second init refuses to overwrite
    let output = k8s_provider(&work_dir).arg("init").output().unwrap();
    assert!(!output.status.success());

    let output = k8s_provider(&work_dir).arg("validate").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration file is valid!"));
}

#[test]
fn test_info_command() {
    let work_dir = TempDir::new().unwrap();
    let output = k8s_provider(&work_dir)
        .args(["info", "--detailed"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Provider type name: k8s"));
}
