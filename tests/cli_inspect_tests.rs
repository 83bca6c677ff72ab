//! End-to-end tests for `panelgen inspect` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the panelgen binary
fn panelgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_panelgen")
}

#[test]
fn test_inspect_json() {
    let (panel_path, temp_dir) = create_temp_panel_file(&vco_panel());

    let output = Command::new(panelgen_bin())
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .arg("inspect")
        .arg(&panel_path)
        .arg("--json")
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let params = result["params"].as_array().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0]["kind"], "param");
    assert_eq!(params[0]["name"]["label"], "PITCH_PARAM");
    assert!(params[0]["name"]["ui_kind"].is_null());
    assert_eq!(params[0]["placement"], "centered");
    assert_eq!(params[1]["name"]["ui_kind"], "Trimpot");
    assert_eq!(params[1]["placement"], "corner");
    assert_eq!(params[1]["width"], 4.5);

    let inputs = result["inputs"].as_array().unwrap();
    assert_eq!(inputs[0]["name"], "Fm_input");
    assert_eq!(inputs[0]["cx"], 7.62);
    assert_eq!(inputs[1]["name"], "PITCH_INPUT");

    assert_eq!(result["outputs"].as_array().unwrap().len(), 1);
    assert_eq!(result["lights"].as_array().unwrap().len(), 1);
    let widgets = result["widgets"].as_array().unwrap();
    assert_eq!(widgets[0]["y"], 10.123);
}

#[test]
fn test_inspect_human_readable() {
    let (panel_path, temp_dir) = create_temp_panel_file(&vco_panel());

    let output = Command::new(panelgen_bin())
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .arg("inspect")
        .arg(&panel_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "Found 2 params, 2 inputs, 1 outputs, 1 lights, and 1 custom widgets."
    ));
    assert!(stdout.contains("Param (2):"));
    assert!(stdout.contains("FINE_PARAM <Trimpot>"));
    assert!(stdout.contains("center (15.24, 46.063)"));
    assert!(stdout.contains("corner (3.5, 10.123) size 23.8 x 8.0"));
}

#[test]
fn test_inspect_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = Command::new(panelgen_bin())
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .arg("inspect")
        .arg(temp_dir.path().join("nope.svg"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
}

#[test]
fn test_inspect_strict_layer_from_config() {
    let svg = vco_panel().replace(
        "inkscape:label=\"panel\"",
        "inkscape:label=\"components\"",
    );
    let (panel_path, temp_dir) = create_temp_panel_file(&svg);

    // Default: first layer wins (the background layer, with one stray input)
    let output = Command::new(panelgen_bin())
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .args(["inspect", "--json"])
        .arg(&panel_path)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["inputs"][0]["name"], "Stray");

    let config_path = temp_dir.path().join("strict.toml");
    std::fs::write(&config_path, "[extract]\nstrict_layer = true\n").unwrap();
    let output = Command::new(panelgen_bin())
        .arg("--config")
        .arg(&config_path)
        .args(["inspect", "--json"])
        .arg(&panel_path)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found 2 \"components\" layers"), "{stderr}");
}
