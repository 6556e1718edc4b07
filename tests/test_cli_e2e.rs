//! Binary-level CLI tests: argument handling, exit codes, artifacts.

mod common;

use std::process::{Command, Output};

use common::HubFixture;

fn run_hublint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hublint"))
        .args(args)
        .env_remove("HUBLINT_HUB")
        .env_remove("HUBLINT_BEHAVIORS")
        .env_remove("HUBLINT_MITRE")
        .env_remove("HUBLINT_LOG_LEVEL")
        .output()
        .expect("failed to spawn hublint")
}

#[test]
fn missing_hub_argument_fails_with_diagnostic() {
    let output = run_hublint(&[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(64));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--hub"),
        "diagnostic should point at --hub: {stderr}"
    );
}

#[test]
fn empty_hub_argument_fails_like_missing() {
    let output = run_hublint(&["--hub", ""]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn full_run_writes_taxonomy() {
    let fixture = HubFixture::new();
    fixture.add_scenario(
        "ssh-bf.yaml",
        r"
name: acme/ssh-bf
description: Detect ssh bf
labels:
  service: ssh
  type: bruteforce
  classification: [attack.t1110]
  spoofable: 0
  confidence: 3
",
    );

    let opts = fixture.options();
    let output = run_hublint(&[
        "--hub",
        opts.hub.to_str().unwrap(),
        "-o",
        opts.output.to_str().unwrap(),
        "-e",
        opts.errors.to_str().unwrap(),
        "-b",
        opts.behaviors.to_str().unwrap(),
        "-m",
        opts.mitre.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "run should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let taxonomy = fixture.taxonomy();
    assert_eq!(taxonomy["acme/ssh-bf"]["label"], "SSH BF");
    assert!(fixture.error_report().is_none());
}

#[test]
fn missing_reference_data_is_a_config_error() {
    let fixture = HubFixture::new();
    let opts = fixture.options();

    let output = run_hublint(&[
        "--hub",
        opts.hub.to_str().unwrap(),
        "-o",
        opts.output.to_str().unwrap(),
        "-b",
        opts.behaviors.to_str().unwrap(),
        "-m",
        "/nonexistent/mitre_attack.json",
    ]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mitre_attack.json"), "stderr: {stderr}");
}

#[test]
fn malformed_scenario_yaml_is_a_config_error() {
    let fixture = HubFixture::new();
    fixture.add_scenario("broken.yaml", "name: [unclosed\n");

    let opts = fixture.options();
    let output = run_hublint(&[
        "--hub",
        opts.hub.to_str().unwrap(),
        "-o",
        opts.output.to_str().unwrap(),
        "-b",
        opts.behaviors.to_str().unwrap(),
        "-m",
        opts.mitre.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn hub_can_come_from_environment() {
    let fixture = HubFixture::new();
    let opts = fixture.options();

    let output = Command::new(env!("CARGO_BIN_EXE_hublint"))
        .args([
            "-o",
            opts.output.to_str().unwrap(),
            "-b",
            opts.behaviors.to_str().unwrap(),
            "-m",
            opts.mitre.to_str().unwrap(),
        ])
        .env("HUBLINT_HUB", opts.hub.to_str().unwrap())
        .env_remove("HUBLINT_LOG_LEVEL")
        .output()
        .expect("failed to spawn hublint");

    assert!(
        output.status.success(),
        "env-provided hub should work: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(opts.output.exists());
}
