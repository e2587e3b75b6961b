//! Integration tests for the trip-planner CLI

use std::process::{Command, Output};

const CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_config.toml");

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trip-planner"))
        .args(["--config", CONFIG])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help with the crate description
#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_trip-planner"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plan"));
    assert!(stdout.contains("routes"));
    assert!(stdout.contains("serve"));
}

/// Test that running without a subcommand lists the routes
#[test]
fn test_default_lists_routes() {
    let output = run(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for slug in ["bg-de", "bg-it", "bg-fr", "bg-ro"] {
        assert!(stdout.contains(slug), "missing {slug} in {stdout}");
    }
}

/// Test the plan report using the configured defaults
#[test]
fn test_plan_with_config_defaults() {
    let output = run(&["plan"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("София ➡️ Белград ➡️ Виена ➡️ Мюнхен"));
    assert!(stdout.contains("4425.00 лв"));
    assert!(stdout.contains("Бюджетът не достига"));
}

/// Test that flags override the defaults
#[test]
fn test_plan_with_flags() {
    let output = run(&[
        "plan", "--route", "bg-ro", "--transport", "bus", "--days", "1", "--travelers", "1",
        "--budget", "1000",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Букурещ"));
    assert!(stdout.contains("327.00 лв"));
    assert!(stdout.contains("Бюджетът е достатъчен"));
}

/// Test JSON output
#[test]
fn test_plan_json_output() {
    let output = run(&["plan", "--json"]);
    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["estimate"]["total_cost"], 4425.0);
    assert_eq!(plan["route_slug"], "bg-de");
}

/// Test error handling for out-of-range input
#[test]
fn test_plan_invalid_days() {
    let output = run(&["plan", "--days", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
}

/// Test verbose output shows configuration details
#[test]
fn test_verbose_shows_config_details() {
    let output = run(&["--verbose", "routes"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using config from:"));
    assert!(stdout.contains("test_config.toml"));
    assert!(stdout.contains("Log level: warn"));
}

/// Test that a rejected config names the offending setting
#[test]
fn test_invalid_config_reports_details() {
    let config = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid_config.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_trip-planner"))
        .args(["--config", config, "routes"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
    assert!(stderr.contains("Invalid log level 'bogus'"));
}
