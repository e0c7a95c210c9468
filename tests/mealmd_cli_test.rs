// ABOUTME: Integration tests for the mealmd binary
// ABOUTME: Pipes scripted answers through stdin and checks stdout, exit codes and the snapshot file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the mealmd binary.
//!
//! These tests verify help output, JSON and text results, snapshot saving
//! and exit codes for truncated input.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const LEAN_SEAFOOD_SCRIPT: &str = "1\n3\n3\n0\n1\n2\n1\n";

/// Run the binary with `args`, feeding `stdin`
fn run_cli(args: &[&str], stdin: &str) -> (i32, String, String) {
    run_cli_with_env(args, stdin, &[])
}

/// Run the binary with extra environment variables
fn run_cli_with_env(args: &[&str], stdin: &str, vars: &[(&str, &str)]) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mealmd"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("MEALMD_TOP_K")
        .env_remove("MEALMD_PREFS_PATH")
        .env_remove("RUST_LOG")
        .envs(vars.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before reading everything (e.g. --help)
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    let output = child.wait_with_output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn prefs_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn pick_names(json: &Value) -> Vec<&str> {
    json["top_recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pick| pick["name"].as_str().unwrap())
        .collect()
}

#[test]
fn test_cli_help_lists_flags() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"], "");

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for flag in ["--json", "--seed", "--top", "--no-color", "--no-save", "--prefs-path"] {
        assert!(stdout.contains(flag), "Help should mention {flag}");
    }
}

#[test]
fn test_cli_rejects_bad_seed() {
    let (exit_code, _stdout, stderr) = run_cli(&["--seed", "abc"], "");
    assert_eq!(exit_code, 2, "clap usage errors exit with 2");
    assert!(stderr.contains("--seed"));
}

#[test]
fn test_cli_json_output_is_clean() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");
    let (exit_code, stdout, stderr) = run_cli(
        &["--json", "--no-save", "--prefs-path", &prefs_arg(&prefs)],
        LEAN_SEAFOOD_SCRIPT,
    );

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        pick_names(&json),
        vec![
            "Shrimp Rice Bowl",
            "Egg White Veggie Omelet + Oats",
            "Greek Yogurt Power Bowl",
        ]
    );
    assert!(stderr.contains("What's your current goal?"), "prompts go to stderr");
    assert!(!prefs.exists(), "--no-save must not write the snapshot");
}

#[test]
fn test_cli_top_and_seed() {
    let dir = TempDir::new().unwrap();
    let prefs = prefs_arg(&dir.path().join("prefs.json"));
    let args = [
        "--json",
        "--no-save",
        "--top",
        "5",
        "--seed",
        "42",
        "--prefs-path",
        prefs.as_str(),
    ];

    let (exit_code, first, _) = run_cli(&args, LEAN_SEAFOOD_SCRIPT);
    assert_eq!(exit_code, 0);
    let (_, second, _) = run_cli(&args, LEAN_SEAFOOD_SCRIPT);

    let json: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(pick_names(&json).len(), 5);
    assert_eq!(first, second, "same seed should give identical output");
}

#[test]
fn test_cli_saves_and_reuses_snapshot() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");
    let prefs_str = prefs_arg(&prefs);

    let (exit_code, first, _) = run_cli(
        &["--json", "--prefs-path", &prefs_str],
        "1\n3\n3\n1,5\n1\n2\n1\n",
    );
    assert_eq!(exit_code, 0);

    let saved: Value = serde_json::from_str(&fs::read_to_string(&prefs).unwrap()).unwrap();
    assert_eq!(saved["goal"], "cut");
    assert_eq!(saved["avoids"], serde_json::json!(["dairy", "soy"]));

    // Every answer defaults to the snapshot
    let (exit_code, second, stderr) =
        run_cli(&["--json", "--prefs-path", &prefs_str], "\n\n\n\n\n\n\n");
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stderr.contains("(Preselected: Dairy, Soy. Press Enter to keep.)"));
    assert_eq!(first, second);
}

#[test]
fn test_cli_text_output() {
    let dir = TempDir::new().unwrap();
    let prefs = prefs_arg(&dir.path().join("prefs.json"));
    let (exit_code, stdout, _) = run_cli(
        &["--no-save", "--no-color", "--prefs-path", &prefs],
        LEAN_SEAFOOD_SCRIPT,
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("=== MealMD (step-by-step) ==="));
    assert!(stdout.contains("=== Top Picks ==="));
    assert!(stdout.contains("1) Shrimp Rice Bowl  (score: 74.0)"));
    assert!(stdout.contains("not medical advice"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_cli_truncated_input_exits_with_usage_error() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");
    let (exit_code, stdout, stderr) = run_cli(
        &["--json", "--prefs-path", &prefs_arg(&prefs)],
        "1\n3\n",
    );

    assert_eq!(exit_code, 64);
    assert!(stdout.is_empty());
    assert!(stderr.contains("mealmd:"));
    assert!(!prefs.exists());
}

#[test]
fn test_cli_accepts_negative_seed() {
    let dir = TempDir::new().unwrap();
    let prefs = prefs_arg(&dir.path().join("prefs.json"));
    let run = |seed: &str| {
        run_cli(
            &["--json", "--no-save", "--top", "12", "--seed", seed, "--prefs-path", &prefs],
            LEAN_SEAFOOD_SCRIPT,
        )
    };

    let (exit_code, negative, stderr) = run("-1");
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    // -1 reinterprets to u64::MAX
    let (_, max, _) = run("18446744073709551615");
    assert_eq!(negative, max);
}

#[test]
fn test_cli_invalid_weight_override_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");
    let (exit_code, stdout, stderr) = run_cli_with_env(
        &["--json", "--prefs-path", &prefs_arg(&prefs)],
        LEAN_SEAFOOD_SCRIPT,
        &[("MEALMD_WEIGHT_GOAL_CUT", "-1")],
    );

    assert_eq!(exit_code, 78);
    assert!(stdout.is_empty());
    assert!(stderr.contains("goal_cut"), "stderr: {stderr}");
    assert!(!prefs.exists());
}
