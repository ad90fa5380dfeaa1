//! End-to-end tests of the `eureject` binary
//!
//! These tests run the built executable on small fixture tables and check
//! exit codes, standard output and standard error.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

// ============================================================================
// Helper Functions
// ============================================================================

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn eureject(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eureject"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Observed `(1, 2)` and simulated rows `(1, 2)`, `(3, 4)`, `(0, 0)`
fn worked_example(dir: &TempDir) -> (PathBuf, PathBuf) {
    let obs = write(dir, "obs.txt", "stat.1 stat.2\n1.0 2.0\n");
    let sims = write(dir, "sims.txt", "stat.1\tstat.2\n1.0\t2.0\n3.0\t4.0\n0.0\t0.0\n");
    (obs, sims)
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn test_help_exits_zero() {
    let output = eureject(&["-h"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_missing_observed_path_is_usage_error() {
    let dir = tempdir().unwrap();
    let (_, sims) = worked_example(&dir);
    let output = eureject(&[path_str(&sims)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_mismatched_means_and_std_devs_is_usage_error() {
    let dir = tempdir().unwrap();
    let (obs, sims) = worked_example(&dir);
    let output = eureject(&[
        "-f",
        path_str(&obs),
        "-m",
        "1,1",
        "-s",
        "1",
        path_str(&sims),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_zero_subsample_is_usage_error() {
    let dir = tempdir().unwrap();
    let (obs, sims) = worked_example(&dir);
    let output = eureject(&["-f", path_str(&obs), "-n", "0", path_str(&sims)]);
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Runs
// ============================================================================

#[test]
fn test_worked_example() {
    let dir = tempdir().unwrap();
    let (obs, sims) = worked_example(&dir);
    let output = eureject(&[
        "-f",
        path_str(&obs),
        "-k",
        "2",
        "-m",
        "1,1",
        "-s",
        "1,1",
        "-e",
        path_str(&sims),
    ]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "distance\tstat.1\tstat.2\n0.000000\t1.0\t2.0\n2.236068\t0.0\t0.0\n"
    );

    let err = stderr(&output);
    assert!(err.contains("Number of samples to retain: 2"));
    assert!(err.contains("Number of samples to use for standardization: 0"));
}

#[test]
fn test_estimate_only_prints_three_lines() {
    let dir = tempdir().unwrap();
    let (obs, sims) = worked_example(&dir);
    let output = eureject(&["-f", path_str(&obs), "-k", "0", path_str(&sims)]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "stat.1\tstat.2");
    assert_eq!(lines[1], "1.333333\t2.000000");
}

#[test]
fn test_header_mismatch_fails_with_empty_stdout() {
    let dir = tempdir().unwrap();
    let (obs, sims) = worked_example(&dir);
    let other = write(&dir, "other.txt", "stat.1\tstat.3\n1.0\t2.0\n");
    let output = eureject(&["-f", path_str(&obs), path_str(&sims), path_str(&other)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("have different headers"));
}

#[test]
fn test_missing_file_reports_os_error() {
    let dir = tempdir().unwrap();
    let (obs, _) = worked_example(&dir);
    let missing = dir.path().join("missing.txt");
    let output = eureject(&["-f", path_str(&obs), path_str(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("missing.txt"));
}

#[test]
fn test_config_file_sets_retain_count() {
    let dir = tempdir().unwrap();
    let (obs, sims) = worked_example(&dir);
    let config = write(&dir, "eureject.toml", "[rejection]\nnum_retain = 1\n");
    let output = eureject(&[
        "-f",
        path_str(&obs),
        "--config",
        path_str(&config),
        "--means",
        "1,1",
        "--std-devs",
        "1,1",
        path_str(&sims),
    ]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "stat.1\tstat.2\n1.0\t2.0\n");
}

#[test]
fn test_output_is_deterministic() {
    let dir = tempdir().unwrap();
    let obs = write(&dir, "obs.txt", "a b\n0.5 0.5\n");
    let body: String = std::iter::once("p a b\n".to_string())
        .chain((0..200).map(|i| {
            let x = (i as f64 * 0.37).sin();
            let y = (i as f64 * 0.91).cos();
            format!("{} {:.4} {:.4}\n", i, x, y)
        }))
        .collect();
    let sims = write(&dir, "sims.txt", &body);
    let args = ["-f", path_str(&obs), "-k", "25", "-e", path_str(&sims)];

    let first = eureject(&args);
    let second = eureject(&args);
    assert_eq!(first.status.code(), Some(0), "{}", stderr(&first));
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout(&first).lines().count(), 26);
}
