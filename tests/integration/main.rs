//! Integration tests for Netpath
//!
//! These tests run the built binary against a temporary graph file with
//! commands piped through stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn graph_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_netpath(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_netpath"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start netpath");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = run_netpath(&["--help"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Shortest paths and reachability"));
}

#[test]
fn test_session_over_stdin() {
    let file = graph_file("A B 2\nB C 3\nbogus line\n");
    let path = file.path().to_str().unwrap();

    let output = run_netpath(
        &[path],
        "path A C\nedgedown A B\npath A C\nedgeup A B\nprint\nquit\npath A C\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "A B C 5.00\n\
         C is unreachable\n\
         A\n    B 2.00\n\
         B\n    A 2.00\n    C 3.00\n\
         C\n    B 3.00\n"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping ill-formatted line"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let file = graph_file("X Y 1\n");
    let output = run_netpath(&[file.path().to_str().unwrap()], "reachable\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "X\n    Y\nY\n    X\n");
}

#[test]
fn test_errors_are_reported_on_stderr() {
    let file = graph_file("A B 1\n");
    let output = run_netpath(
        &[file.path().to_str().unwrap()],
        "vertexdown Q\na b c d e\npath A Q\npath A B\n",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Invalid arguments\nA B 1.00\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vertex not found: Q"));
    assert!(stderr.contains("Destination vertex not found: Q"));
}

#[test]
fn test_config_file_and_precision_override() {
    let file = graph_file("A B 1.5\n");
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "precision = 1\nbidirectional = false").unwrap();

    let args = [
        file.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ];
    let output = run_netpath(&args, "print\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "A\n    B 1.5\nB\n");

    let mut with_override = args.to_vec();
    with_override.extend(["--precision", "3"]);
    let output = run_netpath(&with_override, "path A B\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "A B 1.500\n");
}

#[test]
fn test_missing_graph_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = run_netpath(&[missing.to_str().unwrap()], "print\naddedge A B 1\npath A B\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "A B 1.00\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("nope.txt").count(), 1, "stderr: {}", stderr);
}
