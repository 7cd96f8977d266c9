//! Binary Tests
//!
//! Drives the built `frameplot` and `frameplot-gen` executables over pipes.
//! Only headless mode is exercised; the viewer needs a terminal.
//!
//! Run: cargo test --test cli_test

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Output, Stdio};

use frameplot::record::Record;

const FRAMEPLOT: &str = env!("CARGO_BIN_EXE_frameplot");
const FRAMEPLOT_GEN: &str = env!("CARGO_BIN_EXE_frameplot-gen");

/// Command isolated from any config file in the user's home.
fn command(bin: &str, home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(bin);
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("FRAMEPLOT_DEBUG");
    cmd
}

fn run_headless(args: &[&str], input: &[u8]) -> Output {
    let home = tempfile::tempdir().unwrap();
    let mut child = command(FRAMEPLOT, &home)
        .arg("--headless")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn frameplot");

    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn frames(records: &[Record]) -> Vec<u8> {
    records.iter().flat_map(Record::encode).collect()
}

// ============================================================================
// SECTION 1: HEADLESS ECHO
// ============================================================================

#[test]
fn headless_echoes_each_record() {
    let output = run_headless(&[], &frames(&[Record::new(1, 2), Record::new(300, 70_000)]));

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "(1, 2)\n(300, 70000)\n");
}

#[test]
fn headless_drops_partial_frame() {
    let mut input = frames(&[Record::new(5, 6)]);
    input.extend_from_slice(&[1, 2, 3]);

    let output = run_headless(&[], &input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "(5, 6)\n");
}

#[test]
fn headless_empty_stream_exits_cleanly() {
    let output = run_headless(&[], &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn no_echo_silences_stdout() {
    let output = run_headless(&["--no-echo"], &frames(&[Record::new(1, 1)]));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn debug_flag_logs_to_stderr() {
    let output = run_headless(&["--debug"], &frames(&[Record::new(1, 1)]));

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[headless]"), "stderr: {stderr}");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "(1, 1)\n");
}

/// Closing the echo's reader early (`frameplot --headless | head -1`) is a
/// normal end, not a failure.
#[test]
fn headless_survives_closed_stdout() {
    let home = tempfile::tempdir().unwrap();
    let mut child = command(FRAMEPLOT, &home)
        .arg("--headless")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn frameplot");

    drop(child.stdout.take());
    let records: Vec<Record> = (0..10_000).map(|i| Record::new(i, i)).collect();
    child.stdin.take().unwrap().write_all(&frames(&records)).unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

// ============================================================================
// SECTION 2: CONFIGURATION
// ============================================================================

#[test]
fn missing_config_file_fails() {
    let output = run_headless(&["--config", "/nonexistent/frameplot.yaml"], &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn config_file_can_disable_echo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "echo: false\n").unwrap();

    let output =
        run_headless(&["--config", path.to_str().unwrap()], &frames(&[Record::new(9, 9)]));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn zero_tick_is_rejected() {
    let output = run_headless(&["--tick-ms", "0"], &[]);

    assert!(!output.status.success());
}

// ============================================================================
// SECTION 3: GENERATOR PIPELINE
// ============================================================================

#[test]
fn generator_writes_exact_frame_count() {
    let home = tempfile::tempdir().unwrap();
    let output = command(FRAMEPLOT_GEN, &home)
        .args(["--pattern", "ramp", "--count", "16"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout.len(), 16 * 8);
    assert_eq!(&output.stdout[8..16], &Record::new(1, 1).encode());
}

#[test]
fn generator_output_plots_headlessly() {
    let home = tempfile::tempdir().unwrap();
    let generated = command(FRAMEPLOT_GEN, &home)
        .args(["--pattern", "square", "--count", "10", "--amplitude", "50", "--period", "4"])
        .output()
        .unwrap();

    let output = run_headless(&[], &generated.stdout);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "(0, 50)");
    assert_eq!(lines[2], "(2, 0)");
}

// ============================================================================
// SECTION 4: INTERRUPT
// ============================================================================

/// SIGINT mid-stream exits with status 0 and keeps what was already echoed.
#[cfg(unix)]
#[test]
fn interrupt_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let mut child = command(FRAMEPLOT, &home)
        .arg("--headless")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn frameplot");

    // Keep stdin open so the process is blocked on the next frame.
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(&Record::new(4, 2).encode()).unwrap();
    stdin.flush().unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    stdout.read_line(&mut line).unwrap();
    assert_eq!(line, "(4, 2)\n");

    let pid = libc::pid_t::try_from(child.id()).unwrap();
    // SAFETY: signalling a child process we own.
    let rc = unsafe { libc::kill(pid, libc::SIGINT) };
    assert_eq!(rc, 0);

    let status = child.wait().unwrap();
    drop(stdin);
    assert!(status.success(), "status: {status:?}");
}
