//! End-to-end tests for the smart-crypto-lab binary.
//!
//! These run the compiled binary and check exit status, files, and streams.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use smart_crypto_lab::utils::transform;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smart-crypto-lab"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn run_with_stdin(mut cmd: Command, stdin: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin)
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for binary")
}

#[test]
fn test_file_to_file_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.sha256");
    std::fs::write(&input, b"hello world\n").expect("Failed to write input");

    let result = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .expect("Failed to run binary");

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let written = std::fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(written, transform(b"hello world\n", &input.display().to_string()));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Starting SmartCryptoLab"));
    assert!(stderr.contains("Processing completed successfully"));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_stdin_to_stdout() {
    let output = run_with_stdin(bin(), b"abc");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  -\n"
    );
}

#[test]
fn test_verbose_emits_debug_lines() {
    let mut cmd = bin();
    cmd.arg("--verbose");
    let output = run_with_stdin(cmd, b"abc");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "stderr: {stderr}");
    assert!(stderr.contains("Hashed input"), "stderr: {stderr}");
}

#[test]
fn test_quiet_run_has_no_debug_lines() {
    let output = run_with_stdin(bin(), b"abc");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("DEBUG"), "stderr: {stderr}");
}

#[test]
fn test_failure_exits_non_zero_and_prints_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("missing.txt");
    let output = temp_dir.path().join("out.sha256");

    let result = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .expect("Failed to run binary");

    assert!(!result.status.success());
    assert_ne!(result.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Processing failed: failed to read"), "stderr: {stderr}");
    assert!(stderr.contains("Error: failed to read"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn test_output_through_missing_directory_cannot_overwrite_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("x");
    let output = temp_dir.path().join("sub").join("..").join("x");
    std::fs::write(&input, b"a").expect("Failed to write input");

    let result = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .expect("Failed to run binary");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("refusing to overwrite input file"), "stderr: {stderr}");
    assert_eq!(std::fs::read(&input).expect("Failed to read input"), b"a");
}

#[test]
fn test_failure_prints_os_error_once() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = bin()
        .arg("-i")
        .arg(temp_dir.path().join("missing.txt"))
        .arg("-o")
        .arg(temp_dir.path().join("out.sha256"))
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE")
        .output()
        .expect("Failed to run binary");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Caused by"), "stderr: {stderr}");
    assert_eq!(stderr.matches("os error 2").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_unknown_flag_exits_non_zero() {
    let result = bin().arg("--bogus").output().expect("Failed to run binary");
    assert!(!result.status.success());
}
