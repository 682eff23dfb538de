//! Integration tests for the hclquill binary.
//!
//! These tests pipe a document into the compiled binary and check stdout,
//! stderr and the exit status.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn hclquill_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hclquill"))
}

/// Runs the binary with `input` on stdin and an empty HOME, so no user
/// config file is picked up.
fn run_with_stdin(input: &str, args: &[&str]) -> Output {
    let home = tempfile::tempdir().expect("failed to create temp HOME");
    let mut child = Command::new(hclquill_bin())
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to execute hclquill");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for hclquill")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end_matches('\n').to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// (input, args, expected stdout, expected stderr substring)
const GET_CASES: &[(&str, &[&str], &str, &str)] = &[
    ("a = 12", &["get", "a"], "12", ""),
    ("a = 12", &["get", "a[]"], "", "wrong type"),
    ("a = [12]", &["get", "a[]"], "[12]", ""),
    ("a = [12]", &["get", "a[0]"], "12", ""),
    (r#"a = ["a"]"#, &["get", "a[0]"], r#""a""#, ""),
    (r#"a = ["a"]"#, &["get", "-f", "raw", "a[0]"], "a", ""),
    (r#"a = ["a", "b"]"#, &["get", "a[]"], r#"["a","b"]"#, ""),
    (r#"a = ["a", "b"]"#, &["get", "-f", "raw", "a[]"], "a b", ""),
    ("a = [1, 2, 3]", &["get", "a[]"], "[1,2,3]", ""),
    ("a = [1, 2, 3]", &["get", "a[0]"], "1", ""),
    ("a = [1, 2, 3]", &["get", "a[1]"], "2", ""),
    ("a = [1, 2, 3]", &["get", "a[2]"], "3", ""),
    ("a = [1, 2, 3]", &["get", "a[-1]"], "3", ""),
    ("a = [1, 2, 3]", &["get", "a[5]"], "", "out of bounds"),
    ("a = [1, 2, 3]", &["get", "a[-6]"], "", "out of bounds"),
    ("a = []", &["get", "a[]"], "[]", ""),
    ("a = []", &["get", "a"], "", "wrong type"),
    (r#"a { b = "2" }"#, &["get", "a.b"], r#""2""#, ""),
    (r#"a { b = "2" }"#, &["get", "-f", "raw", "a.b"], "2", ""),
    (r#"a { b = "2a" }"#, &["get", "-f", "raw", "a.b"], "2a", ""),
    (r#"a "b" { c = [1] }"#, &["get", "a.b.c[]"], "[1]", ""),
];

#[test]
fn test_get_cases() {
    for (input, args, expected, err_text) in GET_CASES {
        let output = run_with_stdin(input, args);
        let label = format!("{:?} on {:?}", args, input);

        if err_text.is_empty() {
            assert!(
                output.status.success(),
                "{} should succeed, stderr: {}",
                label,
                stderr_of(&output)
            );
            assert!(output.stdout.ends_with(b"\n"), "{} should end with a newline", label);
        } else {
            assert!(!output.status.success(), "{} should fail", label);
            let stderr = stderr_of(&output);
            assert!(
                stderr.contains(err_text),
                "{} stderr should contain {:?}, got {:?}",
                label,
                err_text,
                stderr
            );
        }
        assert_eq!(stdout_of(&output), *expected, "{}", label);
    }
}

#[test]
fn test_invalid_query_fails() {
    let output = run_with_stdin("a = 1", &["get", "a[x]"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("invalid index"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_intermediate_name_fails() {
    let output = run_with_stdin("a = 1", &["get", "b.c"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("'b' not found"));
}

#[test]
fn test_missing_last_name_prints_empty_list() {
    let output = run_with_stdin("a { b = 1 }", &["get", "a.c"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "[]");
}

#[test]
fn test_boolean_elsewhere_in_document_is_tolerated() {
    let output = run_with_stdin("enabled = true\nport = 80", &["get", "port"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "80");
}

#[test]
fn test_invalid_document_fails() {
    let output = run_with_stdin("a = ", &["get", "a"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to parse document"));
}

#[test]
fn test_error_message_is_single_line() {
    let output = run_with_stdin("a = 12", &["get", "a[]"]);
    assert_eq!(stderr_of(&output).trim_end().lines().count(), 1);
}

#[test]
fn test_reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.hcl");
    std::fs::write(&path, "service \"web\" { ports = [80, 443] }").unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let output = run_with_stdin("", &["get", "-i", &path_arg, "service.web.ports[-1]"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "443");
}

#[test]
fn test_multiple_matches_print_as_list() {
    let input = r#"
        service "web" { port = 80 }
        service "api" { port = 9000 }
    "#;
    let output = run_with_stdin(input, &["get", "service.port"]);
    assert_eq!(stdout_of(&output), "[80,9000]");

    let raw = run_with_stdin(input, &["get", "--format", "raw", "service.port"]);
    assert_eq!(stdout_of(&raw), "80 9000");
}

#[test]
fn test_config_init_writes_defaults() {
    let home = tempfile::tempdir().unwrap();
    let run = |args: &[&str]| {
        Command::new(hclquill_bin())
            .args(args)
            .env("HOME", home.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute hclquill")
    };

    let output = run(&["config", "init"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let path = home.path().join(".config").join("hclquill").join("config.toml");
    assert_eq!(stdout_of(&output), path.to_string_lossy());
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("format = \"json\""));

    let again = run(&["config", "init"]);
    assert!(!again.status.success());
    assert!(stderr_of(&again).contains("already exists"));

    let forced = run(&["config", "init", "--force"]);
    assert!(forced.status.success(), "stderr: {}", stderr_of(&forced));
}

#[test]
fn test_version_flag() {
    let output = Command::new(hclquill_bin())
        .arg("--version")
        .output()
        .expect("failed to execute hclquill");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
