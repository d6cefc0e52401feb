//! Runs the built binary so env vars only touch the child process.

use std::process::{Command, Output};

use vespa_cli::constants::{ENV_COLOR, ENV_DEBUG, ENV_TARGET};

fn vespa(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_vespa"));
    command
        .args(args)
        .env_remove(ENV_TARGET)
        .env_remove(ENV_COLOR)
        .env_remove(ENV_DEBUG)
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("run vespa")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_target_from_env() {
    let output = vespa(
        &["status", "--color", "never"],
        &[(ENV_TARGET, "not-a-url")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output).starts_with("Error: Invalid target 'not-a-url'"),
        "{}",
        stdout(&output)
    );
}

#[test]
fn test_target_flag_overrides_env() {
    let output = vespa(
        &["status", "deploy", "-t", "also-not-a-url", "--color", "never"],
        &[(ENV_TARGET, "http://127.0.0.1:1")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output).starts_with("Error: Invalid target 'also-not-a-url'"),
        "{}",
        stdout(&output)
    );
}

#[test]
fn test_color_from_env() {
    let output = vespa(&["status", "-t", "nowhere"], &[(ENV_COLOR, "always")]);
    assert!(
        stdout(&output).starts_with("\x1b[31mError: Invalid target 'nowhere'"),
        "{}",
        stdout(&output)
    );

    let output = vespa(&["status", "-t", "nowhere"], &[(ENV_COLOR, "never")]);
    assert!(!stdout(&output).contains('\x1b'), "{}", stdout(&output));
}

#[test]
fn test_color_flag_overrides_env() {
    let output = vespa(
        &["status", "-t", "nowhere", "--color", "never"],
        &[(ENV_COLOR, "always")],
    );
    assert!(!stdout(&output).contains('\x1b'), "{}", stdout(&output));
}

#[test]
fn test_debug_from_env() {
    // nothing listens on port 1, so this fails fast without leaving the machine
    let output = vespa(
        &["status", "query", "-t", "http://127.0.0.1:1", "--color", "never"],
        &[(ENV_DEBUG, "true")],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Checking Query API at http://127.0.0.1:1/ApplicationStatus"),
        "{stderr}"
    );
    assert!(
        stdout(&output).starts_with("Query API at http://127.0.0.1:1 is not ready\n"),
        "{}",
        stdout(&output)
    );
}

#[test]
fn test_no_debug_output_by_default() {
    let output = vespa(
        &["status", "query", "-t", "http://127.0.0.1:1", "--color", "never"],
        &[],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Checking Query API"), "{stderr}");
}
