//! Runs the built `aliasing` binary.

use std::process::Command;

const FIXTURE: &str = "\
a = 1, b = 1
equal = true
== = true
------ after -------
a = 1, b = 2
equal = false
== = false


ma['a']=b, ma['b']=<absent>
mb['a']=b, mb['b']=<absent>
------ after ------

ma['a']=b, ma['b']=c
mb['a']=b, mb['b']=c


equal = true, true
== = true, false
";

fn aliasing() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aliasing"));
    // Keep the environment from changing stderr noise or output.
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_args_prints_fixture_and_exits_zero() {
    let output = aliasing().output().expect("spawn aliasing");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout, FIXTURE);
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let quiet = aliasing().output().expect("spawn aliasing");
    let noisy = aliasing()
        .env("RUST_LOG", "debug")
        .output()
        .expect("spawn aliasing");

    assert!(noisy.status.success());
    assert_eq!(quiet.stdout, noisy.stdout);
    assert!(!noisy.stderr.is_empty());
}

#[test]
fn list_names_every_demo() {
    let output = aliasing().arg("list").output().expect("spawn aliasing");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    for name in ["boxed-number", "string-map", "handle-slots"] {
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn unknown_demo_exits_one() {
    let output = aliasing()
        .args(["run", "linked-list"])
        .output()
        .expect("spawn aliasing");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Unknown demo"));
    assert!(stderr.contains("aliasing list"));
}

#[test]
fn missing_config_file_exits_one_without_hint() {
    let output = aliasing()
        .args(["run", "--config", "/nonexistent/aliasing.yaml"])
        .output()
        .expect("spawn aliasing");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("I/O error"));
    assert!(!stderr.contains("hint:"));
}

#[test]
fn misspelled_run_flag_shows_help_instead_of_running() {
    let output = aliasing()
        .args(["run", "--jsno"])
        .output()
        .expect("spawn aliasing");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.starts_with("aliasing - "));
    assert!(!stdout.contains("a = 1, b = 1"));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("--jsno"));
}

#[test]
fn version_prints_package_version() {
    let output = aliasing().arg("--version").output().expect("spawn aliasing");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.starts_with(&format!("aliasing {}", env!("CARGO_PKG_VERSION"))));
}
