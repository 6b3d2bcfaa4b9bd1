use assert_cmd::Command;
use predicates::prelude::*;

fn reading_sync() -> Command {
    let mut cmd = Command::cargo_bin("reading-sync").unwrap();
    // Keep the test hermetic even when a .env or shell exports exist.
    cmd.env_remove("SUPABASE_URL").env_remove("SUPABASE_SERVICE_KEY");
    cmd
}

#[test]
fn test_no_arguments_prints_usage_on_stdout_and_exits_1() {
    reading_sync()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_exits_1() {
    reading_sync()
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_sync_with_missing_file_argument_exits_1() {
    reading_sync()
        .args(["sync", "user-1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_0() {
    reading_sync()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_unparseable_rust_log_falls_back_to_default_filter() {
    reading_sync()
        .env("RUST_LOG", "]]not a directive[[")
        .arg("--help")
        .assert()
        .code(0);
}

#[test]
fn test_missing_credentials_are_fatal() {
    reading_sync()
        .args(["stats", "user-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SUPABASE_URL"));
}
