use assert_cmd::Command;
use predicates::prelude::*;

fn helpers() -> Command {
    Command::cargo_bin("shell-helpers").unwrap()
}

#[test]
fn compare_prints_relation() {
    helpers()
        .args(["compare", "1.0", "1.0.1"])
        .assert()
        .success()
        .stdout("1.0 < 1.0.1\n");

    helpers()
        .args(["compare", "1.0.2.0", "1.0.2"])
        .assert()
        .success()
        .stdout("1.0.2.0 = 1.0.2\n");

    helpers()
        .args(["compare", "3.2.1.9.8144", "3.2"])
        .assert()
        .success()
        .stdout("3.2.1.9.8144 > 3.2\n");
}

#[test]
fn compare_rejects_malformed_version() {
    helpers()
        .args(["compare", "1..2", "1.0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed version '1..2'"));
}

#[test]
fn sort_orders_versions() {
    helpers()
        .args(["sort", "3.0.4.10", "3.0.4.2", "1.01", "0.9"])
        .assert()
        .success()
        .stdout("0.9\n1.01\n3.0.4.2\n3.0.4.10\n");
}

#[test]
fn duration_formats_seconds() {
    helpers()
        .args(["duration", "12345"])
        .assert()
        .success()
        .stdout("3 hours, 25 minutes & 45 seconds\n");

    helpers()
        .args(["duration", "-5"])
        .assert()
        .success()
        .stdout("unknown\n");
}

#[test]
fn ordinal_formats_each_number() {
    helpers()
        .args(["ordinal", "1", "12", "23"])
        .assert()
        .success()
        .stdout("1st\n12th\n23rd\n");
}

#[test]
fn which_reports_missing_commands() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    helpers()
        .args(["--path", temp_dir.path().to_str().unwrap(), "which", "flibble"])
        .assert()
        .success()
        .stdout("flibble = not installed\n");
}

#[cfg(unix)]
#[test]
fn exec_reports_status_and_output() {
    helpers()
        .args(["exec", "sh", "-c", "echo out; echo err >&2; exit 2"])
        .assert()
        .success()
        .stdout("Status: 2\nStdout: out\nStderr: err\n");
}

#[cfg(unix)]
#[test]
fn exec_json_output() {
    helpers()
        .args(["exec", "--json", "echo", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": 0"))
        .stdout(predicate::str::contains("\"stdout\": \"hi\""));
}

#[test]
fn missing_work_dir_fails() {
    helpers()
        .args(["--work-dir", "/nonexistent/dir/12345", "duration", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Working directory not found"));
}

#[cfg(unix)]
#[test]
fn exec_passes_helper_flag_names_to_the_child() {
    helpers()
        .args(["exec", "echo", "--debug", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stdout: --debug x\n"))
        .stderr(predicate::str::contains("DEBUG").not());

    helpers()
        .args(["exec", "echo", "--path", "x", "--work-dir", "y", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Stdout: --path x --work-dir y --json\n",
        ));
}
