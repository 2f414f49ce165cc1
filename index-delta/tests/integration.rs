use std::{
    io::Write,
    process::{Command, Output},
};

use asserting::prelude::*;
use tempfile::NamedTempFile;

fn log_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create log file");
    file.write_all(body.as_bytes()).expect("Failed to write log file");
    file
}

fn index_delta(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_index-delta"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run index-delta")
}

fn index_delta_in_new_york(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_index-delta"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("TZ", "America/New_York")
        .output()
        .expect("Failed to run index-delta")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn reports_gaps_for_matching_requests() {
    let log = log_file(
        "Processing ObserverController#index (for 127.0.0.1 at 2021-06-23 10:15:00)\n\
         Something else\n\
         Processing ObserverController#index (for 127.0.0.1 at 2021-06-23 10:10:00)\n",
    );
    let output = index_delta(&["--log-path", log.path().to_str().unwrap()]);

    assert_that!(output.status.success()).is_true();
    let lines = stdout_lines(&output);
    assert_that!(lines.len()).is_equal_to(2);
    // first gap is measured against the current clock
    let since_last: i64 = lines[0].parse().expect("numeric delta");
    assert_that!(since_last > 0).is_true();
    assert_that!(lines[1].as_str()).is_equal_to("-300");
}

#[test]
fn verbose_format_renders_endpoints() {
    let log = log_file(
        "Processing ObserverController#index (for 127.0.0.1 at 2021-06-23 10:10:00)\n\
         Processing ObserverController#index (for 127.0.0.1 at 2021-06-23 10:15:00)\n",
    );
    let output = index_delta(&[
        "--log-path",
        log.path().to_str().unwrap(),
        "--format",
        "verbose",
    ]);

    assert_that!(output.status.success()).is_true();
    let lines = stdout_lines(&output);
    assert_that!(lines.len()).is_equal_to(2);
    assert_that!(lines[0].ends_with(", Wed Jun 23 10:15:00 2021")).is_true();
    assert_that!(lines[1].as_str())
        .is_equal_to("300: Wed Jun 23 10:15:00 2021, Wed Jun 23 10:10:00 2021");
}

#[test]
fn client_ip_selects_deployment() {
    let log = log_file(
        "Processing ObserverController#index (for 127.0.0.1 at 2021-06-23 10:10:00)\n\
         Processing ObserverController#index (for 10.1.2.3 at 2021-06-23 10:15:00)\n",
    );
    let output = index_delta(&[
        "--log-path",
        log.path().to_str().unwrap(),
        "--client-ip",
        "10.1.2.3",
    ]);

    assert_that!(output.status.success()).is_true();
    assert_that!(stdout_lines(&output).len()).is_equal_to(1);
}

#[test]
fn no_matches_exits_cleanly() {
    let log = log_file("Started GET \"/\" for 127.0.0.1\nSomething else\n");
    let output = index_delta(&["--log-path", log.path().to_str().unwrap()]);

    assert_that!(output.status.success()).is_true();
    assert_that!(output.stdout).is_empty();
}

#[test]
fn missing_log_fails() {
    let output = index_delta(&["--log-path", "/nonexistent/production.log"]);

    assert_that!(output.status.success()).is_false();
    assert_that!(output.stdout).is_empty();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_that!(stderr.contains("/nonexistent/production.log")).is_true();
}

#[test]
fn pattern_without_capture_fails() {
    let log = log_file("Processing ObserverController#index\n");
    let output = index_delta(&[
        "--log-path",
        log.path().to_str().unwrap(),
        "--pattern",
        "ObserverController#index",
    ]);

    assert_that!(output.status.success()).is_false();
}

#[test]
fn time_in_dst_gap_fails() {
    let log = log_file(
        "Processing ObserverController#index (for 127.0.0.1 at 2021-03-14 02:30:00)\n",
    );
    let output = index_delta_in_new_york(&["--log-path", log.path().to_str().unwrap()]);

    assert_that!(output.status.success()).is_false();
    assert_that!(output.stdout).is_empty();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_that!(stderr.contains("does not exist in local time")).is_true();
}

#[test]
fn repeated_hour_resolves_to_earlier_instant() {
    // 01:30 occurs twice on 2021-11-07; the first one is 3600s after 00:30
    let log = log_file(
        "Processing ObserverController#index (for 127.0.0.1 at 2021-11-07 00:30:00)\n\
         Processing ObserverController#index (for 127.0.0.1 at 2021-11-07 01:30:00)\n",
    );
    let output = index_delta_in_new_york(&["--log-path", log.path().to_str().unwrap()]);

    assert_that!(output.status.success()).is_true();
    let lines = stdout_lines(&output);
    assert_that!(lines.len()).is_equal_to(2);
    assert_that!(lines[1].as_str()).is_equal_to("3600");
}
