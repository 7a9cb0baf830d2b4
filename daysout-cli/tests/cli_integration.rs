//! Integration tests for the daysout CLI

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Runs the binary with `HOME` pointed at `home` so no user config leaks in.
fn run_daysout(home: &Path, args: &[&str], envs: &[(&str, &str)]) -> (String, String, bool) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_daysout"));
    cmd.args(args)
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("DAYSOUT_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let output = cmd.output().expect("Failed to execute daysout");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn write_travel_file(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("travel.txt");
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join(".config").join("daysout");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

const SAMPLE: &str = "\
27 Dec 2024 - 12/01/2025
1 Nov 2023 - 1 Nov 2023
02/11/2023 - 3 November 2023
5 Nov 2023 - 7 Nov 2023
7 Nov 2023 - 14 Nov 2023
";

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    let (stdout, _, success) = run_daysout(home.path(), &["--help"], &[]);

    assert!(success);
    assert!(stdout.contains("--file"));
    assert!(stdout.contains("-f"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    let (stdout, _, success) = run_daysout(home.path(), &["--version"], &[]);

    assert!(success);
    assert!(stdout.contains("daysout"));
}

#[test]
fn test_file_is_required() {
    let home = TempDir::new().unwrap();
    let (_, stderr, success) = run_daysout(home.path(), &[], &[]);

    assert!(!success);
    assert!(stderr.contains("--file"));
}

#[test]
fn test_all_dates_report_is_sorted_with_totals() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, SAMPLE);
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(success, "stderr: {stderr}");
    let all_dates = stdout
        .split("PAST YEAR DATES:")
        .next()
        .expect("all dates section");
    assert!(all_dates.starts_with("ALL DATES:\n"));
    let expected_table = "\
| Start Date  | End Date    | Total Days Outside | Full Days Outside |
| 01 Nov 2023 | 01 Nov 2023 |                  1 |                 0 |
| 02 Nov 2023 | 03 Nov 2023 |                  2 |                 0 |
| 05 Nov 2023 | 07 Nov 2023 |                  3 |                 1 |
| 07 Nov 2023 | 14 Nov 2023 |                  8 |                 6 |
| 27 Dec 2024 | 12 Jan 2025 |                 17 |                15 |
";
    assert!(all_dates.contains(expected_table), "got:\n{all_dates}");
    assert!(all_dates.contains("Total Days Outside: 31\n"));
    assert!(all_dates.contains("Full Days Outside: 22\n"));
}

#[test]
fn test_old_trips_are_outside_past_year() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, "1 Jan 2000 - 10 Jan 2000\n");
    let (stdout, _, success) = run_daysout(home.path(), &["--file", &file], &[]);

    assert!(success);
    let past_year = stdout
        .split("PAST YEAR DATES:")
        .nth(1)
        .expect("past year section");
    assert!(!past_year.contains("2000"));
    assert!(past_year.contains("Total Days Outside: 0\n"));
    assert!(past_year.contains("Full Days Outside: 0\n"));
}

#[test]
fn test_file_from_environment() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, "1 Jan 2000 - 1 Jan 2000\n");
    let (stdout, _, success) = run_daysout(home.path(), &[], &[("DAYSOUT_FILE", &file)]);

    assert!(success);
    assert!(stdout.contains("01 Jan 2000"));
}

#[test]
fn test_invalid_interval_fails_without_report() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(
        &home,
        "1 Nov 2023 - 2 Nov 2023\n31/12/2023 - 1 Nov 2023\n",
    );
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("31/12/2023 - 1 Nov 2023"));
    assert!(stderr.contains("is after"));
}

#[test]
fn test_bad_date_names_the_text() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, "1 Jan 2023 - 2023/01/05\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 1"));
    assert!(stderr.contains("'2023/01/05'"));
    assert!(stderr.contains("Supported formats"));
}

#[test]
fn test_iso_dates_are_malformed_lines() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, "2023-01-01 - 2023-01-02\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("expected exactly one '-'"));
}

#[test]
fn test_blank_line_is_rejected() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, "1 Jan 2023 - 2 Jan 2023\n\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_missing_file_names_the_path() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.txt").display().to_string();
    let (_, stderr, success) = run_daysout(home.path(), &["-f", &missing], &[]);

    assert!(!success);
    assert!(stderr.contains(&missing));
}

#[test]
fn test_home_label_from_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "home = \"UK\"\n");
    let file = write_travel_file(&home, "5 Nov 2023 - 7 Nov 2023\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(success, "stderr: {stderr}");
    assert!(stdout.contains("| Total Days Outside UK | Full Days Outside UK |"));
    assert!(stdout.contains("Total Days Outside UK: 3\n"));
}

#[test]
fn test_collect_all_reports_every_bad_line() {
    let home = TempDir::new().unwrap();
    write_config(&home, "error_policy = \"collect-all\"\n");
    let file = write_travel_file(
        &home,
        "nonsense\n1 Nov 2023 - 2 Nov 2023\n5 Nov 2023 - 1 Nov 2023\n",
    );
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 1"));
    assert!(stderr.contains("line 3"));
    assert!(stderr.contains("2 invalid line(s)"));
}

#[test]
fn test_bad_config_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "window_days = 0\n");
    let file = write_travel_file(&home, "5 Nov 2023 - 7 Nov 2023\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("config.toml"));
    assert!(stderr.contains("window_days"));
}

#[test]
fn test_huge_window_keeps_every_trip() {
    let home = TempDir::new().unwrap();
    write_config(&home, "window_days = 1000000000\n");
    let file = write_travel_file(&home, "1 Jan 2000 - 10 Jan 2000\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(success, "stderr: {stderr}");
    let past_year = stdout
        .split("PAST YEAR DATES:")
        .nth(1)
        .expect("past year section");
    assert!(past_year.contains("| 01 Jan 2000 | 10 Jan 2000 |"));
    assert!(past_year.contains("Total Days Outside: 10\n"));
}

#[test]
fn test_time_fields_in_date_format_are_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "date_format = \"%d %b %Y %H:%M\"\n");
    let file = write_travel_file(&home, "5 Nov 2023 - 7 Nov 2023\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("daysout: "));
    assert!(stderr.contains("date_format"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_plain_report_layout() {
    let home = TempDir::new().unwrap();
    let file = write_travel_file(&home, "5 Nov 2023 - 7 Nov 2023\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(success, "stderr: {stderr}");
    let banner = "=".repeat(55);
    let expected = format!(
        "\
ALL DATES:
{banner}

| Start Date  | End Date    | Total Days Outside | Full Days Outside |
| 05 Nov 2023 | 07 Nov 2023 |                  3 |                 1 |

Total Days Outside: 3
Full Days Outside: 1

{banner}

PAST YEAR DATES:
{banner}

| Start Date | End Date | Total Days Outside | Full Days Outside |

Total Days Outside: 0
Full Days Outside: 0

{banner}

"
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_color_always_prints_styled_report() {
    let home = TempDir::new().unwrap();
    write_config(&home, "color = \"always\"\n");
    let file = write_travel_file(&home, "5 Nov 2023 - 7 Nov 2023\n");
    let (stdout, stderr, success) = run_daysout(home.path(), &["-f", &file], &[]);

    assert!(success, "stderr: {stderr}");
    assert!(stdout.contains("\x1b["));
    assert!(stdout.contains("ALL DATES:"));
    assert!(stdout.contains("PAST YEAR DATES:"));
    assert!(stdout.contains("05 Nov 2023"));
    assert!(stdout.contains("Total Days Outside: 3"));
}
