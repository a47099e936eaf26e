//! End-to-end tests driving the compiled binary.

use predicates::str::contains;

mod common;
use common::{init_db_via_cli, setup_test_db, wl};

#[test]
fn init_creates_the_database() {
    let db_path = setup_test_db("cli_init");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database:"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn category_add_and_list() {
    let db_path = setup_test_db("cli_category");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "category", "--add", "Engineering"])
        .assert()
        .success()
        .stdout(contains("Category 'Engineering' registered"));

    wl().args(["--db", &db_path, "--test", "category", "--list"])
        .assert()
        .success()
        .stdout(contains("Engineering"));
}

#[test]
fn duplicate_category_fails_with_message() {
    let db_path = setup_test_db("cli_category_dup");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "category", "--add", "Engineering"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "--test", "category", "--add", "Engineering"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn job_add_requires_existing_category() {
    let db_path = setup_test_db("cli_job_missing_cat");
    init_db_via_cli(&db_path);

    wl().args([
        "--db", &db_path, "--test", "job", "--add", "Coding", "--category", "Nope",
    ])
    .assert()
    .failure()
    .stderr(contains("Category is specified, but not found"));
}

#[test]
fn job_add_and_list_renders_category_prefix() {
    let db_path = setup_test_db("cli_job_list");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "category", "--add", "Eng"])
        .assert()
        .success();
    wl().args([
        "--db", &db_path, "--test", "job", "--add", "Coding", "--category", "Eng",
    ])
    .assert()
    .success();

    wl().args(["--db", &db_path, "--test", "job", "--list"])
        .assert()
        .success()
        .stdout(contains("#1 Eng/Coding"));
}

#[test]
fn add_interval_and_log_shows_it() {
    let db_path = setup_test_db("cli_add_log");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "job", "--add", "Coding"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "1",
        "2025-01-10 09:00",
        "2025-01-10 10:30",
    ])
    .assert()
    .success()
    .stdout(contains("Interval registered"));

    wl().args(["--db", &db_path, "--test", "log", "2025-01-10"])
        .assert()
        .success()
        .stdout(contains("09:00 - 10:30 (#1 Coding)"));
}

#[test]
fn add_interval_rejects_cross_date() {
    let db_path = setup_test_db("cli_add_cross_date");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "job", "--add", "Coding"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "1",
        "2025-01-10 23:00",
        "2025-01-11 01:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Start and end must be same dates"));
}

#[test]
fn start_stop_round_trip() {
    let db_path = setup_test_db("cli_start_stop");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "job", "--add", "Coding"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "--test", "start", "1"])
        .assert()
        .success()
        .stdout(contains("Started record #1 on job #1"));

    // a second start on the same day must fail
    wl().args(["--db", &db_path, "--test", "start", "1"])
        .assert()
        .failure()
        .stderr(contains("is already started"));

    wl().args(["--db", &db_path, "--test", "stop", "1"])
        .assert()
        .success()
        .stdout(contains("Stopped record #1"));

    wl().args(["--db", &db_path, "--test", "stop", "1"])
        .assert()
        .failure()
        .stderr(contains("is already stopped"));
}

#[test]
fn note_set_and_show() {
    let db_path = setup_test_db("cli_note");
    init_db_via_cli(&db_path);

    wl().args([
        "--db",
        &db_path,
        "--test",
        "note",
        "2025-01-10",
        "--set",
        "reviewed the quarterly report",
    ])
    .assert()
    .success()
    .stdout(contains("Note saved for 2025-01-10"));

    wl().args(["--db", &db_path, "--test", "note", "2025-01-10"])
        .assert()
        .success()
        .stdout(contains("reviewed the quarterly report"));
}

#[test]
fn log_json_emits_day_report() {
    let db_path = setup_test_db("cli_log_json");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "job", "--add", "Coding"])
        .assert()
        .success();
    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "1",
        "2025-01-10 09:00",
        "2025-01-10 10:30",
    ])
    .assert()
    .success();

    wl().args(["--db", &db_path, "--test", "log", "2025-01-10", "--json"])
        .assert()
        .success()
        .stdout(contains("\"records\""))
        .stdout(contains("\"Coding\""));
}

#[test]
fn db_log_prints_audit_entries() {
    let db_path = setup_test_db("cli_db_log");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "category", "--add", "Engineering"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "--test", "db", "--log"])
        .assert()
        .success()
        .stdout(contains("category_register"));
}

#[test]
fn db_check_reports_ok() {
    let db_path = setup_test_db("cli_db_check");
    init_db_via_cli(&db_path);

    wl().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: ok"));
}
