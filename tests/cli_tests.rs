use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, pt, setup_test_db};

#[test]
fn test_init_creates_store() {
    let db_path = setup_test_db("cli_init");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store initialized"));
}

#[test]
fn test_list_shows_bootstrap_records() {
    let db_path = setup_test_db("cli_list_bootstrap");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Project records"))
        .stdout(contains("Aurora Home redesign"))
        .stdout(contains("Peak Gear speed audit"))
        .stdout(contains("Overdue"));
}

#[test]
fn test_add_and_list_new_record() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_data(&db_path);

    pt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Orbit landing page"))
        .stdout(contains("Orbit Labs"));
}

#[test]
fn test_add_with_future_deadline_shows_deadline_badge() {
    let db_path = setup_test_db("cli_future_deadline");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "--project",
        "Evergreen support",
        "--client",
        "Evergreen",
        "--start",
        "2025-01-01",
        "--end",
        "2099-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("Entry added for project 'Evergreen support'"));

    pt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Deadline in"));
}

#[test]
fn test_add_missing_required_fields_is_rejected() {
    let db_path = setup_test_db("cli_add_rejected");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "--project",
        "Half-filled form",
    ])
    .assert()
    .failure()
    .stderr(contains("Client name is required"))
    .stderr(contains("Start Date is required"))
    .stderr(contains("End Date is required"));

    // Rejected submission must not have touched the collection.
    pt().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Half-filled form").not());
}

#[test]
fn test_edit_field_and_show() {
    let db_path = setup_test_db("cli_edit_show");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args(["--db", &db_path, "--test", "edit", "0", "status", "Completed"])
        .assert()
        .success()
        .stdout(contains("status updated for record 0"));

    pt().args(["--db", &db_path, "--test", "show", "0"])
        .assert()
        .success()
        .stdout(contains("Completed"));
}

#[test]
fn test_edit_date_field_takes_view_format() {
    let db_path = setup_test_db("cli_edit_date");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args([
        "--db", &db_path, "--test", "edit", "0", "endDate", "2099-01-15",
    ])
    .assert()
    .success();

    // Stored day-first, shown day-first.
    pt().args(["--db", &db_path, "--test", "show", "0"])
        .assert()
        .success()
        .stdout(contains("15/01/2099"))
        .stdout(contains("2099-01-15").not());
}

#[test]
fn test_edit_unknown_field_fails() {
    let db_path = setup_test_db("cli_edit_unknown");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args(["--db", &db_path, "--test", "edit", "0", "deadline", "x"])
        .assert()
        .failure()
        .stderr(contains("Unknown field"));
}

#[test]
fn test_edit_out_of_range_index_fails() {
    let db_path = setup_test_db("cli_edit_oob");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args(["--db", &db_path, "--test", "edit", "99", "status", "Completed"])
        .assert()
        .failure()
        .stderr(contains("Invalid record index: 99"));
}

#[test]
fn test_login_with_seeded_credentials() {
    let db_path = setup_test_db("cli_login_ok");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "--email",
        "admin@company.com",
        "--password",
        "admin123",
    ])
    .assert()
    .success()
    .stdout(contains("Welcome back"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let db_path = setup_test_db("cli_login_bad");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args([
        "--db",
        &db_path,
        "--test",
        "login",
        "--email",
        "admin@company.com",
        "--password",
        "nope",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid email or password"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    pt().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_show_out_of_range_index_fails() {
    let db_path = setup_test_db("cli_show_oob");

    pt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pt().args(["--db", &db_path, "--test", "show", "42"])
        .assert()
        .failure()
        .stderr(contains("Invalid record index: 42"));
}
