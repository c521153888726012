#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pt() -> Command {
    cargo_bin_cmd!("projtrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_projtrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the store and add one complete record useful for many tests
pub fn init_db_with_data(db_path: &str) {
    pt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pt().args([
        "--db",
        db_path,
        "add",
        "--project",
        "Orbit landing page",
        "--client",
        "Orbit Labs",
        "--start",
        "2025-09-01",
        "--end",
        "2025-09-30",
    ])
    .assert()
    .success();
}
