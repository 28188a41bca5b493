#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pcl() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema (uses --test init so no config file is touched)
pub fn init_db(db_path: &str) {
    pcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one punch at an explicit timestamp
pub fn punch_at(db_path: &str, action: &str, at: &str) {
    pcl()
        .args(["--db", db_path, "--test", "punch", action, "--at", at])
        .assert()
        .success();
}

/// Configure the standard test rates (1000 normal / 1250 late-night)
pub fn set_rates(db_path: &str) {
    pcl()
        .args([
            "--db",
            db_path,
            "--test",
            "rate",
            "set",
            "--hourly",
            "1000",
            "--late-night",
            "1250",
        ])
        .assert()
        .success();
}

/// Initialize DB, set rates, and record a full worked day:
/// 09:00 in, 12:00-13:00 lunch break, 18:00 out on 2026-03-02 (8h active).
pub fn init_db_with_workday(db_path: &str) {
    init_db(db_path);
    set_rates(db_path);

    punch_at(db_path, "in", "2026-03-02 09:00");
    punch_at(db_path, "break", "2026-03-02 12:00");
    punch_at(db_path, "resume", "2026-03-02 13:00");
    punch_at(db_path, "out", "2026-03-02 18:00");
}
