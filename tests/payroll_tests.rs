use predicates::str::contains;

mod common;
use common::{init_db, pcl, punch_at, set_rates, setup_test_db};

#[test]
fn test_monthly_payroll_full_day() {
    let db_path = setup_test_db("payroll_full_day");
    common::init_db_with_workday(&db_path);

    pcl()
        .args(["--db", &db_path, "--test", "payroll", "--period", "2026-03"])
        .assert()
        .success()
        .stdout(contains("Normal hours:     8.00"))
        .stdout(contains("8,000"));
}

#[test]
fn test_monthly_payroll_json_output() {
    let db_path = setup_test_db("payroll_json");
    common::init_db_with_workday(&db_path);

    pcl()
        .args([
            "--db",
            &db_path,
            "--test",
            "payroll",
            "--period",
            "2026-03",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"totalPay\": 8000"))
        .stdout(contains("\"totalNormalHours\": 8.0"))
        .stdout(contains("\"totalLateNightHours\": 0.0"));
}

#[test]
fn test_payroll_requires_configured_rates() {
    let db_path = setup_test_db("payroll_no_rates");
    init_db(&db_path);

    punch_at(&db_path, "in", "2026-03-02 09:00");
    punch_at(&db_path, "out", "2026-03-02 17:00");

    pcl()
        .args(["--db", &db_path, "--test", "payroll", "--period", "2026-03"])
        .assert()
        .failure()
        .stderr(contains("not configured"));
}

#[test]
fn test_payroll_overnight_session_with_premium() {
    let db_path = setup_test_db("payroll_overnight");
    init_db(&db_path);
    set_rates(&db_path);

    // 21:00 → 01:00: 1h normal + 3h late-night = 1000 + 3750
    punch_at(&db_path, "in", "2026-03-02 21:00");
    punch_at(&db_path, "out", "2026-03-03 01:00");

    pcl()
        .args([
            "--db",
            &db_path,
            "--test",
            "payroll",
            "--period",
            "2026-03",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"totalPay\": 4750"))
        .stdout(contains("\"totalLateNightHours\": 3.0"));
}

#[test]
fn test_payroll_excludes_unterminated_sessions() {
    let db_path = setup_test_db("payroll_unterminated");
    init_db(&db_path);
    set_rates(&db_path);

    punch_at(&db_path, "in", "2026-03-02 09:00");
    punch_at(&db_path, "out", "2026-03-02 17:00");
    punch_at(&db_path, "in", "2026-03-03 09:00"); // never clocked out

    pcl()
        .args([
            "--db",
            &db_path,
            "--test",
            "payroll",
            "--period",
            "2026-03",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"totalPay\": 8000"));
}

#[test]
fn test_payroll_window_captures_month_end_overnight_session() {
    let db_path = setup_test_db("payroll_month_end");
    init_db(&db_path);
    set_rates(&db_path);

    // starts 31 Mar 23:00, ends 1 Apr 03:00 — still March's payroll
    punch_at(&db_path, "in", "2026-03-31 23:00");
    punch_at(&db_path, "out", "2026-04-01 03:00");

    pcl()
        .args([
            "--db",
            &db_path,
            "--test",
            "payroll",
            "--period",
            "2026-03",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"totalPay\": 5000")) // 4h late-night at 1250
        .stdout(contains("\"totalLateNightHours\": 4.0"));
}

#[test]
fn test_rate_set_rejects_non_positive_values() {
    let db_path = setup_test_db("rate_reject");
    init_db(&db_path);

    pcl()
        .args([
            "--db",
            &db_path,
            "--test",
            "rate",
            "set",
            "--hourly",
            "0",
            "--late-night",
            "1250",
        ])
        .assert()
        .failure()
        .stderr(contains("must be positive"));
}

#[test]
fn test_rate_show_after_set() {
    let db_path = setup_test_db("rate_show");
    init_db(&db_path);
    set_rates(&db_path);

    pcl()
        .args(["--db", &db_path, "--test", "rate", "show"])
        .assert()
        .success()
        .stdout(contains("1000"))
        .stdout(contains("1250"));
}
