use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ADMIN, Sandbox, WORKER};

fn punch(sb: &Sandbox, who: &str, action: &str, at: &str) -> assert_cmd::assert::Assert {
    let mut cmd = if who == ADMIN {
        sb.as_admin()
    } else {
        sb.as_worker()
    };
    cmd.args(["punch", action, "--at", at]).assert()
}

#[test]
fn init_creates_config_users_and_data_dir() {
    let sb = Sandbox::new();
    sb.pc()
        .args(["init", "--admin", ADMIN, "--admin-password", "pw"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(sb.home.path().join(".punchclock/punchclock.conf").exists());
    assert!(sb.data_dir().is_dir());
    let users = fs::read_to_string(sb.users_file()).unwrap();
    assert!(users.contains("sha256:"));
    assert!(!users.contains("\"pw\""));
}

#[test]
fn test_mode_does_not_write_the_config_file() {
    let sb = Sandbox::new();
    sb.pc().args(["--test", "init"]).assert().success();
    assert!(!sb.home.path().join(".punchclock/punchclock.conf").exists());
    assert_eq!(fs::read_to_string(sb.users_file()).unwrap().trim(), "[]");
}

#[test]
fn full_day_totals_hours() {
    let sb = Sandbox::new();
    sb.init();

    punch(&sb, WORKER, "clock-in", "2025-01-06 09:00").success();
    punch(&sb, WORKER, "start-lunch", "2025-01-06 12:00").success();
    punch(&sb, WORKER, "end-lunch", "2025-01-06 12:30").success();
    punch(&sb, WORKER, "clock-out", "2025-01-06 17:00")
        .success()
        .stdout(contains("Clock Out recorded"));

    sb.as_worker()
        .args(["hours", "--date", "2025-01-10"])
        .assert()
        .success()
        .stdout(contains("2025-01-05"))
        .stdout(contains("2025-01-18"))
        .stdout(contains("Total Hours: 7.50"))
        .stdout(contains("07h 30m"));
}

#[test]
fn break_time_counts_towards_hours() {
    let sb = Sandbox::new();
    sb.init();

    punch(&sb, WORKER, "clock-in", "2025-01-06 09:00").success();
    punch(&sb, WORKER, "start-break", "2025-01-06 10:00").success();
    punch(&sb, WORKER, "end-break", "2025-01-06 10:15").success();
    punch(&sb, WORKER, "clock-out", "2025-01-06 13:00").success();

    sb.as_worker()
        .args(["hours", "--date", "2025-01-06"])
        .assert()
        .success()
        .stdout(contains("Total Hours: 4.25"));
}

#[test]
fn gating_rejects_actions_not_available_now() {
    let sb = Sandbox::new();
    sb.init();

    punch(&sb, WORKER, "clock-out", "2025-01-06 09:00")
        .failure()
        .stderr(contains("Cannot Clock Out now"));
    punch(&sb, WORKER, "clock-in", "2025-01-06 09:00").success();
    punch(&sb, WORKER, "clock-in", "2025-01-06 09:05")
        .failure()
        .stderr(contains("last punch: Clock In"));
    punch(&sb, WORKER, "start-lunch", "2025-01-06 12:00").success();
    punch(&sb, WORKER, "start-break", "2025-01-06 12:10")
        .failure()
        .stderr(contains("Cannot Start Break now"));
}

#[test]
fn status_shows_panel_and_last_punch() {
    let sb = Sandbox::new();
    sb.init();

    sb.as_worker()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Morty, please select a function."))
        .stdout(contains("[ Clock In ]"))
        .stdout(contains("Last punch: None"));

    punch(&sb, WORKER, "clock-in", "2025-01-06 09:00").success();
    punch(&sb, WORKER, "start-lunch", "2025-01-06 12:00").success();

    sb.as_worker()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("[ End Lunch ]"))
        .stdout(contains("[ Start Break ]"))
        .stdout(contains("Start Lunch"));
}

#[test]
fn wrong_password_is_rejected() {
    let sb = Sandbox::new();
    sb.init();

    sb.as_user(WORKER, "nope")
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));
}

#[test]
fn forcing_requires_admin() {
    let sb = Sandbox::new();
    sb.init();

    sb.as_worker()
        .args(["punch", "clock-out", "--at", "2025-01-06 09:00", "--force"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    sb.as_admin()
        .args(["punch", "clock-out", "--at", "2025-01-06 09:00", "--force"])
        .assert()
        .success();
}

#[test]
fn invalid_punches_are_marked_and_admin_can_delete_them() {
    let sb = Sandbox::new();
    sb.init();

    punch(&sb, ADMIN, "clock-in", "2025-01-06 09:00").success();
    sb.as_admin()
        .args(["punch", "clock-in", "--at", "2025-01-06 10:00", "--force"])
        .assert()
        .success();
    punch(&sb, ADMIN, "clock-out", "2025-01-06 17:00").success();

    sb.as_admin()
        .args(["hours", "--date", "2025-01-06"])
        .assert()
        .success()
        .stdout(contains("⚠"))
        .stdout(contains("Total Hours: 7.00"));

    sb.as_worker()
        .args(["del", "1", "--date", "2025-01-06", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    sb.as_admin()
        .args(["del", "2", "--date", "2025-01-06", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted Clock In"));

    sb.as_admin()
        .args(["hours", "--date", "2025-01-06"])
        .assert()
        .success()
        .stdout(contains("⚠").not())
        .stdout(contains("Total Hours: 8.00"));

    sb.as_admin()
        .args(["del", "9", "--date", "2025-01-06", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch index: 9"));
}

#[test]
fn broken_records_are_skipped_with_a_warning() {
    let sb = Sandbox::new();
    sb.init();

    punch(&sb, WORKER, "clock-in", "2025-01-06 09:00").success();
    punch(&sb, WORKER, "clock-out", "2025-01-06 11:00").success();

    let path = sb.punch_file(WORKER);
    let mut raw: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    raw.push(serde_json::json!({"timestamp": 1, "label": "Siesta"}));
    fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

    sb.as_worker()
        .args(["hours", "--date", "2025-01-06"])
        .assert()
        .success()
        .stdout(contains("Skipping stored punch"))
        .stdout(contains("Total Hours: 2.00"));
}

#[test]
fn audit_log_records_mutations() {
    let sb = Sandbox::new();
    sb.init();
    punch(&sb, WORKER, "clock-in", "2025-01-06 09:00").success();

    sb.pc()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("punch"))
        .stdout(contains("Clock In"));
}

#[test]
fn hash_password_prints_stored_form() {
    let sb = Sandbox::new();
    sb.pc()
        .args(["hash-password", "abc"])
        .assert()
        .success()
        .stdout(contains(
            "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

#[test]
fn dates_at_the_end_of_the_calendar_are_rejected() {
    let sb = Sandbox::new();
    sb.init();

    sb.as_worker()
        .args(["hours", "--date", "+262142-12-31"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: +262142-12-31"));
}
