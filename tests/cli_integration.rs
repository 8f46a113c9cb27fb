//! CLI smoke tests for the `helpdesk` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn helpdesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("helpdesk").expect("binary exists");
    cmd.arg("--dir")
        .arg(dir.path().join(".helpdesk"))
        .arg("--no-color");
    cmd
}

fn setup(dir: &TempDir) {
    helpdesk(dir).args(["init", "--name", "Test Desk"]).assert().success();
    helpdesk(dir)
        .args([
            "--as", "admin", "user", "add", "alice", "--email", "alice@corp.example",
        ])
        .assert()
        .success();
    helpdesk(dir)
        .args([
            "--as", "admin", "user", "add", "tech1", "--email", "tech1@corp.example",
            "--role", "technician",
        ])
        .assert()
        .success();
}

/// File a ticket as `username` and return its id from the JSON output.
fn file_ticket(dir: &TempDir, username: &str, title: &str) -> String {
    let output = helpdesk(dir)
        .args([
            "--as", username, "--json", "new", "--title", title, "--description",
            "created by cli test", "--urgency", "HIGH", "--category", "OTHER",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success(), "new failed: {output:?}");
    let ticket: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("new --json emits a ticket");
    ticket["id"].as_str().expect("ticket has an id").to_string()
}

#[test]
fn init_creates_store_and_refuses_to_reinit() {
    let dir = TempDir::new().unwrap();

    helpdesk(&dir)
        .args(["init", "--name", "Test Desk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));
    assert!(dir.path().join(".helpdesk/config.yaml").exists());

    helpdesk(&dir).arg("init").assert().failure();
}

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();

    helpdesk(&dir)
        .args(["--as", "admin", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn ticket_lifecycle_through_the_cli() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    let id = file_ticket(&dir, "alice", "VPN drops every hour");

    helpdesk(&dir)
        .args(["--as", "tech1", "take", &id])
        .assert()
        .success();
    helpdesk(&dir)
        .args(["--as", "tech1", "status", &id, "IN_PROGRESS"])
        .assert()
        .success();
    helpdesk(&dir)
        .args(["--as", "tech1", "comment", &id, "MTU issue, applying fix"])
        .assert()
        .success();
    helpdesk(&dir)
        .args(["--as", "tech1", "status", &id, "RESOLVED"])
        .assert()
        .success();

    helpdesk(&dir)
        .args(["--as", "alice", "show", &id])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("VPN drops every hour")
                .and(predicate::str::contains("RESOLVED"))
                .and(predicate::str::contains("MTU issue, applying fix")),
        );

    helpdesk(&dir)
        .args(["--as", "alice", "history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket created"));
}

#[test]
fn list_supports_json_and_filters() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    file_ticket(&dir, "alice", "Laptop battery swollen");

    let output = helpdesk(&dir)
        .args(["--as", "admin", "--json", "list", "--urgency", "HIGH"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tickets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tickets.as_array().map(Vec::len), Some(1));

    helpdesk(&dir)
        .args(["--as", "admin", "list", "--status", "CLOSED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop battery swollen").not());
}

#[test]
fn role_checks_surface_as_errors() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    let id = file_ticket(&dir, "alice", "Password reset needed");

    // A regular user may not change status
    helpdesk(&dir)
        .args(["--as", "alice", "status", &id, "IN_PROGRESS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));

    // Technicians may not file tickets
    helpdesk(&dir)
        .args([
            "--as", "tech1", "new", "--title", "x", "--description", "y",
            "--urgency", "LOW", "--category", "OTHER",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));

    // Only admins manage accounts
    helpdesk(&dir)
        .args([
            "--as", "alice", "user", "add", "mallory", "--email", "m@corp.example",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));
}

#[test]
fn new_honors_category_flag() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    let output = helpdesk(&dir)
        .args([
            "--as", "alice", "--json", "new", "--title", "No route to file server",
            "--description", "SMB share unreachable from floor 2", "--urgency", "MEDIUM",
            "--category", "CONNECTIVITY",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let ticket: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ticket["category"], "CONNECTIVITY");

    helpdesk(&dir)
        .args([
            "--as", "alice", "new", "--title", "x", "--description", "y",
            "--urgency", "LOW", "--category", "BOGUS",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn invalid_transition_is_rejected() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    let id = file_ticket(&dir, "alice", "Shared drive read-only");

    helpdesk(&dir)
        .args(["--as", "admin", "status", &id, "CLOSED"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status transition"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    setup(&dir);
    file_ticket(&dir, "alice", "Projector HDMI port broken");

    let out_file = dir.path().join("tickets.csv");
    helpdesk(&dir)
        .args(["--as", "admin", "export", "--output"])
        .arg(&out_file)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out_file).unwrap();
    assert!(csv.starts_with("id,title,status,"));
    assert!(csv.contains("Projector HDMI port broken"));
}

#[test]
fn seed_then_analytics() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    helpdesk(&dir)
        .args(["--as", "admin", "seed"])
        .assert()
        .success();

    helpdesk(&dir)
        .args(["--as", "admin", "analytics"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total tickets: 7")
                .and(predicate::str::contains("By status:")),
        );

    helpdesk(&dir)
        .args(["--as", "admin", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IN_PROGRESS"));
}

#[test]
fn missing_acting_user_is_reported() {
    let dir = TempDir::new().unwrap();
    setup(&dir);

    helpdesk(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--as"));

    helpdesk(&dir)
        .args(["--as", "ghost", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found"));
}
