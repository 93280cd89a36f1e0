use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

fn tracker(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget-tracker").unwrap();
    cmd.env("BUDGET_TRACKER_CONFIG_DIR", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn shell_tracks_budget_and_rejects_negative_expense() {
    let home = tempfile::tempdir().unwrap();
    let script = "budget 500\nadd Coffee 4.50\nadd Rent -100\nsummary\n";

    tracker(&home)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Added #1 Coffee $4.50")
                .and(contains("Error: Invalid expense"))
                .and(contains("$495.50"))
                .and(contains("Rent").not()),
        );
}

#[test]
fn shell_edit_keeps_id_and_updates_totals() {
    let home = tempfile::tempdir().unwrap();
    let script = "budget 100\nadd Book 20\nedit 1\nadd \"Used book\" 25\nlist\n";

    tracker(&home)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Editing #1")
                .and(contains("Updated #1 Used book $25.00"))
                .and(contains("$75.00")),
        );
}

#[test]
fn shell_delete_and_missing_delete() {
    let home = tempfile::tempdir().unwrap();
    let script = "budget 50\nadd Lunch 12\ndelete 1\ndelete 1\nlist\n";

    tracker(&home)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Deleted #1 Lunch")
                .and(contains("No expense #1; nothing deleted."))
                .and(contains("No expenses added yet.")),
        );
}

#[test]
fn shell_zero_budget_depends_on_policy() {
    let home = tempfile::tempdir().unwrap();

    tracker(&home)
        .arg("shell")
        .write_stdin("budget 0\n")
        .assert()
        .success()
        .stdout(contains("must be greater than zero"));

    tracker(&home)
        .args(["--amount-policy", "non-negative", "shell"])
        .write_stdin("budget 0\n")
        .assert()
        .success()
        .stdout(contains("Budget set to $0.00").and(contains("(even)")));
}

#[test]
fn shell_quit_stops_reading() {
    let home = tempfile::tempdir().unwrap();

    tracker(&home)
        .arg("shell")
        .write_stdin("add A 1\nquit\nadd B 2\n")
        .assert()
        .success()
        .stdout(contains("Added #1 A").and(contains("Added #2 B").not()));
}

#[test]
fn init_writes_settings_once() {
    let home = tempfile::tempdir().unwrap();

    tracker(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Wrote default settings"));

    let written = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(written.contains("\"amount_policy\": \"strictly-positive\""));

    tracker(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Already initialized"));
}

#[test]
fn config_reports_settings_file_policy() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "amount_policy": "non-negative", "currency_symbol": "€" }"#,
    )
    .unwrap();

    tracker(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("non-negative").and(contains("€")));
}
