use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path()).env_remove("TALLY_LOG");
    cmd
}

#[test]
fn test_session_adds_lists_and_totals() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .write_stdin(
            "add_ex d/Lunch a/10 c/food\n\
             add_ex d/Taxi a/20.5 c/transport\n\
             list_ex\n\
             total_ex\n\
             end\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: [FOOD] Lunch - $10.00"))
        .stdout(predicate::str::contains("TRANSPORT"))
        .stdout(predicate::str::contains("Total expenses: $30.50"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn test_invalid_input_does_not_stop_session() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .write_stdin("foobar\nadd_in d/Pay a/zero c/work\ndel_in i/1\ntotal_in\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Only numeric inputs are allowed for the amount."))
        .stdout(predicate::str::contains("Income not found: #1"))
        .stdout(predicate::str::contains("Total income: $0.00"));
}

#[test]
fn test_audit_log_written() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .write_stdin("add_ex d/Lunch a/5 c/food\ndel_ex i/1\nend\n")
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"operation\":\"create\""));
    assert!(lines[1].contains("\"operation\":\"delete\""));
}

#[test]
fn test_no_audit_flag() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("--no-audit")
        .write_stdin("add_ex d/Lunch a/5 c/food\nend\n")
        .assert()
        .success();

    assert!(!dir.path().join("audit.log").exists());
}

#[test]
fn test_currency_override() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["--currency", "€", "--no-audit"])
        .write_stdin("add_in d/Pay a/100 c/work\ntotal_in\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income: €100.00"));
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    false"));

    tally(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"));
    assert!(dir.path().join("config.json").exists());

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Currency symbol: $"))
        .stdout(predicate::str::contains("Audit enabled:   true"));
}

#[test]
fn test_settings_file_is_honoured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "S$", "audit_enabled": false}"#,
    )
    .unwrap();

    tally(&dir)
        .write_stdin("add_ex d/Kopi a/1.2 c/drinks\ntotal_ex\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: S$1.20"));

    assert!(!dir.path().join("audit.log").exists());
}

#[test]
fn test_audit_subcommand_shows_recent_changes() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries in"));

    tally(&dir)
        .write_stdin("add_ex d/Lunch a/5 c/food\nadd_in d/Pay a/100 c/work\ndel_ex i/1\nend\n")
        .assert()
        .success();

    tally(&dir)
        .args(["audit", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Income #1 (Pay)"))
        .stdout(predicate::str::contains("DELETE Expense #1 (Lunch)"))
        .stdout(predicate::str::contains("CREATE Expense").not());
}

#[test]
fn test_overflowing_total_is_reported() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("--no-audit")
        .write_stdin(
            "add_ex d/a a/90000000000000000 c/x\n\
             add_ex d/b a/90000000000000000 c/x\n\
             total_ex\n\
             add_ex d/c a/1e3 c/x\n\
             add_ex d/d a/$12 c/x\n\
             end\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Expense total is too large to compute"))
        .stdout(predicate::str::contains("Added expense: [X] c - $1000.00"))
        .stdout(predicate::str::contains("Only numeric inputs are allowed for the amount."))
        .stdout(predicate::str::contains("Bye!"));
}
