//! End-to-end tests for the seapay binary
//!
//! Each test runs against its own temporary data directory via the
//! SEAPAY_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn seapay(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("seapay").expect("binary builds");
    cmd.env("SEAPAY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn shows_defaults_on_first_run() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args(["pay", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base Pay"))
        .stdout(predicate::str::contains("$2,319.00"));
}

#[test]
fn configures_and_computes_the_e6_scenario() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args([
            "pay",
            "set",
            "--grade",
            "E6",
            "--yos",
            "6",
            "--locality",
            "San Diego, CA",
            "--dependents",
            "with",
            "--tsp",
            "5",
            "--sgli",
            "false",
            "--afrh",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved."));

    seapay(&data_dir)
        .args(["pay", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$4,080.60"))
        .stdout(predicate::str::contains("$4,320.00"))
        .stdout(predicate::str::contains("$8,866.37"));
}

#[test]
fn rejects_an_unknown_grade() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args(["pay", "set", "--grade", "E99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown pay grade"));
}

#[test]
fn lists_localities_for_the_configured_grade() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args(["pay", "set", "--grade", "E6"])
        .assert()
        .success();

    seapay(&data_dir)
        .args(["pay", "localities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("San Diego, CA"))
        .stdout(predicate::str::contains("$4,320.00"));
}

#[test]
fn budget_seeds_once_from_allotments() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args(["pay", "allotment", "add", "Rent", "100"])
        .assert()
        .success();
    seapay(&data_dir)
        .args(["pay", "allotment", "add", "Car", "50"])
        .assert()
        .success();

    seapay(&data_dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Car"))
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("$50.00"));

    // Manual removal sticks: the ledger does not re-seed
    seapay(&data_dir)
        .args(["budget", "remove", "Rent"])
        .assert()
        .success();
    seapay(&data_dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn budget_reimport_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args(["pay", "allotment", "add", "Rent", "100"])
        .assert()
        .success();

    seapay(&data_dir)
        .args(["budget", "add", "Games", "60", "--kind", "want"])
        .assert()
        .success();

    // Without --yes nothing changes
    seapay(&data_dir)
        .args(["budget", "reimport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    seapay(&data_dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Games"));

    // With --yes the manual line is gone and the allotment is back
    seapay(&data_dir)
        .args(["budget", "reimport", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 allotment line(s)"));
    seapay(&data_dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Games").not())
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn budget_summary_shows_percentages_and_net() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .args(["budget", "add", "Rent", "600", "--kind", "need"])
        .assert()
        .success();
    seapay(&data_dir)
        .args(["budget", "add", "Games", "300", "--kind", "want"])
        .assert()
        .success();
    seapay(&data_dir)
        .args(["budget", "add", "Emergency", "100", "--kind", "savings"])
        .assert()
        .success();

    seapay(&data_dir)
        .args(["budget", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60%"))
        .stdout(predicate::str::contains("30%"))
        .stdout(predicate::str::contains("10%"))
        .stdout(predicate::str::contains("Net After Expenses"));
}

#[test]
fn init_reports_paths() {
    let data_dir = TempDir::new().unwrap();

    seapay(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir
        .path()
        .join("data")
        .join("pay-configuration.json")
        .exists());
}
