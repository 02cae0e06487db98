use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_LEDGER_DIR", dir.path())
        .env_remove("BUDGET_LEDGER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

const SCENARIO: &str = r#"{
    "categories": ["Food", "Clothing", "Auto"],
    "operations": [
        {"type": "deposit", "category": "Food", "amount": "1000", "description": "deposit"},
        {"type": "withdraw", "category": "Food", "amount": "10.15", "description": "groceries"},
        {"type": "withdraw", "category": "Food", "amount": "15.89", "description": "restaurant and more food for dessert"},
        {"type": "transfer", "from": "Food", "to": "Clothing", "amount": "50"},
        {"type": "deposit", "category": "Auto", "amount": "1000", "description": "deposit"},
        {"type": "withdraw", "category": "Auto", "amount": "150", "description": "car repair"}
    ]
}"#;

#[test]
fn demo_prints_ledgers_and_chart() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("*************Food*************\n"))
        .stdout(predicate::str::contains("restaurant and more foo -15.89\n"))
        .stdout(predicate::str::contains("Transfer from Food       50.00\n"))
        .stdout(predicate::str::contains(" 30| o     o  \n"))
        .stdout(predicate::str::ends_with("        g     \n"));
}

#[test]
fn report_matches_demo() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("scenario.json");
    std::fs::write(&scenario, SCENARIO).unwrap();

    let demo = budget(&dir).arg("demo").output().unwrap();
    let report = budget(&dir).arg("report").arg(&scenario).output().unwrap();

    assert!(report.status.success());
    assert_eq!(demo.stdout, report.stdout);
}

#[test]
fn report_json_format() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("scenario.json");
    std::fs::write(&scenario, SCENARIO).unwrap();

    budget(&dir)
        .args(["report", "--format", "json"])
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_spent\": \"226.04\""))
        .stdout(predicate::str::contains("\"Transfer to Clothing\""));
}

#[test]
fn report_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("scenario.json");
    std::fs::write(
        &scenario,
        r#"{"categories": ["Food"], "operations": [{"type": "deposit", "category": "Rent", "amount": "5"}]}"#,
    )
    .unwrap();

    budget(&dir)
        .arg("report")
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Rent"));
}

#[test]
fn reject_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("strict.json");
    std::fs::write(&config, r#"{"zero_spend_policy": "reject"}"#).unwrap();
    let scenario = dir.path().join("scenario.json");
    std::fs::write(&scenario, r#"{"categories": ["Food"]}"#).unwrap();

    budget(&dir)
        .arg("--config")
        .arg(&config)
        .arg("report")
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chart error"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Zero-spend policy: Blank"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not created, using defaults"));

    budget(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default settings written to"));

    let written = std::fs::read_to_string(&settings_file).unwrap();
    assert!(written.contains("\"zero_spend_policy\": \"blank\""));
    assert!(written.contains("\"log_filter\": \"warn\""));

    std::fs::write(&settings_file, r#"{"zero_spend_policy": "reject"}"#).unwrap();
    budget(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zero-spend policy: Reject"));
}
