use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path())
        .env("FINTRACK_PASSWORD", "s3cret")
        .env_remove("FINTRACK_USER")
        .env_remove("RUST_LOG");
    cmd
}

fn signup(data_dir: &TempDir, username: &str) {
    fintrack(data_dir)
        .args(["signup", username])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created"));
}

#[test]
fn signup_then_login() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "alice");

    fintrack(&data_dir)
        .args(["login", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome alice"));

    fintrack(&data_dir)
        .args(["login", "alice"])
        .env("FINTRACK_PASSWORD", "wrong")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn duplicate_signup_fails() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "alice");

    fintrack(&data_dir)
        .args(["signup", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn budget_ceiling_is_enforced() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "alice");

    fintrack(&data_dir)
        .args(["--user", "alice", "budget", "set", "Food", "100.00"])
        .assert()
        .success();

    for amount in ["60.00", "40.00"] {
        fintrack(&data_dir)
            .args(["--user", "alice", "expense", "add", amount, "--category", "Food"])
            .args(["--date", "2024-01-10", "--description", "meal"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Expense added successfully."));
    }

    fintrack(&data_dir)
        .args(["--user", "alice", "expense", "add", "0.01", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Adding this expense would exceed your budget for this category.",
        ));

    fintrack(&data_dir)
        .args(["--user", "alice", "expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expense(s), total ₹100.00"));
}

#[test]
fn unknown_category_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "alice");

    fintrack(&data_dir)
        .args(["--user", "alice", "expense", "add", "5", "--category", "Pets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category does not exist."));

    fintrack(&data_dir)
        .args(["--user", "alice", "category", "add", "Pets"])
        .assert()
        .success();

    fintrack(&data_dir)
        .args(["--user", "alice", "expense", "add", "5", "--category", "Pets"])
        .assert()
        .success();
}

#[test]
fn bulk_import_keeps_valid_rows() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "alice");

    let upload = data_dir.path().join("upload.csv");
    std::fs::write(
        &upload,
        "date,category,amount,description\n2024-01-01,Food,20,lunch\n2024-01-02,NoSuchCat,5,x\n",
    )
    .unwrap();

    fintrack(&data_dir)
        .args(["--user", "alice", "expense", "import"])
        .arg(&upload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row with x: Category does not exist."));

    let export = data_dir.path().join("out.csv");
    fintrack(&data_dir)
        .args(["--user", "alice", "export", "expenses"])
        .arg(&export)
        .assert()
        .success();

    let content = std::fs::read_to_string(&export).unwrap();
    assert_eq!(
        content,
        "username,date,category,amount,description\nalice,2024-01-01,Food,20.00,lunch\n"
    );
}

#[test]
fn user_scoped_command_needs_user() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user"));
}

#[test]
fn config_shows_data_dir() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Alert threshold:  80%"));
}

#[test]
fn dashboard_reports_totals() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "alice");

    for (amount, category, date) in [("30", "Food", "2024-01-01"), ("10", "Transport", "2024-01-02")] {
        fintrack(&data_dir)
            .args(["--user", "alice", "expense", "add", amount, "--category", category])
            .args(["--date", date])
            .assert()
            .success();
    }

    fintrack(&data_dir)
        .args(["--user", "alice", "report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard: 2024-01-01 to 2024-01-02"))
        .stdout(predicate::str::contains("Total Spent:     ₹40.00"))
        .stdout(predicate::str::contains("Most Spent On:   Food"));
}

#[test]
fn config_save_writes_settings() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let settings = std::fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(settings.contains("\"currency_symbol\": \"₹\""));
}
