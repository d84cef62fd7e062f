use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "spendlog";

fn spendlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("SPENDLOG_DATA_DIR", dir.path());
    cmd.env_remove("SPENDLOG_LOG");
    cmd
}

fn added_id(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: ").map(str::to_string))
        .expect("add prints the new id")
}

#[test]
fn add_list_and_delete_expense() {
    let dir = TempDir::new().unwrap();

    let output = spendlog(&dir)
        .args(["expense", "add", "Groceries", "42.50", "--date", "2024-03-01"])
        .args(["--category", "food"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = added_id(&output.stdout);

    spendlog(&dir)
        .args(["expense", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("$42.50")));

    spendlog(&dir)
        .args(["expense", "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Expenses: March 2024").and(contains("Groceries")));

    spendlog(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(contains("Deleted expense"));

    spendlog(&dir)
        .args(["expense", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn deleting_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "delete", "does-not-exist"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));
}

#[test]
fn invalid_expense_reports_every_field() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "  ", "abc", "--date", "03/01/2024"])
        .assert()
        .failure()
        .stderr(
            contains("description: Description is required.")
                .and(contains("amount: Amount must be a number."))
                .and(contains("date: Date must be in YYYY-MM-DD format.")),
        );

    spendlog(&dir)
        .args(["expense", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn non_positive_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Refund", "-5", "--date", "2024-03-01"])
        .assert()
        .failure()
        .stderr(contains("Amount must be greater than 0."));
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["budget", "set", "500"])
        .assert()
        .success()
        .stdout(contains("Monthly budget set to $500.00"));

    spendlog(&dir)
        .args(["budget", "set-category", "food", "100"])
        .assert()
        .success()
        .stdout(contains("Food budget set to $100.00"));

    spendlog(&dir)
        .args(["budget", "show", "--by-category"])
        .assert()
        .success()
        .stdout(contains("Budget:    $500.00").and(contains("Food")));

    spendlog(&dir)
        .args(["budget", "set", "0"])
        .assert()
        .success()
        .stdout(contains("Monthly budget cleared"));

    spendlog(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(contains("(not set)"));
}

#[test]
fn budget_rejects_unparseable_amount() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["budget", "set", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[test]
fn history_with_empty_log() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["history", "show"])
        .assert()
        .success()
        .stdout(contains("No expenses logged yet."));

    spendlog(&dir)
        .args(["history", "months"])
        .assert()
        .success()
        .stdout(contains("No expenses logged yet."));
}

#[test]
fn history_filters_by_month() {
    let dir = TempDir::new().unwrap();

    for (description, amount, date, category) in [
        ("Lunch", "20", "2024-03-01", "food"),
        ("Bus", "5", "2024-03-02", "transport"),
        ("Cinema", "12", "2024-02-10", "entertainment"),
    ] {
        spendlog(&dir)
            .args(["expense", "add", description, amount, "--date", date])
            .args(["--category", category])
            .assert()
            .success();
    }

    spendlog(&dir)
        .args(["history", "show", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(
            contains("Lunch")
                .and(contains("Bus"))
                .and(contains("Cinema").not())
                .and(contains("Total: $25.00")),
        );

    spendlog(&dir)
        .args(["history", "show", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("No expenses for the selected period."));

    spendlog(&dir)
        .args(["history", "months"])
        .assert()
        .success()
        .stdout(contains("March 2024").and(contains("February 2024")));
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Coffee", "3.20", "--date", "2024-03-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("schema_version").and(contains("Coffee")));
}

#[test]
fn export_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("expenses.csv");

    spendlog(&dir)
        .args(["expense", "add", "Coffee", "3.20", "--date", "2024-03-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("ID,Date,Description,Category,Category Name,Amount"));
    assert!(contents.contains("Coffee"));
}

#[test]
fn config_shows_data_directory() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Data directory").and(contains("Currency symbol: $")));
}

#[test]
fn dashboard_runs_without_subcommand() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .assert()
        .success()
        .stdout(contains("Budget for"));
}

#[test]
fn amounts_beyond_cents_or_range_are_rejected() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Tiny", "0.001"])
        .assert()
        .failure()
        .stderr(contains("amount: Amount must have at most two decimal places."));

    spendlog(&dir)
        .args(["expense", "add", "Huge", "92233720368547758"])
        .assert()
        .failure()
        .stderr(contains("amount: Amount must not exceed"));

    spendlog(&dir)
        .args(["budget", "set", "12.349"])
        .assert()
        .failure()
        .stderr(contains("at most two decimal places"));
}

#[test]
fn largest_amounts_still_total() {
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        spendlog(&dir)
            .args(["expense", "add", "Big", "100000000000", "--date", "2024-03-01"])
            .assert()
            .success();
    }

    spendlog(&dir)
        .args(["history", "show"])
        .assert()
        .success()
        .stdout(contains("Total: $200000000000.00"));
}

#[test]
fn months_outside_the_calendar_are_rejected() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["expense", "add", "Lunch", "12", "--date", "2024-03-01"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["history", "show", "--month", "300000-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid month: 300000-01"))
        .stdout(contains("1970").not());
}

#[test]
fn every_list_mode_is_newest_first() {
    let dir = TempDir::new().unwrap();

    for name in ["First", "Second"] {
        spendlog(&dir)
            .args(["expense", "add", name, "5", "--date", "2024-03-01"])
            .assert()
            .success();
    }

    for args in [
        vec!["--all"],
        vec!["--month", "2024-03"],
        vec!["--date", "2024-03-01"],
    ] {
        let output = spendlog(&dir)
            .args(["expense", "list"])
            .args(&args)
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let second = stdout.find("Second").expect("second listed");
        let first = stdout.find("First").expect("first listed");
        assert!(second < first, "{:?} lists oldest first:\n{}", args, stdout);
    }
}
