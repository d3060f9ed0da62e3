use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(home: &std::path::Path, data: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker_cli").unwrap();
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home)
        .env("EXPENSE_TRACKER_FILE", data)
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("expenses.json");
    let input = "add Food 12.50 lunch 2024-01-02\n\
                 add Food 8 coffee 2024-01-01\n\
                 add Transport 20 taxi 2024-01-03\n\
                 total\n\
                 by-category\n\
                 over-time\n\
                 exit\n";

    script_command(dir.path(), &data)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense added successfully."))
        .stdout(contains("Total: $40.50"))
        .stdout(contains("=== Expenses by Category ==="))
        .stdout(contains("2024-01-01"));

    let json = std::fs::read_to_string(&data).unwrap();
    assert!(json.contains("\"Transport\""));
}

#[test]
fn script_mode_rejects_bad_amount_without_writing() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("expenses.json");

    script_command(dir.path(), &data)
        .write_stdin("add Food lots\nexit\n")
        .assert()
        .success()
        .stdout(contains("Amount should be a number."));

    assert!(!data.exists());
}

#[test]
fn script_mode_reports_missing_category_on_delete() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("expenses.json");

    script_command(dir.path(), &data)
        .write_stdin("add Food 1 '' 2024-01-01\ndelete Rent 0\ndelete Food 5\nexit\n")
        .assert()
        .success()
        .stdout(contains("Category `Rent` not found."))
        .stdout(contains("Failed to delete the expense."));
}

#[test]
fn script_mode_lists_records_with_indices() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("expenses.json");
    let input = "add Food 12.50 lunch 2024-01-02\n\
                 add Transport 20 taxi 2024-01-03\n\
                 add Food 8 coffee 2024-01-01\n\
                 list\n\
                 exit\n";

    script_command(dir.path(), &data)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Category: Food"))
        .stdout(contains(
            "[0] Amount: $12.50 - Date: 2024-01-02 - Description: lunch",
        ))
        .stdout(contains(
            "[1] Amount: $8.00 - Date: 2024-01-01 - Description: coffee",
        ))
        .stdout(contains("Category: Transport"))
        .stdout(contains(
            "[0] Amount: $20.00 - Date: 2024-01-03 - Description: taxi",
        ));
}

#[test]
fn script_mode_lists_nothing_for_empty_store() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("expenses.json");

    script_command(dir.path(), &data)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}
