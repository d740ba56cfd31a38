use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn csv_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_payoff_default_scenario() {
    let debts = csv_fixture(
        "name,balance,interest_rate,min_payment\n\
         Credit Card,15000,18,500\n\
         Car Loan,120000,9,3500\n\
         Personal Loan,50000,15,2000\n",
    );

    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.arg("payoff")
        .arg(debts.path())
        .args(["--budget", "6000", "--strategy", "avalanche"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Debt free in:"))
        .stdout(predicate::str::contains("Debts retired: 3/3 (100%)"))
        .stdout(predicate::str::contains("month,remaining_debts,total_paid"));
}

#[test]
fn test_payoff_rejects_invalid_debt_row() {
    let debts = csv_fixture(
        "name,balance,interest_rate,min_payment\n\
         Broken,-100,18,500\n",
    );

    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.arg("payoff").arg(debts.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid debt input"));
}

#[test]
fn test_payoff_non_convergent_plan_warns_but_succeeds() {
    let debts = csv_fixture(
        "name,balance,interest_rate,min_payment\n\
         Spiral,10000,60,100\n",
    );

    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.arg("payoff").arg(debts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("does not pay off all debts"))
        .stdout(predicate::str::contains("Debt free in: 50 years 0 months"));
}

#[test]
fn test_payoff_unknown_strategy() {
    let debts = csv_fixture("name,balance,interest_rate,min_payment\n");

    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.arg("payoff")
        .arg(debts.path())
        .args(["--strategy", "payday"]);

    cmd.assert().failure();
}

#[test]
fn test_budget_totals() {
    let entries = csv_fixture(
        "name,amount,kind\n\
         Salary,35000,income\n\
         Rent,12000,expense\n\
         Groceries,5000,expense\n\
         Utilities,2500,expense\n",
    );

    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.arg("budget").arg(entries.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Income: 35000"))
        .stdout(predicate::str::contains("Expenses: 19500"))
        .stdout(predicate::str::contains("Net: 15500"));
}

#[test]
fn test_growth_projection() {
    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.args([
        "growth",
        "--principal",
        "10000",
        "--monthly",
        "1000",
        "--rate",
        "10",
        "--years",
        "10",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("year,amount"))
        .stdout(predicate::str::contains("Final amount:"))
        .stdout(predicate::str::contains("Total invested: 130000"));
}

#[test]
fn test_learn_filter_by_kind() {
    let mut cmd = Command::new(cargo_bin!("savvyplan"));
    cmd.args(["learn", "--kind", "tool"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[tool] Debt Payoff Calculator"))
        .stdout(predicate::str::contains("[course]").not());
}
