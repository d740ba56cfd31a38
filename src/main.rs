use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use savvyplan::application::simulator::simulate;
use savvyplan::application::summary::summarize;
use savvyplan::domain::budget::BudgetSheet;
use savvyplan::domain::debt::{DebtRegistry, Strategy};
use savvyplan::domain::education::{LearningResource, catalog};
use savvyplan::domain::growth::{GrowthInput, project};
use savvyplan::domain::money::{Balance, Rate};
use savvyplan::domain::simulation::{MAX_MONTHS, SimulationResult};
use savvyplan::error::PlanError;
use savvyplan::interfaces::csv::budget_reader::BudgetReader;
use savvyplan::interfaces::csv::debt_reader::DebtReader;
use savvyplan::interfaces::csv::schedule_writer::ScheduleWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a debt payoff plan from a CSV of debts
    Payoff {
        /// CSV file with columns: name, balance, interest_rate, min_payment
        input: PathBuf,

        /// Total monthly payment capacity; defaults to the sum of minimums
        #[arg(long)]
        budget: Option<Decimal>,

        /// Surplus allocation strategy: avalanche or snowball
        #[arg(long, default_value = "avalanche")]
        strategy: Strategy,
    },
    /// Project investment growth over a number of years
    Growth {
        #[arg(long)]
        principal: Decimal,

        #[arg(long)]
        monthly: Decimal,

        /// Annual interest rate, in percent
        #[arg(long)]
        rate: Decimal,

        #[arg(long)]
        years: u32,
    },
    /// Total a monthly budget from a CSV of entries
    Budget {
        /// CSV file with columns: name, amount, kind (income|expense)
        input: PathBuf,
    },
    /// List learning resources
    Learn {
        /// Filter by kind: course, article or tool
        #[arg(long)]
        kind: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Payoff {
            input,
            budget,
            strategy,
        } => run_payoff(&input, budget, strategy),
        Command::Growth {
            principal,
            monthly,
            rate,
            years,
        } => run_growth(principal, monthly, rate, years),
        Command::Budget { input } => run_budget(&input),
        Command::Learn { kind } => run_learn(kind.as_deref()),
    }
}

fn run_payoff(input: &PathBuf, budget: Option<Decimal>, strategy: Strategy) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let mut registry = DebtRegistry::new();
    for draft in DebtReader::new(file).drafts() {
        let draft = draft.into_diagnostic()?;
        registry.add_debt(draft).into_diagnostic()?;
    }

    let result = match simulate(registry.debts(), budget.map(Balance::new), strategy) {
        Ok(result) => result,
        Err(PlanError::DidNotConverge { partial }) => {
            eprintln!(
                "warning: this plan does not pay off all debts within {MAX_MONTHS} months; \
                 showing the capped projection"
            );
            *partial
        }
        Err(other) => return Err(other).into_diagnostic(),
    };

    print_summary(&registry, &result);
    ScheduleWriter::new(io::stdout().lock())
        .write_schedule(&result.schedule)
        .into_diagnostic()?;
    Ok(())
}

fn print_summary(registry: &DebtRegistry, result: &SimulationResult) {
    let summary = summarize(registry.debts(), result);
    println!("Debt free in: {} years {} months", summary.years, summary.months);
    println!("Total interest: {}", summary.total_interest.round_dp(2));
    println!("Total paid: {}", summary.total_paid.round_dp(2));
    println!(
        "Debts retired: {}/{} ({:.0}%)",
        summary.debts_retired,
        summary.debts_total,
        summary.percent_retired()
    );
    println!();
}

fn run_growth(principal: Decimal, monthly: Decimal, rate: Decimal, years: u32) -> Result<()> {
    let projection = project(&GrowthInput {
        principal: Balance::new(principal),
        monthly_contribution: Balance::new(monthly),
        annual_rate: Rate::new(rate),
        years,
    })
    .into_diagnostic()?;

    println!("year,amount");
    for point in &projection.points {
        println!("{},{}", point.year, point.amount);
    }
    println!();
    println!("Final amount: {}", projection.final_amount.round_dp(2));
    println!("Total invested: {}", projection.total_invested.round_dp(2));
    println!("Interest earned: {}", projection.interest_earned.round_dp(2));
    Ok(())
}

fn run_budget(input: &PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let mut sheet = BudgetSheet::new();
    for draft in BudgetReader::new(file).drafts() {
        let draft = draft.into_diagnostic()?;
        sheet.add_entry(draft).into_diagnostic()?;
    }

    let totals = sheet.totals();
    println!("Income: {}", totals.income.round_dp(2));
    println!("Expenses: {}", totals.expenses.round_dp(2));
    println!("Net: {}", totals.net.round_dp(2));
    Ok(())
}

fn run_learn(kind: Option<&str>) -> Result<()> {
    for resource in catalog() {
        let (label, line) = match &resource {
            LearningResource::Course {
                title,
                category,
                duration_hours,
                lessons,
                progress,
                ..
            } => (
                "course",
                format!("{title} ({category}, {duration_hours}h, {lessons} lessons, {progress}% complete)"),
            ),
            LearningResource::Article {
                title,
                category,
                reading_minutes,
                ..
            } => ("article", format!("{title} ({category}, {reading_minutes} min)")),
            LearningResource::Tool { title, description, .. } => {
                ("tool", format!("{title}: {description}"))
            }
        };
        if kind.is_none_or(|k| k == label) {
            println!("[{label}] {line}");
        }
    }
    Ok(())
}
