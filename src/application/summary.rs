use crate::domain::debt::Debt;
use crate::domain::money::Balance;
use crate::domain::simulation::SimulationResult;
use serde::Serialize;

/// Presentation-ready aggregates derived from a simulation. Pure
/// projection: building one mutates neither the debts nor the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub years: u32,
    pub months: u32,
    pub total_interest: Balance,
    /// Original balances plus all interest accrued.
    pub total_paid: Balance,
    pub debts_retired: usize,
    pub debts_total: usize,
}

impl PlanSummary {
    /// Share of debts retired at the latest snapshot, in percent.
    pub fn percent_retired(&self) -> f64 {
        if self.debts_total == 0 {
            return 100.0;
        }
        self.debts_retired as f64 / self.debts_total as f64 * 100.0
    }
}

pub fn summarize(debts: &[Debt], result: &SimulationResult) -> PlanSummary {
    let original_balance: Balance = debts.iter().map(|d| d.balance).sum();
    let remaining = result.latest_remaining().unwrap_or(0);
    PlanSummary {
        years: result.total_months / 12,
        months: result.total_months % 12,
        total_interest: result.total_interest,
        total_paid: original_balance + result.total_interest,
        debts_retired: debts.len().saturating_sub(remaining),
        debts_total: debts.len(),
    }
}
