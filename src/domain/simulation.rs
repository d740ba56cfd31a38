use crate::domain::money::Balance;
use serde::{Deserialize, Serialize};

/// Hard safety cap on simulated months (50 years). A plan still carrying
/// open balances past this point is reported as non-convergent.
pub const MAX_MONTHS: u32 = 600;

/// Snapshots are recorded every this many months, plus the final month.
pub const SNAPSHOT_INTERVAL: u32 = 6;

/// Periodic progress record within a payoff schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-based month index.
    pub month: u32,
    /// Debts still carrying a positive balance after this month's payments.
    pub remaining_debts: usize,
    /// Cumulative payments applied so far, minimums and surplus combined.
    pub total_paid: Balance,
}

/// Outcome of one payoff simulation. Produced once per invocation and never
/// mutated afterwards; re-running with different inputs yields an
/// independent value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Months simulated until every debt reached zero, or until the cap.
    pub total_months: u32,
    /// Interest accrued across all months and debts.
    pub total_interest: Balance,
    /// Snapshot trail, recorded every [`SNAPSHOT_INTERVAL`] months and on
    /// the final month.
    pub schedule: Vec<Snapshot>,
}

impl SimulationResult {
    /// Debt count still open at the latest snapshot, or `None` for an
    /// empty schedule (nothing was ever owed).
    pub fn latest_remaining(&self) -> Option<usize> {
        self.schedule.last().map(|s| s.remaining_debts)
    }
}
