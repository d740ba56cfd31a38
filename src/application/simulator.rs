use crate::domain::debt::{Debt, Strategy};
use crate::domain::money::{Balance, Rate};
use crate::domain::simulation::{MAX_MONTHS, SNAPSHOT_INTERVAL, SimulationResult, Snapshot};
use crate::error::{PlanError, Result};

/// Working state of one debt during a simulation. The caller's `Debt` list
/// is never mutated.
#[derive(Debug, Clone)]
struct OpenDebt {
    balance: Balance,
    interest_rate: Rate,
    min_payment: Balance,
}

impl OpenDebt {
    fn is_open(&self) -> bool {
        self.balance.is_positive()
    }
}

/// Runs the month-by-month payoff simulation.
///
/// `monthly_budget` defaults to the sum of minimum payments when `None`.
/// Minimum payments are applied every month regardless of the nominal
/// budget: contractual minimums are non-optional, so a budget below their
/// sum simply leaves no surplus rather than failing validation.
///
/// Interest accrues before payments within each month. Returns
/// [`PlanError::DidNotConverge`] carrying the capped partial result when
/// balances remain open after [`MAX_MONTHS`].
pub fn simulate(
    debts: &[Debt],
    monthly_budget: Option<Balance>,
    strategy: Strategy,
) -> Result<SimulationResult> {
    let budget = monthly_budget.unwrap_or_else(|| debts.iter().map(|d| d.min_payment).sum());

    let mut working: Vec<OpenDebt> = debts
        .iter()
        .map(|d| OpenDebt {
            balance: d.balance,
            interest_rate: d.interest_rate,
            min_payment: d.min_payment,
        })
        .collect();

    let mut result = SimulationResult::default();
    let mut total_paid = Balance::ZERO;
    let mut month = 0u32;

    while working.iter().any(OpenDebt::is_open) {
        if month >= MAX_MONTHS {
            return Err(PlanError::DidNotConverge {
                partial: Box::new(result),
            });
        }
        month += 1;

        let order = surplus_order(&working, strategy);
        let mut remaining = budget;

        // Interest first, then minimums, on every open debt.
        for debt in working.iter_mut().filter(|d| d.is_open()) {
            let interest = Balance::new(debt.balance.value() * debt.interest_rate.monthly_factor());
            result.total_interest += interest;
            debt.balance += interest;

            let payment = debt.min_payment.min(debt.balance);
            debt.balance -= payment;
            remaining -= payment;
            total_paid += payment;
        }

        // Surplus goes to the strategy's priority debts.
        for index in order {
            if !remaining.is_positive() {
                break;
            }
            let debt = &mut working[index];
            if !debt.is_open() {
                continue;
            }
            let extra = remaining.min(debt.balance);
            debt.balance -= extra;
            remaining -= extra;
            total_paid += extra;
        }

        let remaining_debts = working.iter().filter(|d| d.is_open()).count();
        if month % SNAPSHOT_INTERVAL == 0 || remaining_debts == 0 {
            result.schedule.push(Snapshot {
                month,
                remaining_debts,
                total_paid,
            });
        }
        result.total_months = month;
    }

    Ok(result)
}

/// Index order for surplus allocation: descending rate for avalanche,
/// ascending balance for snowball. Stable, so ties keep insertion order.
fn surplus_order(working: &[OpenDebt], strategy: Strategy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..working.len()).collect();
    match strategy {
        Strategy::Avalanche => {
            order.sort_by(|&a, &b| working[b].interest_rate.cmp(&working[a].interest_rate));
        }
        Strategy::Snowball => {
            order.sort_by(|&a, &b| working[a].balance.cmp(&working[b].balance));
        }
    }
    order
}
