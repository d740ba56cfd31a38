use crate::domain::money::{Balance, Rate};
use crate::domain::ports::KeyValueStore;
use crate::error::{PlanError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single debt obligation admitted to a registry.
///
/// Immutable for the duration of a simulation run; the simulator works on
/// its own copy of the balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Unique within the owning registry.
    pub id: u32,
    /// Display label, non-semantic.
    pub name: String,
    /// Current principal plus accrued but unpaid interest.
    pub balance: Balance,
    /// Annual nominal percentage rate, in `[0, 100)`.
    pub interest_rate: Rate,
    /// Contractual minimum monthly payment.
    pub min_payment: Balance,
}

/// An unvalidated debt row, as it arrives from a CSV file or a form.
/// Becomes a [`Debt`] once the registry admits it and assigns an id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DebtDraft {
    pub name: String,
    pub balance: Decimal,
    pub interest_rate: Decimal,
    pub min_payment: Decimal,
}

/// Surplus allocation strategy for the payoff simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Direct surplus to the highest interest rate first.
    Avalanche,
    /// Direct surplus to the lowest balance first.
    Snowball,
}

impl FromStr for Strategy {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "avalanche" => Ok(Self::Avalanche),
            "snowball" => Ok(Self::Snowball),
            other => Err(PlanError::InvalidInput(format!(
                "unknown strategy '{other}', expected 'avalanche' or 'snowball'"
            ))),
        }
    }
}

/// Validates and holds the set of debts for one simulation.
///
/// Ids are assigned sequentially on admission. The registry never triggers
/// a simulation itself; callers pass `debts()` to the simulator.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRegistry {
    debts: Vec<Debt>,
    next_id: u32,
}

impl DebtRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a draft, rejecting out-of-range fields with a field-level message.
    pub fn add_debt(&mut self, draft: DebtDraft) -> Result<u32> {
        if draft.balance < Decimal::ZERO {
            return Err(PlanError::InvalidDebtInput(format!(
                "'{}': balance must not be negative",
                draft.name
            )));
        }
        if draft.interest_rate < Decimal::ZERO || draft.interest_rate >= Decimal::ONE_HUNDRED {
            return Err(PlanError::InvalidDebtInput(format!(
                "'{}': interest rate must be in [0, 100)",
                draft.name
            )));
        }
        if draft.min_payment < Decimal::ZERO {
            return Err(PlanError::InvalidDebtInput(format!(
                "'{}': minimum payment must not be negative",
                draft.name
            )));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.debts.push(Debt {
            id,
            name: draft.name,
            balance: Balance::new(draft.balance),
            interest_rate: Rate::new(draft.interest_rate),
            min_payment: Balance::new(draft.min_payment),
        });
        Ok(id)
    }

    /// Removes a debt by id. Unknown ids are a no-op.
    pub fn remove_debt(&mut self, id: u32) {
        self.debts.retain(|d| d.id != id);
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn total_balance(&self) -> Balance {
        self.debts.iter().map(|d| d.balance).sum()
    }

    pub fn total_min_payment(&self) -> Balance {
        self.debts.iter().map(|d| d.min_payment).sum()
    }

    /// Persists the registry as JSON under `key`.
    pub async fn save(&self, store: &dyn KeyValueStore, key: &str) -> Result<()> {
        store.put(key, serde_json::to_string(self)?).await
    }

    /// Loads a previously saved registry, or an empty one if `key` is absent.
    pub async fn load(store: &dyn KeyValueStore, key: &str) -> Result<Self> {
        match store.get(key).await? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Self::new()),
        }
    }
}
