use crate::domain::money::Balance;
use crate::error::{PlanError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

/// One line of a monthly budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub id: u32,
    pub name: String,
    pub amount: Balance,
    pub kind: EntryKind,
}

/// An unvalidated budget row from a CSV file or a form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetDraft {
    pub name: String,
    pub amount: Decimal,
    pub kind: EntryKind,
}

/// Aggregates over a [`BudgetSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub income: Balance,
    pub expenses: Balance,
    /// Income minus expenses; negative when the sheet overspends.
    pub net: Balance,
}

/// A month's income and expense entries.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSheet {
    entries: Vec<BudgetEntry>,
    next_id: u32,
}

impl BudgetSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, draft: BudgetDraft) -> Result<u32> {
        if draft.amount < Decimal::ZERO {
            return Err(PlanError::InvalidInput(format!(
                "'{}': amount must not be negative",
                draft.name
            )));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(BudgetEntry {
            id,
            name: draft.name,
            amount: Balance::new(draft.amount),
            kind: draft.kind,
        });
        Ok(id)
    }

    /// Removes an entry by id. Unknown ids are a no-op.
    pub fn remove_entry(&mut self, id: u32) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn totals(&self) -> BudgetTotals {
        let income: Balance = self
            .entries
            .iter()
            .filter(|e| e.kind == EntryKind::Income)
            .map(|e| e.amount)
            .sum();
        let expenses: Balance = self
            .entries
            .iter()
            .filter(|e| e.kind == EntryKind::Expense)
            .map(|e| e.amount)
            .sum();
        BudgetTotals {
            income,
            expenses,
            net: income - expenses,
        }
    }
}
