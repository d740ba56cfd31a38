use crate::domain::simulation::{MAX_MONTHS, SimulationResult};
use thiserror::Error;

pub type Result<T, E = PlanError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid debt input: {0}")]
    InvalidDebtInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The payoff plan still had open balances after the hard cap.
    /// Carries the capped result so callers can render it alongside a warning.
    #[error("plan did not pay off all debts within {MAX_MONTHS} months")]
    DidNotConverge { partial: Box<SimulationResult> },
}
