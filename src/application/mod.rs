//! Application layer: the payoff simulator, the summary projection and the
//! session manager that orchestrate the domain types.

pub mod session;
pub mod simulator;
pub mod summary;
