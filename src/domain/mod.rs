pub mod budget;
pub mod debt;
pub mod education;
pub mod growth;
pub mod money;
pub mod ports;
pub mod session;
pub mod simulation;
