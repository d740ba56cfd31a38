pub mod budget_reader;
pub mod debt_reader;
pub mod schedule_writer;
