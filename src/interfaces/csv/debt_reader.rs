use crate::domain::debt::DebtDraft;
use crate::error::{PlanError, Result};
use std::io::Read;

/// Reads debt drafts from a CSV source with columns
/// `name, balance, interest_rate, min_payment`.
///
/// Wraps `csv::Reader` and yields `Result<DebtDraft>` lazily, trimming
/// whitespace and tolerating flexible record lengths.
pub struct DebtReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DebtReader<R> {
    /// Creates a new `DebtReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn drafts(self) -> impl Iterator<Item = Result<DebtDraft>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PlanError::from))
    }
}
