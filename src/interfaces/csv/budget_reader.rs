use crate::domain::budget::BudgetDraft;
use crate::error::{PlanError, Result};
use std::io::Read;

/// Reads budget rows from a CSV source with columns `name, amount, kind`
/// where `kind` is `income` or `expense`.
pub struct BudgetReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BudgetReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn drafts(self) -> impl Iterator<Item = Result<BudgetDraft>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PlanError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::budget::EntryKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "name, amount, kind\nSalary, 35000, income\nRent, 12000, expense";
        let reader = BudgetReader::new(data.as_bytes());
        let results: Vec<Result<BudgetDraft>> = reader.drafts().collect();

        assert_eq!(results.len(), 2);
        let salary = results[0].as_ref().unwrap();
        assert_eq!(salary.amount, dec!(35000));
        assert_eq!(salary.kind, EntryKind::Income);
        let rent = results[1].as_ref().unwrap();
        assert_eq!(rent.kind, EntryKind::Expense);
    }

    #[test]
    fn test_reader_unknown_kind() {
        let data = "name, amount, kind\nSalary, 35000, windfall";
        let reader = BudgetReader::new(data.as_bytes());
        let results: Vec<Result<BudgetDraft>> = reader.drafts().collect();

        assert!(results[0].is_err());
    }
}
