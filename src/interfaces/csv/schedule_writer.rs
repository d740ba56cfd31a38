use crate::domain::simulation::Snapshot;
use crate::error::Result;
use std::io::Write;

/// Writes a payoff schedule as CSV with columns
/// `month, remaining_debts, total_paid`.
///
/// Money is rounded to two decimals here; the simulation itself keeps full
/// precision.
pub struct ScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_schedule(&mut self, schedule: &[Snapshot]) -> Result<()> {
        for snapshot in schedule {
            self.writer.serialize(Snapshot {
                total_paid: snapshot.total_paid.round_dp(2),
                ..*snapshot
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
