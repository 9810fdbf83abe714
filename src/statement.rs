use std::path::Path;

use crate::{
    entry::{Pence, StatementEntry},
    error::Error,
    parser::{parse, reader_builder},
};

/// Description the bank uses for ride-hailing payments.
pub const UBER_TRIP: &str = "UBER TRIP";

/// Entries that actually took money out of the account.
pub fn outgoing_payments(entries: &[StatementEntry]) -> Vec<StatementEntry> {
    entries
        .iter()
        .filter(|entry| entry.paid_out != 0)
        .cloned()
        .collect()
}

/// Entries whose description is exactly `description`.
pub fn with_description(entries: &[StatementEntry], description: &str) -> Vec<StatementEntry> {
    entries
        .iter()
        .filter(|entry| entry.description == description)
        .cloned()
        .collect()
}

/// Sum of paid out amounts, saturating at the bounds of [`Pence`].
pub fn total_paid_out(entries: &[StatementEntry]) -> Pence {
    entries
        .iter()
        .map(|entry| entry.paid_out)
        .fold(0, Pence::saturating_add)
}

/// Whole pounds in `pence`, the remainder is dropped.
pub fn whole_pounds(pence: Pence) -> i64 {
    pence / 100
}

#[derive(Debug, Default)]
pub struct Statement {
    entries: Vec<StatementEntry>,
}

impl Statement {
    /// Read every row of a statement export.
    /// Stops at the first row that fails to parse, nothing is kept in that case.
    pub fn read<R>(rdr: csv::Reader<R>) -> Result<Self, Error>
    where
        R: std::io::Read,
    {
        let entries = parse(rdr).collect::<Result<Vec<_>, _>>()?;
        log::debug!("parsed {} statement entries", entries.len());
        Ok(Statement { entries })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let rdr = reader_builder().from_path(path)?;
        Self::read(rdr)
    }

    pub fn entries(&self) -> &[StatementEntry] {
        &self.entries
    }

    /// Outgoing payments made to `description`, in statement order.
    pub fn payments_to(&self, description: &str) -> Vec<StatementEntry> {
        let payments = with_description(&outgoing_payments(&self.entries), description);
        log::debug!("{} payments to `{}`", payments.len(), description);
        payments
    }

    pub fn total_paid_to(&self, description: &str) -> Pence {
        let total = total_paid_out(&self.payments_to(description));
        log::debug!("paid {} pence to `{}`", total, description);
        total
    }

    pub fn pounds_paid_to(&self, description: &str) -> i64 {
        whole_pounds(self.total_paid_to(description))
    }

    /// Write entries as tab separated values, with a header row.
    pub fn serialize(
        entries: &[StatementEntry],
        output: impl std::io::Write,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(output);
        for entry in entries {
            writer.serialize(entry)?
        }
        writer.flush()?;
        Ok(())
    }
}
