use chrono::NaiveDate;
use serde::Serialize;

/// Amount in minor currency units (pence).
pub type Pence = i64;

/// One line of a bank statement, reduced to the fields the totals need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    pub date: NaiveDate,
    pub description: String,
    pub paid_out: Pence,
}
