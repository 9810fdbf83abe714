use chrono::NaiveDate;

use crate::{
    entry::StatementEntry,
    error::Error,
    money::parse_money,
};

/// Columns of an export row: date, type, description, paid in, paid out, balance.
pub const FIELD_COUNT: usize = 6;
const DATE_FIELD: usize = 0;
const DESCRIPTION_FIELD: usize = 2;
const PAID_OUT_FIELD: usize = 4;

/// e.g. `21 November 2019`
const DATE_FORMAT: &str = "%d %B %Y";
/// Accepted spellings of a parsed date: the day with or without a leading zero.
const CANONICAL_DATE_FORMATS: [&str; 2] = ["%-d %B %Y", "%d %B %Y"];

/// chrono lets a format space match any run of whitespace (none included) and
/// `%B` match abbreviated names, so the text must also spell out `date` in full.
fn parse_date(text: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .filter(|date| {
            CANONICAL_DATE_FORMATS
                .iter()
                .any(|format| date.format(format).to_string().eq_ignore_ascii_case(text))
        })
        .ok_or_else(|| Error::InvalidDate {
            value: text.to_string(),
        })
}

/// Build an entry from the raw fields of one statement row.
/// Type, paid in and balance are not needed for the totals and are ignored.
pub fn parse_entry<S: AsRef<str>>(row: &[S]) -> Result<StatementEntry, Error> {
    if row.len() != FIELD_COUNT {
        return Err(Error::MalformedRow {
            expected: FIELD_COUNT,
            found: row.len(),
        });
    }

    let date = parse_date(row[DATE_FIELD].as_ref())?;

    Ok(StatementEntry {
        date,
        description: row[DESCRIPTION_FIELD].as_ref().to_string(),
        paid_out: parse_money(row[PAID_OUT_FIELD].as_ref())?,
    })
}

/// Reader settings for statement exports: tab separated, header row first,
/// rows are not required to share a field count (a short row is reported by
/// [`parse_entry`] instead of the reader). Exports never quote fields, so a `"`
/// is kept as part of the text.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false);
    builder
}

pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<StatementEntry, Error>>
where
    R: std::io::Read,
{
    rdr.into_records().map(|record| -> Result<StatementEntry, Error> {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        parse_entry(&fields).map_err(|e| {
            if let Some(position) = record.position() {
                log::debug!("rejected statement row at line {}: {}", position.line(), e);
            }
            e
        })
    })
}
