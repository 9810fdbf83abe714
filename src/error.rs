use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to read statement, reason: `{0}`")]
    ReadFailure(String),
    #[error("wanted {expected} columns, got {found}")]
    MalformedRow { expected: usize, found: usize },
    #[error("invalid date `{value}`, expected a date like `21 November 2019`")]
    InvalidDate { value: String },
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::ReadFailure(e.to_string())
    }
}
