use plotters::drawing::DrawingAreaErrorKind;
use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid number `{value}`: {source}")]
    Parse {
        line: usize,
        value: String,
        source: ParseFloatError,
    },

    #[error("line {line}: `{value}` is not a finite number")]
    NonFinite { line: usize, value: String },

    #[error("line {line}: point `{record}` needs at least x and y")]
    MissingField { line: usize, record: String },

    #[error("{axis} range {start}..{end} cannot be drawn")]
    Range {
        axis: &'static str,
        start: f64,
        end: f64,
    },

    #[error("Drawing Error: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Drawing(err.to_string())
    }
}
