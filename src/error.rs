use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("invalid export URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch sheet data (status {status})")]
    Fetch { status: u16 },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("sheet has no header row")]
    EmptySheet,

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
