//! EDGAR-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilingError {
    #[error("Invalid input. No such ticker or CIK found on EDGAR: '{0}'")]
    IdentifierNotFound(String),

    #[error("Company '{0}' has no 13F documents on EDGAR")]
    NoHoldingsReports(String),

    #[error("Identifier '{0}' cannot be used as an output file name")]
    InvalidIdentifier(String),

    #[error("No documents link found on the EDGAR search page")]
    MissingDocumentsLink,

    #[error("No raw text (.txt) link found on filing detail page {0}")]
    MissingRawTextLink(String),

    #[error("This report is empty! No infoTable entries found")]
    EmptyReport,

    #[error("EDGAR request failed (status {status_code}): {url}")]
    HttpStatus {
        status_code: u16,
        url: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Malformed XML in filing: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to write table: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for FilingError {
    fn from(err: anyhow::Error) -> Self {
        FilingError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FilingError>;
