use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoffError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error(
        "Search did not converge after {iterations} iterations \
         (last candidate {candidate:e}, residual balance {residual:e})"
    )]
    NotConverged {
        iterations: usize,
        candidate: f64,
        residual: f64,
    },
}

pub type Result<T> = std::result::Result<T, PayoffError>;
