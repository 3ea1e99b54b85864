//! Error types for investment analysis

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid value for {field}: {value:?} is not a number")]
    InvalidInput { field: String, value: String },

    #[error("Input ended before {field} was entered")]
    UnexpectedEof { field: String },

    #[error("Cannot compute {metric}: {denominator} is zero")]
    ZeroDenominator {
        metric: &'static str,
        denominator: &'static str,
    },

    #[error("Cash flows out of order: expected year {expected}, found year {found}")]
    CashFlowOrder { expected: u32, found: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
