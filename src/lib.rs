//! Investment Analysis - return metrics for real estate investments
//!
//! This library provides:
//! - Net Present Value and Internal Rate of Return of yearly cash flows
//! - Cash-on-Cash Return and Capitalization Rate
//! - Console prompting and JSON/CSV loading of inputs
//! - Text and JSON reports

pub mod error;
pub mod metrics;
pub mod analysis;
pub mod input;

// Re-export commonly used types
pub use error::{AnalysisError, Result};
pub use analysis::{AnalysisResult, CashFlowSeries, InvestmentParameters};
pub use input::Prompter;
