//! Investment inputs, the four-metric analysis, and the printed report

mod params;
mod result;
mod report;

pub use params::{CashFlowSeries, InvestmentParameters};
pub use result::AnalysisResult;
pub use report::{format_money, format_irr, format_percent, render_json, render_report};
