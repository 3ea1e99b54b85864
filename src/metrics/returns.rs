//! Simple annual return ratios

use crate::error::{AnalysisError, Result};

/// Cash-on-Cash Return as a percentage: annual pre-tax cash flow over cash invested
pub fn calculate_cash_on_cash(initial_investment: f64, annual_cash_flow: f64) -> Result<f64> {
    if initial_investment == 0.0 {
        return Err(AnalysisError::ZeroDenominator {
            metric: "cash-on-cash return",
            denominator: "initial investment",
        });
    }
    Ok(annual_cash_flow / initial_investment * 100.0)
}

/// Capitalization Rate as a percentage: annual net income over property value
pub fn calculate_cap_rate(annual_income: f64, property_value: f64) -> Result<f64> {
    if property_value == 0.0 {
        return Err(AnalysisError::ZeroDenominator {
            metric: "cap rate",
            denominator: "property value",
        });
    }
    Ok(annual_income / property_value * 100.0)
}
