//! Running the four metrics over a set of inputs

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::InvestmentParameters;
use crate::error::Result;
use crate::metrics::{calculate_cap_rate, calculate_cash_on_cash, calculate_irr, calculate_npv};

/// Output of a single analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// NPV of the yearly cash flows (initial investment not included)
    pub npv: f64,

    /// IRR as a decimal; None when the cash flows admit no rate
    pub irr: Option<f64>,

    /// Cash-on-cash return in percent
    pub cash_on_cash: f64,

    /// Capitalization rate in percent
    pub cap_rate: f64,
}

impl InvestmentParameters {
    /// Compute NPV, IRR, cash-on-cash return and cap rate.
    ///
    /// NPV discounts the yearly cash flows alone. IRR runs over the same
    /// flows with the negated initial investment prepended at time zero.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        let npv = calculate_npv(self.discount_rate, self.cash_flows.as_slice());

        let irr_flows = self.cash_flows.with_initial_outlay(self.initial_investment);
        let irr = calculate_irr(&irr_flows);
        if irr.is_none() {
            warn!("IRR is undefined for cash flows {:?}", irr_flows);
        }

        let cash_on_cash = calculate_cash_on_cash(self.initial_investment, self.annual_cash_flow)?;
        let cap_rate = calculate_cap_rate(self.annual_income, self.property_value)?;

        info!(
            "Analyzed {} years of cash flows at {:.4} discount rate",
            self.cash_flows.len(),
            self.discount_rate
        );

        Ok(AnalysisResult {
            npv,
            irr,
            cash_on_cash,
            cap_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CashFlowSeries;
    use crate::error::AnalysisError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample_params() -> InvestmentParameters {
        InvestmentParameters {
            discount_rate: 0.08,
            cash_flows: CashFlowSeries::new(vec![10_000.0, 10_000.0, 10_000.0]),
            initial_investment: 25_000.0,
            annual_cash_flow: 10_000.0,
            property_value: 150_000.0,
            annual_income: 12_000.0,
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let result = sample_params().analyze().unwrap();

        assert_abs_diff_eq!(result.npv, 25_770.97, epsilon = 0.01);
        assert_abs_diff_eq!(result.irr.unwrap(), 0.0970, epsilon = 1e-4);
        assert_relative_eq!(result.cash_on_cash, 40.0);
        assert_relative_eq!(result.cap_rate, 8.0);
    }

    #[test]
    fn test_npv_excludes_initial_investment() {
        let mut params = sample_params();
        let before = params.analyze().unwrap();
        params.initial_investment = 1_000_000.0;
        let after = params.analyze().unwrap();

        assert_eq!(before.npv, after.npv);
        assert_ne!(before.irr, after.irr);
    }

    #[test]
    fn test_undefined_irr_is_not_an_error() {
        let mut params = sample_params();
        params.cash_flows = CashFlowSeries::new(vec![-1_000.0, -1_000.0]);

        let result = params.analyze().unwrap();
        assert!(result.irr.is_none());
        assert!(result.npv < 0.0);
    }

    #[test]
    fn test_zero_property_value_fails() {
        let mut params = sample_params();
        params.property_value = 0.0;

        assert!(matches!(
            params.analyze(),
            Err(AnalysisError::ZeroDenominator { metric: "cap rate", .. })
        ));
    }
}
