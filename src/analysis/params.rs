//! Inputs to an investment analysis

use serde::{Deserialize, Serialize};

/// Cash flow per period; index 0 is year 1
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    pub fn new(flows: Vec<f64>) -> Self {
        Self(flows)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full series for IRR: the negated initial investment at time zero,
    /// followed by each period's cash flow
    pub fn with_initial_outlay(&self, initial_investment: f64) -> Vec<f64> {
        let mut flows = Vec::with_capacity(self.0.len() + 1);
        flows.push(-initial_investment);
        flows.extend_from_slice(&self.0);
        flows
    }
}

/// Everything needed to run the analysis
///
/// Fields are independent; nothing here checks that they are mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Annual discount rate as a decimal (0.08 for 8%)
    pub discount_rate: f64,

    /// Projected cash flow for each year, used for NPV and IRR
    pub cash_flows: CashFlowSeries,

    /// Cash invested up front
    pub initial_investment: f64,

    /// Expected annual pre-tax cash flow, used for cash-on-cash return
    pub annual_cash_flow: f64,

    /// Current property value
    pub property_value: f64,

    /// Expected annual net operating income, used for cap rate
    pub annual_income: f64,
}
