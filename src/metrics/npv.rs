//! Present value of a cash-flow series

/// Calculate the Net Present Value of a series of end-of-period cash flows.
///
/// The first cash flow is discounted one full period:
/// `sum(flows[i] / (1 + rate)^(i + 1))`.
///
/// No guard on `rate`; at `rate == -1.0` the result is infinite or NaN.
pub fn calculate_npv(rate: f64, cashflows: &[f64]) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

/// Calculate NPV at a given periodic rate with the first cash flow undiscounted
///
/// This is the objective function the IRR solver drives to zero.
pub fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}
