//! Financial metrics for a single property investment
//!
//! Every function here is a pure computation over plain `f64` inputs:
//! - Net Present Value of a cash-flow series
//! - Internal Rate of Return (Newton-Raphson with bisection fallback)
//! - Cash-on-Cash Return and Capitalization Rate

mod npv;
mod irr;
mod returns;

pub use npv::{calculate_npv, npv_at_rate};
pub use irr::calculate_irr;
pub use returns::{calculate_cash_on_cash, calculate_cap_rate};
