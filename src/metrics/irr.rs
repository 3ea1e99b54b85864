//! Internal Rate of Return (IRR) calculation

use log::debug;

use super::npv::npv_at_rate;

const INITIAL_GUESS: f64 = 0.10;
const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;
const MAX_BRACKET_STEPS: usize = 40;
/// Smallest growth factor `1 + r` the bracket search will try
const MIN_GROWTH: f64 = 1e-9;

/// Calculate the Internal Rate of Return for a series of cash flows
/// using the Newton-Raphson method.
///
/// Any rate above -100% is admissible. Newton steps that would cross -100%
/// instead halve the distance to it.
///
/// # Arguments
/// * `cashflows` - Cash flow per period, `cashflows[0]` at time zero
///   (typically the negative initial outlay)
///
/// # Returns
/// * `Option<f64>` - Periodic IRR as a decimal (e.g., 0.10 for 10%), or None
///   if the series has no real root with `1 + r > 0`
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // At least one sign change is required for a root to exist
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        debug!("IRR undefined: cash flows never change sign");
        return None;
    }

    let mut rate = INITIAL_GUESS;

    for iteration in 0..MAX_ITERATIONS {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 || !npv.is_finite() || !dnpv.is_finite() {
            debug!("IRR derivative unusable at rate {rate}, switching to bisection");
            return calculate_irr_bisection(cashflows);
        }

        let mut new_rate = rate - npv / dnpv;
        if new_rate <= -1.0 {
            new_rate = (rate - 1.0) / 2.0;
        }

        if (new_rate - rate).abs() < TOLERANCE {
            if !is_root(cashflows, new_rate) {
                debug!("Newton-Raphson stalled at rate {new_rate}, switching to bisection");
                return calculate_irr_bisection(cashflows);
            }
            debug!("IRR converged to {new_rate} after {} iterations", iteration + 1);
            return Some(new_rate);
        }

        rate = new_rate;
    }

    debug!("Newton-Raphson did not converge, switching to bisection");
    calculate_irr_bisection(cashflows)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

/// Residual check scaled by the largest cash flow
fn is_root(cashflows: &[f64], rate: f64) -> bool {
    let scale = cashflows.iter().fold(1.0_f64, |acc, cf| acc.max(cf.abs()));
    npv_at_rate(cashflows, rate).abs() <= 1e-6 * scale
}

/// Find an interval around the initial guess over which NPV changes sign.
///
/// Alternates between doubling `1 + high` and halving `1 + low`, so the
/// sign change nearest the guess is found first.
fn bracket_root(cashflows: &[f64]) -> Option<(f64, f64)> {
    let mut high = INITIAL_GUESS;
    let mut npv_high = npv_at_rate(cashflows, high);
    let mut low = INITIAL_GUESS;
    let mut npv_low = npv_high;
    let mut low_exhausted = false;

    for _ in 0..MAX_BRACKET_STEPS {
        let next_high = (1.0 + high) * 2.0 - 1.0;
        let npv_next_high = npv_at_rate(cashflows, next_high);
        if npv_next_high * npv_high <= 0.0 {
            return Some((high, next_high));
        }
        high = next_high;
        npv_high = npv_next_high;

        if !low_exhausted {
            let next_low = (1.0 + low) / 2.0 - 1.0;
            let npv_next_low = npv_at_rate(cashflows, next_low);
            if !npv_next_low.is_finite() || 1.0 + next_low < MIN_GROWTH {
                low_exhausted = true;
            } else if npv_next_low * npv_low <= 0.0 {
                return Some((next_low, low));
            } else {
                low = next_low;
                npv_low = npv_next_low;
            }
        }
    }

    None
}

/// Fallback IRR calculation using bisection method
fn calculate_irr_bisection(cashflows: &[f64]) -> Option<f64> {
    let Some((mut low, mut high)) = bracket_root(cashflows) else {
        debug!("IRR undefined: no sign change found for any rate above -100%");
        return None;
    };

    let mut npv_low = npv_at_rate(cashflows, low);

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}
