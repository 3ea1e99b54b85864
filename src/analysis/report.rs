//! Text and JSON rendering of analysis results

use serde::Serialize;

use super::{AnalysisResult, InvestmentParameters};
use crate::error::Result;

/// Format a money amount with two decimals and thousands separators
pub fn format_money(amount: f64) -> String {
    let s = format!("{:.2}", amount);
    add_thousands_separator(&s)
}

/// Format a value that is already in percent
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a decimal IRR as a percentage, or N/A when undefined
pub fn format_irr(irr: Option<f64>) -> String {
    irr.map_or_else(|| "N/A".to_string(), |r| format_percent(r * 100.0))
}

/// Add thousands separators to a number string, keeping any leading sign
fn add_thousands_separator(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };

    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    // Leave inf/NaN untouched
    if !integer_part.chars().all(|c| c.is_ascii_digit()) {
        return s.to_string();
    }

    let chars: Vec<char> = integer_part.chars().rev().collect();
    let grouped: String = chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Render the console report
pub fn render_report(result: &AnalysisResult) -> String {
    let mut output = String::new();
    output.push_str("Investment Analysis Results:\n");
    output.push_str(&format!("Net Present Value (NPV): ${}\n", format_money(result.npv)));
    output.push_str(&format!("Internal Rate of Return (IRR): {}\n", format_irr(result.irr)));
    output.push_str(&format!("Cash-on-Cash Return: {}\n", format_percent(result.cash_on_cash)));
    output.push_str(&format!("Capitalization Rate (Cap Rate): {}\n", format_percent(result.cap_rate)));
    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a InvestmentParameters,
    results: &'a AnalysisResult,
}

/// Render inputs and results as pretty-printed JSON
pub fn render_json(params: &InvestmentParameters, result: &AnalysisResult) -> Result<String> {
    let report = JsonReport {
        inputs: params,
        results: result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CashFlowSeries;

    #[test]
    fn test_add_thousands_separator() {
        assert_eq!(add_thousands_separator("1234567.89"), "1,234,567.89");
        assert_eq!(add_thousands_separator("100"), "100");
        assert_eq!(add_thousands_separator("1000"), "1,000");
        assert_eq!(add_thousands_separator("-1234.50"), "-1,234.50");
        assert_eq!(add_thousands_separator("-123.00"), "-123.00");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_money(25_770.969_872), "25,770.97");
        assert_eq!(format_money(f64::NAN), "NaN");
        assert_eq!(format_percent(40.0), "40.00%");
        assert_eq!(format_irr(Some(0.097_010_26)), "9.70%");
        assert_eq!(format_irr(None), "N/A");
    }

    #[test]
    fn test_render_report() {
        let result = AnalysisResult {
            npv: 25_770.969_872,
            irr: Some(0.097_010_26),
            cash_on_cash: 40.0,
            cap_rate: 8.0,
        };

        let expected = "Investment Analysis Results:\n\
                        Net Present Value (NPV): $25,770.97\n\
                        Internal Rate of Return (IRR): 9.70%\n\
                        Cash-on-Cash Return: 40.00%\n\
                        Capitalization Rate (Cap Rate): 8.00%\n";
        assert_eq!(render_report(&result), expected);
    }

    #[test]
    fn test_render_json_undefined_irr() {
        let params = InvestmentParameters {
            discount_rate: 0.05,
            cash_flows: CashFlowSeries::new(vec![-500.0]),
            initial_investment: 5_000.0,
            annual_cash_flow: 500.0,
            property_value: 10_000.0,
            annual_income: 600.0,
        };
        let result = params.analyze().unwrap();
        assert!(result.irr.is_none());

        let json = render_json(&params, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["results"]["irr"].is_null());
        assert_eq!(value["inputs"]["cash_flows"][0], -500.0);
        assert_eq!(value["results"]["cash_on_cash"], 10.0);
    }
}
