//! Load investment inputs from files
//!
//! - Full parameter sets from JSON (same shape `InvestmentParameters` serializes to)
//! - Cash-flow series from CSV with a `year,cash_flow` header

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;
use log::info;

use crate::analysis::{CashFlowSeries, InvestmentParameters};
use crate::error::{AnalysisError, Result};

/// Raw CSV row of a cash-flow file
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    year: u32,
    cash_flow: f64,
}

/// Load a full parameter set from a JSON file
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<InvestmentParameters> {
    let file = File::open(path.as_ref())?;
    let params: InvestmentParameters = serde_json::from_reader(BufReader::new(file))?;
    info!(
        "Loaded parameters from {} ({} years of cash flows)",
        path.as_ref().display(),
        params.cash_flows.len()
    );
    Ok(params)
}

/// Load a cash-flow series from a CSV file
pub fn load_cash_flows<P: AsRef<Path>>(path: P) -> Result<CashFlowSeries> {
    let file = File::open(path.as_ref())?;
    let series = load_cash_flows_from_reader(file)?;
    info!(
        "Loaded {} years of cash flows from {}",
        series.len(),
        path.as_ref().display()
    );
    Ok(series)
}

/// Load a cash-flow series from any reader (e.g., string buffer)
///
/// Rows must run year 1, 2, 3, ... with no gaps.
pub fn load_cash_flows_from_reader<R: Read>(reader: R) -> Result<CashFlowSeries> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut flows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let expected = flows.len() as u32 + 1;
        if row.year != expected {
            return Err(AnalysisError::CashFlowOrder {
                expected,
                found: row.year,
            });
        }
        flows.push(row.cash_flow);
    }

    Ok(CashFlowSeries::new(flows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_cash_flows_from_reader() {
        let data = "year,cash_flow\n1,10000\n2,-2500.5\n3,12000\n";
        let series = load_cash_flows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(series.as_slice(), &[10_000.0, -2_500.5, 12_000.0]);
    }

    #[test]
    fn test_header_only_is_empty_series() {
        let series = load_cash_flows_from_reader("year,cash_flow\n".as_bytes()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_out_of_order_years() {
        let data = "year,cash_flow\n1,100\n3,300\n";
        let err = load_cash_flows_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::CashFlowOrder { expected: 2, found: 3 }));
    }

    #[test]
    fn test_non_numeric_cash_flow() {
        let data = "year,cash_flow\n1,lots\n";
        let err = load_cash_flows_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::Csv(_)));
    }

    #[test]
    fn test_load_params_file() {
        let path = std::env::temp_dir().join(format!("investment_params_{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"discount_rate":0.08,"cash_flows":[10000,10000,10000],"initial_investment":25000,
               "annual_cash_flow":10000,"property_value":150000,"annual_income":12000}}"#
        )
        .unwrap();
        drop(file);

        let params = load_params(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(params.cash_flows.as_slice(), &[10_000.0, 10_000.0, 10_000.0]);
        assert_eq!(params.annual_income, 12_000.0);
    }

    #[test]
    fn test_missing_params_file() {
        let err = load_params("/nonexistent/params.json").unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
