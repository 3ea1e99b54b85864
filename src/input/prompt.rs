//! Line-based console prompts

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::analysis::{CashFlowSeries, InvestmentParameters};
use crate::error::{AnalysisError, Result};

/// Asks for each input in turn over any line reader and writer
///
/// # Example
/// ```ignore
/// let stdin = std::io::stdin();
/// let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
/// let params = prompter.collect_parameters(None)?;
/// ```
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "Real Estate Investment Analysis Tool")?;
        writeln!(self.output, "-----------------------------------")?;
        Ok(())
    }

    /// Prompt for every input in order.
    ///
    /// When `cash_flows` is supplied the year count and per-year prompts are skipped.
    pub fn collect_parameters(
        &mut self,
        cash_flows: Option<CashFlowSeries>,
    ) -> Result<InvestmentParameters> {
        let discount_rate = self.read_f64(
            "Enter the discount rate (as a decimal, e.g., 0.08 for 8%): ",
            "discount rate",
        )?;

        let cash_flows = match cash_flows {
            Some(series) => series,
            None => self.collect_cash_flows()?,
        };

        let initial_investment =
            self.read_f64("Enter the initial investment amount: ", "initial investment")?;
        let annual_cash_flow =
            self.read_f64("Enter the expected annual cash flow: ", "annual cash flow")?;
        let property_value = self.read_f64("Enter the property value: ", "property value")?;
        let annual_income = self.read_f64("Enter the expected annual income: ", "annual income")?;

        Ok(InvestmentParameters {
            discount_rate,
            cash_flows,
            initial_investment,
            annual_cash_flow,
            property_value,
            annual_income,
        })
    }

    /// Prompt for the number of years, then one cash flow per year
    pub fn collect_cash_flows(&mut self) -> Result<CashFlowSeries> {
        let years = self.read_count("Enter the number of years: ", "number of years")?;
        writeln!(self.output, "Enter the cash flows for each year:")?;

        let mut flows = Vec::with_capacity(years as usize);
        for year in 1..=years {
            let flow = self.read_f64(&format!("Year {}: ", year), &format!("year {} cash flow", year))?;
            flows.push(flow);
        }

        debug!("Collected {} yearly cash flows", flows.len());
        Ok(CashFlowSeries::new(flows))
    }

    fn read_f64(&mut self, prompt: &str, field: &str) -> Result<f64> {
        self.read_parsed(prompt, field)
    }

    fn read_count(&mut self, prompt: &str, field: &str) -> Result<u32> {
        self.read_parsed(prompt, field)
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str, field: &str) -> Result<T> {
        let line = self.read_line(prompt, field)?;
        let value = line.trim();
        value.parse().map_err(|_| AnalysisError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    fn read_line(&mut self, prompt: &str, field: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AnalysisError::UnexpectedEof {
                field: field.to_string(),
            });
        }
        Ok(buf)
    }
}
