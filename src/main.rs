//! Investment Analysis CLI
//!
//! Prompts for (or loads) investment inputs and prints NPV, IRR,
//! cash-on-cash return and cap rate.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use investment_analysis::analysis::{render_json, render_report};
use investment_analysis::input::{load_cash_flows, load_params};
use investment_analysis::{CashFlowSeries, InvestmentParameters, Prompter};

#[derive(Debug, Parser)]
#[command(name = "investment_analysis", version, about = "Real estate investment analysis")]
struct Cli {
    /// Load every input from a JSON file instead of prompting
    #[arg(long, value_name = "FILE", conflicts_with = "cash_flows")]
    params: Option<PathBuf>,

    /// Load the yearly cash flows from a CSV file (columns: year,cash_flow)
    #[arg(long, value_name = "FILE")]
    cash_flows: Option<PathBuf>,

    /// Print inputs and results as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run(&cli, io::stdin().lock(), io::stdout(), io::stderr())
}

/// Gather inputs, analyze and print.
///
/// With `--json` the banner and prompts go to `prompts` so `out` carries only the JSON document.
fn run<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    input: R,
    mut out: W,
    prompts: E,
) -> anyhow::Result<()> {
    let params = match &cli.params {
        Some(path) => load_params(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => {
            let cash_flows = cli
                .cash_flows
                .as_ref()
                .map(|path| {
                    load_cash_flows(path)
                        .with_context(|| format!("Failed to load cash flows from {}", path.display()))
                })
                .transpose()?;

            if cli.json {
                prompt_for_parameters(Prompter::new(input, prompts), cash_flows)?
            } else {
                prompt_for_parameters(Prompter::new(input, &mut out), cash_flows)?
            }
        }
    };

    let result = params.analyze()?;

    if cli.json {
        writeln!(out, "{}", render_json(&params, &result)?)?;
    } else {
        writeln!(out, "\n{}", render_report(&result).trim_end())?;
    }

    Ok(())
}

fn prompt_for_parameters<R: BufRead, W: Write>(
    mut prompter: Prompter<R, W>,
    cash_flows: Option<CashFlowSeries>,
) -> investment_analysis::Result<InvestmentParameters> {
    prompter.print_banner()?;
    prompter.collect_parameters(cash_flows)
}
