//! Collecting investment inputs from the console or from files

mod prompt;
mod loader;

pub use prompt::Prompter;
pub use loader::{load_cash_flows, load_cash_flows_from_reader, load_params};
