//! CLI command implementations.

pub(crate) mod output;
pub(crate) mod play;
pub(crate) mod table;
pub(crate) mod verify;

use clap::ValueEnum;
use hmac_rps_core::{RuleEvaluator, ValidationError};

/// How results are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text
    Text,
    /// A single JSON document on stdout
    Json,
}

/// Trim the raw arguments and build the rules, printing the usage hint on failure
pub(crate) fn load_rules(raw: &[String]) -> Result<RuleEvaluator, ValidationError> {
    let names: Vec<&str> = raw.iter().map(|arg| arg.trim()).collect();
    RuleEvaluator::from_names(names).inspect_err(|err| {
        eprintln!("Error: {err}");
        eprintln!("Please provide an odd number >= 3 of non-repeating moves.");
        eprintln!("Example: hmac-rps play Rock Paper Scissors");
    })
}
