//! `table` command: print the outcome table only.

use super::output::{format_table, JsonTable};
use super::{load_rules, OutputFormat};
use std::process::ExitCode;

pub(crate) fn run(raw_moves: &[String], format: OutputFormat) -> ExitCode {
    let Ok(rules) = load_rules(raw_moves) else {
        return ExitCode::FAILURE;
    };
    let table = rules.generate_table();

    match format {
        OutputFormat::Text => print!("{}", format_table(&table)),
        OutputFormat::Json => {
            let doc = JsonTable {
                moves: rules.moves(),
                table: &table,
            };
            match serde_json::to_string_pretty(&doc) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("Error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
