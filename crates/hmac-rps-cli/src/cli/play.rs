//! `play` command: one committed round against the computer.

use super::output::{format_menu, format_reveal, format_table, JsonRound};
use super::{load_rules, OutputFormat};
use hmac_rps_core::{CommitmentTag, CommittedRound, RoundId, RoundReveal};
use rand::rngs::OsRng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::warn;

/// How an interactive round ended
#[derive(Debug)]
pub(crate) enum RoundEnd {
    /// Human picked a move
    Completed(RoundReveal),
    /// Human picked 0
    Abandoned { id: RoundId, hmac: CommitmentTag },
    /// Answer was not a menu number; the round is dropped unrevealed
    InvalidChoice(String),
}

/// Show the commitment, the table and the menu, then read the human's
/// choice and finish the round.
pub(crate) fn play_round<I: BufRead, W: Write>(
    round: CommittedRound<'_>,
    input: &mut I,
    out: &mut W,
) -> io::Result<RoundEnd> {
    let rules = round.rules();
    writeln!(out, "Computer's HMAC: {}", round.tag())?;
    writeln!(out, "Moves Table:")?;
    write!(out, "{}", format_table(&rules.generate_table()))?;
    write!(out, "{}", format_menu(rules.moves()))?;
    write!(out, "Your choice (enter the number): ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    let end = match answer.parse::<usize>() {
        Ok(0) => {
            let hmac = *round.tag();
            RoundEnd::Abandoned {
                id: round.abandon(),
                hmac,
            }
        }
        Ok(choice) => match rules.moves().from_menu(choice) {
            Some(human_move) => round.play(human_move).map_or_else(
                |_| RoundEnd::InvalidChoice(answer.to_string()),
                RoundEnd::Completed,
            ),
            None => RoundEnd::InvalidChoice(answer.to_string()),
        },
        Err(_) => RoundEnd::InvalidChoice(answer.to_string()),
    };

    if let RoundEnd::InvalidChoice(answer) = &end {
        warn!(answer = %answer, "Menu choice rejected, round dropped");
    }
    Ok(end)
}

/// Print how the round ended and map it to an exit code.
///
/// `out` receives the closing text or the JSON document, `err_out` the
/// invalid-input message.
pub(crate) fn finish<O: Write, E: Write>(
    end: RoundEnd,
    format: OutputFormat,
    out: &mut O,
    err_out: &mut E,
) -> ExitCode {
    let written = match (end, format) {
        (RoundEnd::InvalidChoice(answer), _) => {
            let _ = writeln!(
                err_out,
                "Error: Invalid input {answer:?}. Please enter a valid number from the menu."
            );
            return ExitCode::FAILURE;
        }
        (RoundEnd::Completed(reveal), OutputFormat::Text) => {
            write!(out, "{}", format_reveal(&reveal))
        }
        (RoundEnd::Abandoned { .. }, OutputFormat::Text) => writeln!(out, "Goodbye!"),
        (RoundEnd::Completed(reveal), OutputFormat::Json) => {
            write_json(out, &JsonRound::Completed { round: &reveal })
        }
        (RoundEnd::Abandoned { id, hmac }, OutputFormat::Json) => {
            write_json(out, &JsonRound::Abandoned { id, hmac })
        }
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "Error: {err}");
            ExitCode::FAILURE
        }
    }
}

pub(crate) fn run(raw_moves: &[String], format: OutputFormat) -> ExitCode {
    let Ok(rules) = load_rules(raw_moves) else {
        return ExitCode::FAILURE;
    };

    let round = match CommittedRound::start(&rules, &mut OsRng) {
        Ok(round) => round,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // JSON mode keeps stdout for the final document
    let mut input = io::stdin().lock();
    let end = match format {
        OutputFormat::Text => play_round(round, &mut input, &mut io::stdout()),
        OutputFormat::Json => play_round(round, &mut input, &mut io::stderr()),
    };
    match end {
        Ok(end) => finish(end, format, &mut io::stdout(), &mut io::stderr()),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, doc: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(doc).map_err(io::Error::other)?;
    writeln!(out, "{json}")
}
