//! `verify` command: recompute the HMAC from a revealed key.

use hmac_rps_core::{CommitmentTag, GameError, RevealedKey};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

/// Check that `key` and `computer_move` reproduce `hmac`
pub(crate) fn check(key: &str, hmac: &str, computer_move: &str) -> Result<bool, GameError> {
    let key = RevealedKey::from_hex(key)?;
    let tag = CommitmentTag::from_hex(hmac)?;
    let matched = tag.verify(&key, computer_move.trim());
    debug!(%tag, matched, "Verified commitment");
    Ok(matched)
}

pub(crate) fn run(key: &str, hmac: &str, computer_move: &str) -> ExitCode {
    report(
        check(key, hmac, computer_move),
        computer_move,
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

/// Print the verification outcome and map it to an exit code
pub(crate) fn report<O: Write, E: Write>(
    checked: Result<bool, GameError>,
    computer_move: &str,
    out: &mut O,
    err_out: &mut E,
) -> ExitCode {
    let computer_move = computer_move.trim();
    let (line, code) = match checked {
        Ok(true) => (
            writeln!(out, "OK: HMAC matches move {computer_move:?}"),
            ExitCode::SUCCESS,
        ),
        Ok(false) => (
            writeln!(
                out,
                "MISMATCH: HMAC does not match move {computer_move:?} under this key"
            ),
            ExitCode::FAILURE,
        ),
        Err(err) => (writeln!(err_out, "Error: {err}"), ExitCode::FAILURE),
    };
    if line.is_err() {
        return ExitCode::FAILURE;
    }
    code
}
