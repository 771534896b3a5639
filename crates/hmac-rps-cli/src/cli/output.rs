//! Output formatting utilities for CLI.

use hmac_rps_core::{CommitmentTag, MoveSet, OutcomeMatrix, RoundId, RoundReveal};
use serde::Serialize;

/// JSON report of a played or abandoned round.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(super) enum JsonRound<'a> {
    /// Human chose a move; key disclosed.
    Completed {
        #[serde(flatten)]
        round: &'a RoundReveal,
    },
    /// Human chose 0; key never disclosed.
    Abandoned { id: RoundId, hmac: CommitmentTag },
}

/// JSON document for the `table` command.
#[derive(Debug, Serialize)]
pub(super) struct JsonTable<'a> {
    pub(super) moves: &'a MoveSet,
    pub(super) table: &'a OutcomeMatrix,
}

/// Render the outcome table with every column padded to its widest cell.
pub(super) fn format_table(table: &OutcomeMatrix) -> String {
    let widths: Vec<usize> = (0..table.size())
        .map(|col| {
            table
                .rows()
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.as_str().chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    for row in table.rows() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Numbered menu of moves followed by the exit option.
pub(super) fn format_menu(moves: &MoveSet) -> String {
    let mut output = String::from("Menu:\n");
    for mv in moves.iter() {
        output.push_str(&format!("{} - {}\n", mv.menu_number(), moves.name(mv)));
    }
    output.push_str("0 - Exit\n");
    output
}

/// Closing lines of a completed round.
pub(super) fn format_reveal(reveal: &RoundReveal) -> String {
    format!(
        "Your move: {}\nComputer's move: {}\nResult: {}\nHMAC key: {}\n",
        reveal.result.human_move, reveal.result.computer_move, reveal.result.verdict, reveal.key
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmac_rps_core::{CommittedRound, RuleEvaluator};
    use rand::rngs::OsRng;

    fn rps() -> RuleEvaluator {
        RuleEvaluator::from_names(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let text = format_table(&rps().generate_table());

        assert_eq!(
            text,
            "Vs.       Rock  Paper  Scissors\n\
             Rock      Draw  Lose   Win\n\
             Paper     Win   Draw   Lose\n\
             Scissors  Lose  Win    Draw\n"
        );
    }

    #[test]
    fn test_format_menu() {
        let rules = rps();

        assert_eq!(
            format_menu(rules.moves()),
            "Menu:\n1 - Rock\n2 - Paper\n3 - Scissors\n0 - Exit\n"
        );
    }

    #[test]
    fn test_format_reveal() {
        let rules = rps();
        let rock = rules.moves().find("Rock").unwrap();
        let reveal = CommittedRound::with_move(&rules, rock, &mut OsRng)
            .unwrap()
            .play(rock)
            .unwrap();

        let text = format_reveal(&reveal);

        assert!(text.starts_with("Your move: Rock\nComputer's move: Rock\nResult: Draw\nHMAC key: "));
        assert!(text.ends_with(&format!("{}\n", reveal.key.to_hex())));
    }

    #[test]
    fn test_json_round_tags_status() {
        let rules = rps();
        let round = CommittedRound::start(&rules, &mut OsRng).unwrap();
        let id = round.id();
        let hmac = *round.tag();

        let json = serde_json::to_value(JsonRound::Abandoned { id, hmac }).unwrap();
        assert_eq!(json["status"], "abandoned");
        assert_eq!(json["hmac"], hmac.to_string());

        let paper = rules.moves().find("Paper").unwrap();
        let reveal = round.play(paper).unwrap();
        let json = serde_json::to_value(JsonRound::Completed { round: &reveal }).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["human_move"], "Paper");
        assert_eq!(json["hmac_key"], reveal.key.to_hex());
    }

    #[test]
    fn test_json_table() {
        let rules = rps();
        let table = rules.generate_table();
        let json = serde_json::to_value(JsonTable {
            moves: rules.moves(),
            table: &table,
        })
        .unwrap();

        assert_eq!(json["moves"][2], "Scissors");
        assert_eq!(json["table"][3][2], "Win");
    }
}
