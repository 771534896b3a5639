//! Outcome table for a whole move set.

use super::{Outcome, RuleEvaluator};
use serde::Serialize;
use std::fmt;

/// Label in the top-left corner of the table
pub const CORNER_LABEL: &str = "Vs.";

/// One cell of the outcome table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Cell {
    /// Top-left corner, `"Vs."`
    Corner,
    /// Move name in the header row or column
    Header(String),
    /// Row move against column move
    Outcome(Outcome),
}

impl Cell {
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Corner => CORNER_LABEL,
            Cell::Header(name) => name,
            Cell::Outcome(outcome) => outcome.as_str(),
        }
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Header(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Row-major (len + 1) x (len + 1) grid.
///
/// Row 0 and column 0 hold the move names, interior cell `[i][j]` holds
/// the outcome of move `i - 1` against move `j - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutcomeMatrix {
    rows: Vec<Vec<Cell>>,
}

impl OutcomeMatrix {
    pub(crate) fn build(rules: &RuleEvaluator) -> Self {
        let moves = rules.moves();

        let mut header = Vec::with_capacity(moves.len() + 1);
        header.push(Cell::Corner);
        header.extend(moves.names().iter().cloned().map(Cell::Header));

        let mut rows = Vec::with_capacity(moves.len() + 1);
        rows.push(header);
        for row_move in moves.iter() {
            let mut row = Vec::with_capacity(moves.len() + 1);
            row.push(Cell::Header(moves.name(row_move).to_string()));
            row.extend(
                moves
                    .iter()
                    .map(|col_move| Cell::Outcome(rules.outcome(row_move, col_move))),
            );
            rows.push(row);
        }

        Self { rows }
    }

    /// Number of rows (and columns), headers included
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Interior outcome at grid position `(row, col)`; `None` on headers
    pub fn outcome(&self, row: usize, col: usize) -> Option<Outcome> {
        match self.get(row, col)? {
            Cell::Outcome(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Plain string grid for display layers
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_str().to_string()).collect())
            .collect()
    }
}
