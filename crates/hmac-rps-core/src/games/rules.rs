//! Cyclic dominance rules for any odd number of moves.
//!
//! Each move beats the `len / 2` moves that precede it in the cycle and
//! loses to the `len / 2` moves that follow it:
//!
//! d = (index(a) - index(b)) mod len
//! d == 0          -> Draw
//! 1 <= d <= len/2 -> a wins
//! otherwise       -> a loses

use super::{Move, MoveSet, OutcomeMatrix};
use crate::error::{GameError, ValidationError};
use crate::protocol::Verdict;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against another, from the first move's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Label used in the outcome table
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same result seen from the other side
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Judges moves of one [`MoveSet`]
#[derive(Clone, Debug)]
pub struct RuleEvaluator {
    moves: MoveSet,
}

impl RuleEvaluator {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    /// Validate names and build the evaluator in one step
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MoveSet::new(names).map(Self::new)
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Outcome of `a` against `b`, from `a`'s side
    pub fn outcome(&self, a: Move, b: Move) -> Outcome {
        let len = self.moves.len() as isize;
        // rem_euclid keeps the distance in 0..len for negative differences
        let distance = (a.index() as isize - b.index() as isize).rem_euclid(len) as usize;

        if distance == 0 {
            Outcome::Draw
        } else if distance <= self.moves.half() {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Outcome by move names
    pub fn outcome_by_name(&self, a: &str, b: &str) -> Result<Outcome, GameError> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        Ok(self.outcome(a, b))
    }

    /// Who won the round, from the human's side
    pub fn determine_winner(&self, user_move: Move, computer_move: Move) -> Verdict {
        match self.outcome(user_move, computer_move) {
            Outcome::Win => Verdict::YouWin,
            Outcome::Lose => Verdict::ComputerWins,
            Outcome::Draw => Verdict::Draw,
        }
    }

    /// Full (len + 1) x (len + 1) table of outcomes, row move against column move
    pub fn generate_table(&self) -> OutcomeMatrix {
        OutcomeMatrix::build(self)
    }

    fn lookup(&self, name: &str) -> Result<Move, GameError> {
        self.moves
            .find(name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }
}
