//! Move sets and the cyclic dominance rules.

mod moves;
mod rules;
mod table;

pub use moves::{Move, MoveSet};
pub use rules::{Outcome, RuleEvaluator};
pub use table::{Cell, OutcomeMatrix};
