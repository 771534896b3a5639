//! Round types and the commit-reveal round protocol.

mod round;
mod types;

pub use round::{CommittedRound, RoundReveal};
pub use types::{RoundId, RoundResult, Verdict};
