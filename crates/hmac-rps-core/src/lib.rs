//! HMAC RPS Core Library
//!
//! This crate provides the commitment scheme and the cyclic dominance rules
//! for a generalized rock-paper-scissors game played against the computer
//! over any odd number (at least three) of distinct moves.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{CommitmentTag, RevealedKey, SecretKey, KEY_LEN};
pub use error::{GameError, ValidationError};
pub use games::{Cell, Move, MoveSet, Outcome, OutcomeMatrix, RuleEvaluator};
pub use protocol::{CommittedRound, RoundId, RoundResult, RoundReveal, Verdict};
