//! Commit-reveal round between the human and the computer.
//!
//! 1. `CommittedRound::start` picks the computer's move, draws a fresh key
//!    and publishes `HMAC(key, move)`.
//! 2. The human chooses a move while only the tag is known.
//! 3. `CommittedRound::play` locks in the human's move, judges the round and
//!    only then hands out the key.
//!
//! `play` consumes the committed round, so the key cannot be obtained before
//! the human's move is fixed.

use super::{RoundId, RoundResult};
use crate::crypto::{CommitmentTag, RevealedKey, SecretKey};
use crate::error::GameError;
use crate::games::{Move, RuleEvaluator};
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// A round after the computer has committed and before the human has moved.
///
/// The round borrows the evaluator it was committed on, so it is always
/// judged and revealed against the same move set.
pub struct CommittedRound<'r> {
    id: RoundId,
    rules: &'r RuleEvaluator,
    computer_move: Move,
    key: SecretKey,
    tag: CommitmentTag,
}

impl<'r> CommittedRound<'r> {
    /// Pick the computer's move at random and commit to it
    pub fn start<R: RngCore + CryptoRng>(
        rules: &'r RuleEvaluator,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let computer_move = rules.moves().pick(rng)?;
        Self::with_move(rules, computer_move, rng)
    }

    /// Commit to a given computer move under a fresh key.
    ///
    /// Fails with [`GameError::UnknownMove`] if the move is not part of `rules`.
    pub fn with_move<R: RngCore + CryptoRng>(
        rules: &'r RuleEvaluator,
        computer_move: Move,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let computer_move = rules.moves().check(computer_move)?;
        let key = SecretKey::generate(rng)?;
        let tag = CommitmentTag::commit(&key, rules.moves().name(computer_move));
        let id = RoundId::new();

        debug!(round_id = %id, moves = rules.moves().len(), hmac = %tag, "Committed computer move");

        Ok(Self {
            id,
            rules,
            computer_move,
            key,
            tag,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// The published commitment
    pub fn tag(&self) -> &CommitmentTag {
        &self.tag
    }

    /// The evaluator this round was committed on
    pub fn rules(&self) -> &'r RuleEvaluator {
        self.rules
    }

    /// Lock in the human's move, judge it and disclose the key.
    ///
    /// A move outside this round's set is rejected with
    /// [`GameError::UnknownMove`]; the round is consumed and the key is not
    /// disclosed.
    pub fn play(self, human_move: Move) -> Result<RoundReveal, GameError> {
        let moves = self.rules.moves();
        let human_move = moves.check(human_move)?;
        let verdict = self.rules.determine_winner(human_move, self.computer_move);
        let result = RoundResult {
            human_move: moves.name(human_move).to_string(),
            computer_move: moves.name(self.computer_move).to_string(),
            verdict,
        };

        info!(
            round_id = %self.id,
            human = %result.human_move,
            computer = %result.computer_move,
            %verdict,
            "Round completed"
        );

        Ok(RoundReveal {
            id: self.id,
            result,
            tag: self.tag,
            key: self.key.reveal(),
        })
    }

    /// Walk away without playing. The key is dropped unrevealed.
    pub fn abandon(self) -> RoundId {
        info!(round_id = %self.id, "Round abandoned");
        self.id
    }
}

// Leaves out the computer's move and the key until the reveal
impl fmt::Debug for CommittedRound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedRound")
            .field("id", &self.id)
            .field("moves", &self.rules.moves().len())
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// A finished round with everything needed to check the commitment
#[derive(Clone, Debug, Serialize)]
pub struct RoundReveal {
    pub id: RoundId,
    #[serde(flatten)]
    pub result: RoundResult,
    #[serde(rename = "hmac")]
    pub tag: CommitmentTag,
    #[serde(rename = "hmac_key")]
    pub key: RevealedKey,
}

impl RoundReveal {
    /// Recompute the tag from the disclosed key and the computer's move
    pub fn verify(&self) -> bool {
        self.tag.verify(&self.key, &self.result.computer_move)
    }
}
