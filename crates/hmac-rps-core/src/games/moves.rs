//! Ordered set of distinct move names.

use crate::error::{GameError, ValidationError};
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use std::collections::HashSet;

/// A position in a [`MoveSet`].
///
/// Moves are only handed out by the set itself, so a `Move` is always in
/// range for the set that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move(usize);

impl Move {
    /// Zero-based position in the set
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based number shown in the menu
    pub fn menu_number(self) -> usize {
        self.0 + 1
    }
}

/// Ordered, odd-sized list of distinct move names.
///
/// The order defines the cycle the rules are evaluated over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Smallest playable set
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set.
    ///
    /// Names are taken as given; callers trim user input beforehand.
    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = names.len();

        if count < Self::MIN_MOVES {
            return Err(ValidationError::TooFewMoves { count });
        }
        if count % 2 == 0 {
            return Err(ValidationError::EvenMoveCount { count });
        }

        let mut seen = HashSet::with_capacity(count);
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(ValidationError::EmptyMoveName { position: i + 1 });
            }
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (always odd, at least 3)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// How many moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    /// All names in cycle order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of a move
    pub fn name(&self, mv: Move) -> &str {
        &self.names[mv.0]
    }

    /// Whether `mv` is a position in this set
    pub fn contains(&self, mv: Move) -> bool {
        mv.0 < self.names.len()
    }

    pub(crate) fn check(&self, mv: Move) -> Result<Move, GameError> {
        if self.contains(mv) {
            Ok(mv)
        } else {
            Err(GameError::UnknownMove(format!("#{}", mv.menu_number())))
        }
    }

    /// Look up a move by exact name
    pub fn find(&self, name: &str) -> Option<Move> {
        self.names.iter().position(|n| n == name).map(Move)
    }

    /// Map a one-based menu number to a move. `0` and out-of-range
    /// numbers give `None`.
    pub fn from_menu(&self, choice: usize) -> Option<Move> {
        (1..=self.names.len()).contains(&choice).then(|| Move(choice - 1))
    }

    /// All moves in cycle order
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.names.len()).map(Move)
    }

    /// Choose a move uniformly at random.
    ///
    /// Draws 32-bit values and rejects the tail above the largest multiple
    /// of `len`, so every move is equally likely.
    pub fn pick<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Move, GameError> {
        let len = self.names.len() as u64;
        let span = 1u64 << 32;
        let zone = span - span % len;

        loop {
            let mut buf = [0u8; 4];
            rng.try_fill_bytes(&mut buf)?;
            let value = u64::from(u32::from_le_bytes(buf));
            if value < zone {
                return Ok(Move((value % len) as usize));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rpsls() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap()
    }

    #[test]
    fn test_valid_move_set() {
        let set = rpsls();

        assert_eq!(set.len(), 5);
        assert_eq!(set.half(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.names()[3], "Lizard");
    }

    #[test]
    fn test_too_few_moves_rejected() {
        assert_eq!(
            MoveSet::new(Vec::<String>::new()).unwrap_err(),
            ValidationError::TooFewMoves { count: 0 }
        );
        assert_eq!(
            MoveSet::new(["Rock"]).unwrap_err(),
            ValidationError::TooFewMoves { count: 1 }
        );
        assert_eq!(
            MoveSet::new(["Rock", "Paper"]).unwrap_err(),
            ValidationError::TooFewMoves { count: 2 }
        );
    }

    #[test]
    fn test_even_count_rejected() {
        assert_eq!(
            MoveSet::new(["a", "b", "c", "d"]).unwrap_err(),
            ValidationError::EvenMoveCount { count: 4 }
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            MoveSet::new(["Rock", "Rock", "Paper"]).unwrap_err(),
            ValidationError::DuplicateMove("Rock".to_string())
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            MoveSet::new(["Rock", "", "Paper"]).unwrap_err(),
            ValidationError::EmptyMoveName { position: 2 }
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(MoveSet::new(["rock", "Rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_find_and_name() {
        let set = rpsls();
        let spock = set.find("Spock").unwrap();

        assert_eq!(spock.index(), 4);
        assert_eq!(set.name(spock), "Spock");
        assert!(set.find("spock").is_none());
    }

    #[test]
    fn test_from_menu_is_one_based() {
        let set = rpsls();

        assert_eq!(set.from_menu(0), None);
        assert_eq!(set.from_menu(1), set.find("Rock"));
        assert_eq!(set.from_menu(5), set.find("Spock"));
        assert_eq!(set.from_menu(6), None);
        assert_eq!(set.from_menu(1).unwrap().menu_number(), 1);
    }

    #[test]
    fn test_contains_checks_range() {
        let small = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let spock = rpsls().find("Spock").unwrap();

        assert!(small.contains(small.find("Scissors").unwrap()));
        assert!(!small.contains(spock));
        assert!(matches!(
            small.check(spock),
            Err(GameError::UnknownMove(ref label)) if label == "#5"
        ));
    }

    #[test]
    fn test_iter_in_order() {
        let set = rpsls();
        let names: Vec<&str> = set.iter().map(|mv| set.name(mv)).collect();

        assert_eq!(names, ["Rock", "Paper", "Scissors", "Lizard", "Spock"]);
    }

    #[test]
    fn test_pick_covers_every_move() {
        let set = rpsls();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut counts = [0usize; 5];

        for _ in 0..5_000 {
            counts[set.pick(&mut rng).unwrap().index()] += 1;
        }

        // ~1000 each; a biased or broken picker lands far outside this
        for count in counts {
            assert!((800..1200).contains(&count), "counts = {:?}", counts);
        }
    }

    #[test]
    fn test_pick_is_reproducible_with_seed() {
        let set = rpsls();
        let a = set.pick(&mut ChaCha20Rng::seed_from_u64(99)).unwrap();
        let b = set.pick(&mut ChaCha20Rng::seed_from_u64(99)).unwrap();

        assert_eq!(a, b);
    }
}
