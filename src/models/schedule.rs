//! Schedule (solution) model.
//!
//! A schedule maps every round index to its committed fixtures. It is
//! built fresh for each allocation attempt and either returned whole or
//! dropped whole; nothing carries over between attempts.

use serde::{Deserialize, Serialize};

use super::{Fixture, Round};

/// Rounds `1..=R` with their fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rounds in index order; `rounds[i].index == i + 1`.
    pub rounds: Vec<Round>,
}

impl Schedule {
    /// Creates a schedule of `round_count` empty rounds.
    pub fn new(round_count: usize) -> Self {
        Self {
            rounds: (1..=round_count).map(Round::new).collect(),
        }
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Round by 1-based index.
    pub fn round(&self, index: usize) -> Option<&Round> {
        index.checked_sub(1).and_then(|i| self.rounds.get(i))
    }

    /// Mutable round by 1-based index.
    pub fn round_mut(&mut self, index: usize) -> Option<&mut Round> {
        index.checked_sub(1).and_then(|i| self.rounds.get_mut(i))
    }

    /// Total fixtures across all rounds.
    pub fn fixture_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }

    /// Whether every round holds exactly `per_round` fixtures.
    pub fn is_uniform(&self, per_round: usize) -> bool {
        self.rounds.iter().all(|r| r.len() == per_round)
    }

    /// Round index in which the fixture is played.
    pub fn round_of(&self, fixture: &Fixture) -> Option<usize> {
        self.rounds
            .iter()
            .find(|r| r.fixtures.contains(fixture))
            .map(|r| r.index)
    }

    /// Iterates over `(round index, fixture)` in round order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Fixture)> {
        self.rounds
            .iter()
            .flat_map(|r| r.fixtures.iter().map(move |f| (r.index, f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new(2);
        s.round_mut(1).unwrap().commit(Fixture::new("A", "B"));
        s.round_mut(1).unwrap().commit(Fixture::new("C", "D"));
        s.round_mut(2).unwrap().commit(Fixture::new("B", "A"));
        s
    }

    #[test]
    fn test_new_schedule_indices() {
        let s = Schedule::new(14);
        assert_eq!(s.round_count(), 14);
        assert_eq!(s.round(1).unwrap().index, 1);
        assert_eq!(s.round(14).unwrap().index, 14);
        assert!(s.round(0).is_none());
        assert!(s.round(15).is_none());
        assert_eq!(s.fixture_count(), 0);
    }

    #[test]
    fn test_is_uniform() {
        let mut s = sample_schedule();
        assert!(!s.is_uniform(2));
        s.round_mut(2).unwrap().commit(Fixture::new("D", "C"));
        assert!(s.is_uniform(2));
        assert!(!s.is_uniform(1));
    }

    #[test]
    fn test_round_of() {
        let s = sample_schedule();
        assert_eq!(s.round_of(&Fixture::new("A", "B")), Some(1));
        assert_eq!(s.round_of(&Fixture::new("B", "A")), Some(2));
        assert_eq!(s.round_of(&Fixture::new("D", "C")), None);
    }

    #[test]
    fn test_iter_in_round_order() {
        let s = sample_schedule();
        let rounds: Vec<usize> = s.iter().map(|(r, _)| r).collect();
        assert_eq!(rounds, vec![1, 1, 2]);
        assert_eq!(s.fixture_count(), 3);
    }

    #[test]
    fn test_empty_schedule_is_trivially_uniform() {
        let s = Schedule::new(0);
        assert!(s.is_uniform(3));
        assert_eq!(s.round_count(), 0);
    }

    #[test]
    fn test_serializes_rounds() {
        let s = sample_schedule();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["rounds"][0]["index"], 1);
        assert_eq!(json["rounds"][0]["fixtures"][1]["home"], "C");
    }
}
