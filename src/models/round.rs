//! Round model.
//!
//! A round is one time slot of the season. It tracks which participants
//! already play at home, which play away, and the fixtures committed so far.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Constraints, Fixture};

/// One round (1-based index) and its committed fixtures.
///
/// # Invariant
/// Within a round a participant holds at most one role: it is never in
/// both `home` and `away`, and never twice in either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number in `[1, R]`.
    pub index: usize,
    /// Participants playing at home this round.
    pub home: BTreeSet<String>,
    /// Participants playing away this round.
    pub away: BTreeSet<String>,
    /// Fixtures in commit order.
    pub fixtures: Vec<Fixture>,
}

impl Round {
    /// Creates an empty round.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            home: BTreeSet::new(),
            away: BTreeSet::new(),
            fixtures: Vec::new(),
        }
    }

    /// Whether the participant already plays this round, in either role.
    #[inline]
    pub fn contains(&self, participant: &str) -> bool {
        self.home.contains(participant) || self.away.contains(participant)
    }

    /// Whether `fixture` may be committed to this round.
    ///
    /// Requires that:
    /// 1. the fixture is not forbidden in this round,
    /// 2. neither participant already plays this round,
    /// 3. no participant already home here lists the new home participant
    ///    as a home clash.
    ///
    /// The clash check reads each placed participant's entry only; it does
    /// not consult the candidate's own entry.
    pub fn can_host(&self, fixture: &Fixture, constraints: &Constraints) -> bool {
        if constraints.is_forbidden(fixture, self.index) {
            return false;
        }
        if self.contains(&fixture.home) || self.contains(&fixture.away) {
            return false;
        }
        !self
            .home
            .iter()
            .any(|placed| constraints.home_clash(placed, &fixture.home))
    }

    /// Commits a fixture. The caller must have checked [`Round::can_host`].
    pub fn commit(&mut self, fixture: Fixture) {
        debug_assert!(!self.contains(&fixture.home) && !self.contains(&fixture.away));
        self.home.insert(fixture.home.clone());
        self.away.insert(fixture.away.clone());
        self.fixtures.push(fixture);
    }

    /// Number of committed fixtures.
    #[inline]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether no fixture is committed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// The participant's role this round, if it plays.
    pub fn role_of(&self, participant: &str) -> Option<Role> {
        if self.home.contains(participant) {
            Some(Role::Home)
        } else if self.away.contains(participant) {
            Some(Role::Away)
        } else {
            None
        }
    }
}

/// Role of a participant within a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Hosting.
    Home,
    /// Visiting.
    Away,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HomeClashes, RoundExclusions};

    fn round_with(index: usize, fixtures: &[(&str, &str)]) -> Round {
        let mut r = Round::new(index);
        for (h, a) in fixtures {
            r.commit(Fixture::new(*h, *a));
        }
        r
    }

    #[test]
    fn test_empty_round_hosts_anything() {
        let r = Round::new(1);
        assert!(r.can_host(&Fixture::new("A", "B"), &Constraints::new()));
        assert!(r.is_empty());
    }

    #[test]
    fn test_commit_tracks_roles() {
        let r = round_with(1, &[("A", "B")]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.role_of("A"), Some(Role::Home));
        assert_eq!(r.role_of("B"), Some(Role::Away));
        assert_eq!(r.role_of("C"), None);
    }

    #[test]
    fn test_participant_cannot_play_twice() {
        let r = round_with(1, &[("A", "B")]);
        let c = Constraints::new();
        // Home participant reused as home, as away; away participant reused either way
        assert!(!r.can_host(&Fixture::new("A", "C"), &c));
        assert!(!r.can_host(&Fixture::new("C", "A"), &c));
        assert!(!r.can_host(&Fixture::new("B", "C"), &c));
        assert!(!r.can_host(&Fixture::new("C", "B"), &c));
        assert!(r.can_host(&Fixture::new("C", "D"), &c));
    }

    #[test]
    fn test_forbidden_round() {
        let c = Constraints::new()
            .with_round_exclusions(RoundExclusions::new().with("A", "B", [2]));
        assert!(!Round::new(2).can_host(&Fixture::new("A", "B"), &c));
        assert!(Round::new(3).can_host(&Fixture::new("A", "B"), &c));
        assert!(Round::new(2).can_host(&Fixture::new("B", "A"), &c));
    }

    #[test]
    fn test_mutual_home_clash() {
        let c = Constraints::new().with_home_clashes(HomeClashes::new().with_mutual("A", "C"));
        let r = round_with(1, &[("A", "B")]);
        assert!(!r.can_host(&Fixture::new("C", "D"), &c));
        // C away is fine, the clash only covers the home role
        assert!(r.can_host(&Fixture::new("D", "C"), &c));
    }

    #[test]
    fn test_asymmetric_home_clash_is_checked_forward_only() {
        // Only A lists C; C lists nobody.
        let c = Constraints::new().with_home_clashes(HomeClashes::new().with("A", "C"));

        // A placed first: C is rejected as a second home participant.
        let a_first = round_with(1, &[("A", "B")]);
        assert!(!a_first.can_host(&Fixture::new("C", "D"), &c));

        // C placed first: A is accepted because C's entry is empty.
        let c_first = round_with(1, &[("C", "D")]);
        assert!(c_first.can_host(&Fixture::new("A", "B"), &c));
    }
}
