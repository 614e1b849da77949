//! Exclusion tables consulted during round assignment.
//!
//! Two kinds of rules restrict where a fixture may go:
//!
//! - **Round exclusions**: a fixture may not be played in specific rounds.
//! - **Home clashes**: two participants may not both play at home in the
//!   same round.
//!
//! Both tables are built once and only read afterwards. Absent entries mean
//! "no constraint".

use std::collections::{BTreeSet, HashMap};

use super::Fixture;

/// Rounds in which a fixture is forbidden.
///
/// Keyed by the ordered fixture: forbidding `A vs B` says nothing about
/// `B vs A` unless that orientation is registered too.
#[derive(Debug, Clone, Default)]
pub struct RoundExclusions {
    forbidden: HashMap<Fixture, BTreeSet<usize>>,
}

impl RoundExclusions {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbids `fixture` in each of the given rounds (1-based).
    pub fn forbid(&mut self, fixture: Fixture, rounds: impl IntoIterator<Item = usize>) {
        self.forbidden.entry(fixture).or_default().extend(rounds);
    }

    /// Builder: forbids `home vs away` in the given rounds.
    pub fn with(
        mut self,
        home: impl Into<String>,
        away: impl Into<String>,
        rounds: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.forbid(Fixture::new(home, away), rounds);
        self
    }

    /// Forbidden rounds for a fixture, or `None` if none are registered.
    pub fn forbidden_rounds(&self, fixture: &Fixture) -> Option<&BTreeSet<usize>> {
        self.forbidden.get(fixture)
    }

    /// Whether `fixture` may not be played in `round`.
    #[inline]
    pub fn is_forbidden(&self, fixture: &Fixture, round: usize) -> bool {
        self.forbidden
            .get(fixture)
            .is_some_and(|rounds| rounds.contains(&round))
    }

    /// Number of rounds in `[1, round_count]` where `fixture` is allowed.
    ///
    /// Registered rounds outside that range do not reduce the count.
    pub fn legal_round_count(&self, fixture: &Fixture, round_count: usize) -> usize {
        if round_count == 0 {
            return 0;
        }
        let forbidden = self
            .forbidden
            .get(fixture)
            .map(|rounds| rounds.range(1..=round_count).count())
            .unwrap_or(0);
        round_count - forbidden
    }

    /// Iterates over all registered fixtures and their forbidden rounds.
    pub fn iter(&self) -> impl Iterator<Item = (&Fixture, &BTreeSet<usize>)> {
        self.forbidden.iter()
    }

    /// Number of fixtures with at least one registered entry.
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

/// Participants that may not share the home role within a round.
///
/// The table is read forward only: `clashes(placed, candidate)` looks up
/// `placed`'s entry. Callers who want the rule to hold both ways must list
/// both directions.
#[derive(Debug, Clone, Default)]
pub struct HomeClashes {
    clashes: HashMap<String, BTreeSet<String>>,
}

impl HomeClashes {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers that `candidate` may not be home alongside `participant`.
    pub fn insert(&mut self, participant: impl Into<String>, candidate: impl Into<String>) {
        self.clashes
            .entry(participant.into())
            .or_default()
            .insert(candidate.into());
    }

    /// Builder: registers a single forward entry.
    pub fn with(mut self, participant: impl Into<String>, candidate: impl Into<String>) -> Self {
        self.insert(participant, candidate);
        self
    }

    /// Builder: registers the clash in both directions.
    pub fn with_mutual(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.insert(a.clone(), b.clone());
        self.insert(b, a);
        self
    }

    /// Whether `candidate` may not be home in a round where `placed` is
    /// already home.
    #[inline]
    pub fn clashes(&self, placed: &str, candidate: &str) -> bool {
        self.clashes
            .get(placed)
            .is_some_and(|set| set.contains(candidate))
    }

    /// Number of entries that name `participant` on either side.
    pub fn degree(&self, participant: &str) -> usize {
        let forward = self.clashes.get(participant).map_or(0, BTreeSet::len);
        let backward = self
            .clashes
            .iter()
            .filter(|(p, set)| p.as_str() != participant && set.contains(participant))
            .count();
        forward + backward
    }

    /// Entries `(a, b)` without the matching `(b, a)`, sorted.
    pub fn asymmetric_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .clashes
            .iter()
            .flat_map(|(a, set)| set.iter().map(move |b| (a, b)))
            .filter(|(a, b)| !self.clashes(b, a))
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        pairs.sort();
        pairs
    }

    /// Iterates over all participants with entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.clashes.iter()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.clashes.is_empty()
    }
}

/// Both exclusion tables, passed by reference into the prioritizer and
/// the allocator.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Round-forbidding entries.
    pub round_exclusions: RoundExclusions,
    /// Home-clash entries.
    pub home_clashes: HomeClashes,
}

impl Constraints {
    /// Creates an unconstrained set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round exclusion table.
    pub fn with_round_exclusions(mut self, exclusions: RoundExclusions) -> Self {
        self.round_exclusions = exclusions;
        self
    }

    /// Sets the home clash table.
    pub fn with_home_clashes(mut self, clashes: HomeClashes) -> Self {
        self.home_clashes = clashes;
        self
    }

    /// Forbidden rounds for a fixture, or `None` if none are registered.
    pub fn forbidden_rounds(&self, fixture: &Fixture) -> Option<&BTreeSet<usize>> {
        self.round_exclusions.forbidden_rounds(fixture)
    }

    /// See [`RoundExclusions::is_forbidden`].
    #[inline]
    pub fn is_forbidden(&self, fixture: &Fixture, round: usize) -> bool {
        self.round_exclusions.is_forbidden(fixture, round)
    }

    /// See [`HomeClashes::clashes`].
    #[inline]
    pub fn home_clash(&self, placed: &str, candidate: &str) -> bool {
        self.home_clashes.clashes(placed, candidate)
    }
}
