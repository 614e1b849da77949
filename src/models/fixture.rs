//! Fixture model.
//!
//! A fixture is an ordered pairing of two participants: the first plays
//! at home, the second away. A double round-robin contains every ordered
//! pair exactly once, so each unordered pair meets twice with the home
//! role swapped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered (home, away) pairing of two distinct participants.
///
/// Participants are opaque string identifiers drawn from the roster.
/// Ordering is lexicographic by home, then away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fixture {
    /// Participant in the home role.
    pub home: String,
    /// Participant in the away role.
    pub away: String,
}

impl Fixture {
    /// Creates a fixture.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// Enumerates every ordered pair of distinct roster participants.
    ///
    /// Fixtures are produced home-major in roster order, N×(N−1) in total.
    ///
    /// # Example
    /// ```
    /// use u_league::models::Fixture;
    ///
    /// let fixtures = Fixture::round_robin(&["A", "B", "C"]);
    /// assert_eq!(fixtures.len(), 6);
    /// assert_eq!(fixtures[0], Fixture::new("A", "B"));
    /// ```
    pub fn round_robin<S: AsRef<str>>(roster: &[S]) -> Vec<Fixture> {
        let mut fixtures = Vec::with_capacity(roster.len() * roster.len().saturating_sub(1));
        for home in roster {
            for away in roster {
                if home.as_ref() != away.as_ref() {
                    fixtures.push(Fixture::new(home.as_ref(), away.as_ref()));
                }
            }
        }
        fixtures
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}
