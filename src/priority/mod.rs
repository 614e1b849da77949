//! Fixture prioritization.
//!
//! Orders fixtures before allocation so that the most constrained ones are
//! placed while rounds are still empty. The order is a heuristic seed for
//! each attempt, not a precedence law: the retry driver may shuffle it.
//!
//! # Usage
//!
//! ```
//! use u_league::models::{Constraints, Fixture, HomeClashes};
//! use u_league::priority::{rules, PriorityContext, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::FewestLegalRounds)
//!     .with_rule(rules::MostHomeClashes);
//!
//! let constraints = Constraints::new().with_home_clashes(HomeClashes::new().with_mutual("C", "B"));
//! let fixtures = Fixture::round_robin(&["A", "B", "C"]);
//! let ordered = engine.prioritize(&fixtures, &PriorityContext::new(6, &constraints));
//! assert_eq!(ordered.len(), 6);
//! assert_eq!(ordered[0].home, "B");
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::PriorityContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Fixture;
use std::fmt::Debug;

/// Score returned by a priority rule. Lower scores are placed earlier.
pub type RuleScore = i64;

/// A rule scoring how early a fixture should be placed.
pub trait PriorityRule: Send + Sync + Debug {
    /// Short rule name for logs (e.g., "FLR").
    fn name(&self) -> &'static str;

    /// Scores a fixture; lower goes first.
    fn score(&self, fixture: &Fixture, context: &PriorityContext<'_>) -> RuleScore;
}
