//! Built-in priority rules.

use super::{PriorityContext, PriorityRule, RuleScore};
use crate::models::Fixture;

/// Fewest legal rounds first.
///
/// Score is the number of rounds in `[1, R]` not forbidden for the fixture.
/// Fixtures with many exclusions are placed while rounds are still empty,
/// so an attempt that cannot succeed fails early.
#[derive(Debug, Clone, Copy)]
pub struct FewestLegalRounds;

impl PriorityRule for FewestLegalRounds {
    fn name(&self) -> &'static str {
        "FLR"
    }

    fn score(&self, fixture: &Fixture, context: &PriorityContext<'_>) -> RuleScore {
        context
            .constraints
            .round_exclusions
            .legal_round_count(fixture, context.round_count) as RuleScore
    }
}

/// Most home-clash entries first.
///
/// Score is the negated number of clash entries naming the fixture's home
/// participant, in either direction.
#[derive(Debug, Clone, Copy)]
pub struct MostHomeClashes;

impl PriorityRule for MostHomeClashes {
    fn name(&self) -> &'static str {
        "MHC"
    }

    fn score(&self, fixture: &Fixture, context: &PriorityContext<'_>) -> RuleScore {
        -(context.constraints.home_clashes.degree(&fixture.home) as RuleScore)
    }
}
