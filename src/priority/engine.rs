//! Rule chain ordering fixtures lexicographically by rule scores.

use std::sync::Arc;

use super::{rules, PriorityContext, PriorityRule, RuleScore};
use crate::models::Fixture;

/// Final ordering among fixtures whose scores are all equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order.
    #[default]
    Stable,
    /// Lexicographic by (home, away).
    ByFixture,
}

/// Orders fixtures by a chain of rules: the first rule decides, later
/// rules only separate fixtures the earlier ones scored equal.
///
/// # Example
/// ```
/// use u_league::models::{Constraints, Fixture, RoundExclusions};
/// use u_league::priority::{PriorityContext, RuleEngine};
///
/// let constraints = Constraints::new()
///     .with_round_exclusions(RoundExclusions::new().with("B", "A", [1, 2]));
/// let fixtures = Fixture::round_robin(&["A", "B"]);
///
/// let engine = RuleEngine::fewest_legal_rounds();
/// let ordered = engine.prioritize(&fixtures, &PriorityContext::new(4, &constraints));
/// assert_eq!(ordered[0], Fixture::new("B", "A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn PriorityRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty engine; with no rules every fixture ties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fewest legal rounds first, ties broken by fixture.
    pub fn fewest_legal_rounds() -> Self {
        Self::new()
            .with_rule(rules::FewestLegalRounds)
            .with_tie_breaker(TieBreaker::ByFixture)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the rules, in chain order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sort key of a fixture: one score per rule.
    pub fn key(&self, fixture: &Fixture, context: &PriorityContext<'_>) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.score(fixture, context)).collect()
    }

    /// Returns a reordered copy of `fixtures`, lowest key first.
    pub fn prioritize(&self, fixtures: &[Fixture], context: &PriorityContext<'_>) -> Vec<Fixture> {
        let mut keyed: Vec<(Vec<RuleScore>, &Fixture)> = fixtures
            .iter()
            .map(|f| (self.key(f, context), f))
            .collect();

        match self.tie_breaker {
            TieBreaker::Stable => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            TieBreaker::ByFixture => keyed.sort(),
        }

        keyed.into_iter().map(|(_, f)| f.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraints, HomeClashes, RoundExclusions};
    use crate::priority::rules::{FewestLegalRounds, MostHomeClashes};

    fn reference_exclusions() -> Constraints {
        Constraints::new().with_round_exclusions(
            RoundExclusions::new()
                .with("DFC", "CFC", [1, 14])
                .with("LFC", "FFC", [7, 13])
                .with("OFC", "LFC", [10, 11])
                .with("AFC", "FFC", [12, 13])
                .with("CFC", "TFC", [2, 3]),
        )
    }

    #[test]
    fn test_constrained_fixtures_first() {
        let roster = ["DFC", "TFC", "AFC", "LFC", "FFC", "OFC", "CFC"];
        let fixtures = Fixture::round_robin(&roster);
        let c = reference_exclusions();
        let ctx = PriorityContext::new(14, &c);

        let ordered = RuleEngine::fewest_legal_rounds().prioritize(&fixtures, &ctx);
        assert_eq!(ordered.len(), 42);

        let head: Vec<String> = ordered[..5].iter().map(|f| f.to_string()).collect();
        assert_eq!(
            head,
            vec![
                "AFC vs FFC",
                "CFC vs TFC",
                "DFC vs CFC",
                "LFC vs FFC",
                "OFC vs LFC"
            ]
        );
    }

    #[test]
    fn test_keys_are_non_decreasing() {
        let fixtures = Fixture::round_robin(&["A", "B", "C", "D"]);
        let c = Constraints::new().with_round_exclusions(
            RoundExclusions::new()
                .with("D", "A", [1])
                .with("C", "B", [1, 2, 3]),
        );
        let ctx = PriorityContext::new(6, &c);
        let engine = RuleEngine::new().with_rule(FewestLegalRounds);

        let ordered = engine.prioritize(&fixtures, &ctx);
        let keys: Vec<Vec<RuleScore>> = ordered.iter().map(|f| engine.key(f, &ctx)).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ordered[0], Fixture::new("C", "B"));
        assert_eq!(ordered[1], Fixture::new("D", "A"));
    }

    #[test]
    fn test_stable_tie_breaker_keeps_input_order() {
        let fixtures = vec![
            Fixture::new("C", "A"),
            Fixture::new("A", "B"),
            Fixture::new("B", "C"),
        ];
        let c = Constraints::new();
        let ctx = PriorityContext::new(3, &c);
        let engine = RuleEngine::new().with_rule(FewestLegalRounds);

        assert_eq!(engine.prioritize(&fixtures, &ctx), fixtures);
    }

    #[test]
    fn test_by_fixture_tie_breaker() {
        let fixtures = vec![Fixture::new("C", "A"), Fixture::new("A", "B")];
        let c = Constraints::new();
        let ctx = PriorityContext::new(3, &c);
        let engine = RuleEngine::new()
            .with_rule(FewestLegalRounds)
            .with_tie_breaker(TieBreaker::ByFixture);

        let ordered = engine.prioritize(&fixtures, &ctx);
        assert_eq!(ordered, vec![Fixture::new("A", "B"), Fixture::new("C", "A")]);
    }

    #[test]
    fn test_second_rule_separates_ties() {
        let fixtures = vec![Fixture::new("B", "C"), Fixture::new("A", "C")];
        let c = Constraints::new().with_home_clashes(HomeClashes::new().with_mutual("A", "D"));
        let ctx = PriorityContext::new(6, &c);
        let engine = RuleEngine::new()
            .with_rule(FewestLegalRounds)
            .with_rule(MostHomeClashes);

        assert_eq!(engine.key(&fixtures[1], &ctx), vec![6, -2]);
        assert_eq!(engine.prioritize(&fixtures, &ctx)[0], Fixture::new("A", "C"));
    }

    #[test]
    fn test_first_rule_dominates() {
        // A vs Y has more clashes, but X vs Y has fewer legal rounds
        let fixtures = vec![Fixture::new("A", "Y"), Fixture::new("X", "Y")];
        let c = Constraints::new()
            .with_round_exclusions(RoundExclusions::new().with("X", "Y", [1]))
            .with_home_clashes(HomeClashes::new().with_mutual("A", "B"));
        let ctx = PriorityContext::new(6, &c);
        let engine = RuleEngine::new()
            .with_rule(FewestLegalRounds)
            .with_rule(MostHomeClashes);

        assert_eq!(engine.prioritize(&fixtures, &ctx)[0], Fixture::new("X", "Y"));
    }

    #[test]
    fn test_rule_names_and_empty_input() {
        let engine = RuleEngine::fewest_legal_rounds().with_rule(MostHomeClashes);
        assert_eq!(engine.rule_names(), vec!["FLR", "MHC"]);

        let c = Constraints::new();
        let ctx = PriorityContext::new(14, &c);
        assert!(engine.prioritize(&[], &ctx).is_empty());
    }
}
