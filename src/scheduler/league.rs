//! End-to-end league scheduling.
//!
//! # Algorithm
//!
//! 1. Enumerate every ordered pair of roster participants.
//! 2. Order fixtures with the rule engine (fewest legal rounds first).
//! 3. Run the retry driver: shuffle, first-fit pass, uniform-count check.
//!
//! # Reference
//! Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

use rand::Rng;
use tracing::{debug, warn};

use super::{RetryDriver, SearchOutcome, ShuffleMode, DEFAULT_MAX_TRIALS};
use crate::models::{Constraints, Fixture};
use crate::priority::{PriorityContext, RuleEngine};

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Roster in a fixed order.
    pub participants: Vec<String>,
    /// Number of rounds `R`.
    pub round_count: usize,
    /// Exclusion tables.
    pub constraints: Constraints,
    /// Trial cap.
    pub max_trials: usize,
    /// Shuffle strategy between trials.
    pub shuffle: ShuffleMode,
}

impl ScheduleRequest {
    /// Creates an unconstrained request with the default trial cap.
    pub fn new<S: Into<String>>(
        participants: impl IntoIterator<Item = S>,
        round_count: usize,
    ) -> Self {
        Self {
            participants: participants.into_iter().map(Into::into).collect(),
            round_count,
            constraints: Constraints::new(),
            max_trials: DEFAULT_MAX_TRIALS,
            shuffle: ShuffleMode::Full,
        }
    }

    /// Sets the exclusion tables.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the trial cap.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Sets the shuffle strategy.
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// All fixtures of the double round-robin.
    pub fn fixtures(&self) -> Vec<Fixture> {
        Fixture::round_robin(&self.participants)
    }
}

/// Prioritize-then-retry league scheduler.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_league::scheduler::{LeagueScheduler, ScheduleRequest};
///
/// let request = ScheduleRequest::new(["A", "B", "C", "D"], 6).with_max_trials(50);
/// let outcome = LeagueScheduler::new().schedule(&request, &mut StdRng::seed_from_u64(1));
///
/// let schedule = outcome.schedule().unwrap();
/// assert_eq!(schedule.fixture_count(), 12);
/// assert!(schedule.is_uniform(2));
/// ```
#[derive(Debug, Clone)]
pub struct LeagueScheduler {
    rule_engine: RuleEngine,
}

impl Default for LeagueScheduler {
    fn default() -> Self {
        Self {
            rule_engine: RuleEngine::fewest_legal_rounds(),
        }
    }
}

impl LeagueScheduler {
    /// Creates a scheduler ordering fixtures by fewest legal rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule engine used to order fixtures.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Fixtures of the request in priority order.
    pub fn prioritized(&self, request: &ScheduleRequest) -> Vec<Fixture> {
        let context = PriorityContext::new(request.round_count, &request.constraints);
        self.rule_engine.prioritize(&request.fixtures(), &context)
    }

    /// Runs the bounded search for a request.
    pub fn schedule<R: Rng + ?Sized>(
        &self,
        request: &ScheduleRequest,
        rng: &mut R,
    ) -> SearchOutcome {
        for (a, b) in request.constraints.home_clashes.asymmetric_pairs() {
            warn!(placed = %a, candidate = %b, "home clash is only declared one way");
        }
        let prioritized = self.prioritized(request);
        debug!(rules = ?self.rule_engine.rule_names(), "fixtures prioritized");
        RetryDriver::new(&request.constraints, request.round_count)
            .with_max_trials(request.max_trials)
            .with_shuffle(request.shuffle)
            .run(&prioritized, rng)
    }
}
