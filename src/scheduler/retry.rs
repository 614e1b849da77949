//! Randomized restarts around the greedy allocator.
//!
//! Each trial shuffles the working fixture order and runs one first-fit
//! pass on a fresh schedule. The first valid schedule is returned together
//! with its 1-based attempt number. A failed trial leaves nothing behind
//! but the shuffled order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Attempt, GreedyAllocator};
use crate::models::{Constraints, Fixture, Schedule};

/// Default trial cap.
pub const DEFAULT_MAX_TRIALS: usize = 500;

/// How the fixture order is randomized before each trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Shuffle the whole order. Shuffles compound across trials.
    #[default]
    Full,
    /// Shuffle only within runs of fixtures that have the same number of
    /// legal rounds, so the most constrained fixtures always go first.
    WithinTiers,
}

/// Outcome of a bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A valid schedule found on attempt `attempts` (1-based).
    Found {
        /// The schedule.
        schedule: Schedule,
        /// Attempt number at which it was found.
        attempts: usize,
    },
    /// No valid schedule within the trial cap.
    NotFound {
        /// The trial cap that was exhausted.
        trials: usize,
    },
}

impl SearchOutcome {
    /// Whether a schedule was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// Attempt number on success, or the trial cap on failure.
    pub fn attempts(&self) -> usize {
        match self {
            SearchOutcome::Found { attempts, .. } => *attempts,
            SearchOutcome::NotFound { trials } => *trials,
        }
    }

    /// The schedule, if found.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            SearchOutcome::Found { schedule, .. } => Some(schedule),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    /// Consumes the outcome, returning the schedule if found.
    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            SearchOutcome::Found { schedule, .. } => Some(schedule),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

/// Repeats allocation attempts until one is valid or the cap is reached.
///
/// The only termination conditions are success and trial exhaustion.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_league::models::{Constraints, Fixture};
/// use u_league::scheduler::RetryDriver;
///
/// let constraints = Constraints::new();
/// let fixtures = Fixture::round_robin(&["A", "B", "C", "D"]);
/// let driver = RetryDriver::new(&constraints, 6).with_max_trials(50);
///
/// let outcome = driver.run(&fixtures, &mut StdRng::seed_from_u64(7));
/// assert!(outcome.is_found());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RetryDriver<'a> {
    allocator: GreedyAllocator<'a>,
    max_trials: usize,
    shuffle: ShuffleMode,
}

impl<'a> RetryDriver<'a> {
    /// Creates a driver with the default trial cap and full shuffling.
    pub fn new(constraints: &'a Constraints, round_count: usize) -> Self {
        Self {
            allocator: GreedyAllocator::new(constraints, round_count),
            max_trials: DEFAULT_MAX_TRIALS,
            shuffle: ShuffleMode::Full,
        }
    }

    /// Sets the trial cap.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Sets the shuffle mode.
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Trial cap.
    pub fn max_trials(&self) -> usize {
        self.max_trials
    }

    /// Searches for a valid schedule, starting from `prioritized`.
    pub fn run<R: Rng + ?Sized>(&self, prioritized: &[Fixture], rng: &mut R) -> SearchOutcome {
        let mut order = prioritized.to_vec();
        let tiers = match self.shuffle {
            ShuffleMode::Full => Vec::new(),
            ShuffleMode::WithinTiers => self.tiers(&order),
        };

        info!(
            fixtures = order.len(),
            rounds = self.allocator.round_count(),
            max_trials = self.max_trials,
            shuffle = ?self.shuffle,
            "search started"
        );

        for attempt in 1..=self.max_trials {
            match self.shuffle {
                ShuffleMode::Full => order.shuffle(rng),
                ShuffleMode::WithinTiers => {
                    for range in &tiers {
                        order[range.clone()].shuffle(rng);
                    }
                }
            }

            let result = self.allocator.allocate(&order);
            let outcome = result.label();
            match result {
                Attempt::Valid(schedule) => {
                    info!(attempts = attempt, "schedule found");
                    return SearchOutcome::Found {
                        schedule,
                        attempts: attempt,
                    };
                }
                Attempt::Invalid(schedule) => {
                    debug!(
                        attempt,
                        outcome,
                        placed = schedule.fixture_count(),
                        "attempt rejected"
                    );
                }
                Attempt::Abandoned {
                    unplaced, placed, ..
                } => {
                    debug!(
                        attempt,
                        outcome,
                        placed,
                        unplaced = %unplaced,
                        "attempt rejected"
                    );
                }
            }
        }

        info!(trials = self.max_trials, "no valid schedule found");
        SearchOutcome::NotFound {
            trials: self.max_trials,
        }
    }

    /// Maximal runs of consecutive fixtures with equal legal-round counts.
    fn tiers(&self, order: &[Fixture]) -> Vec<std::ops::Range<usize>> {
        let rounds = self.allocator.round_count();
        let exclusions = &self.allocator.constraints().round_exclusions;
        let mut tiers = Vec::new();
        let mut start = 0;
        for i in 1..=order.len() {
            let boundary = i == order.len()
                || exclusions.legal_round_count(&order[i], rounds)
                    != exclusions.legal_round_count(&order[start], rounds);
            if boundary {
                tiers.push(start..i);
                start = i;
            }
        }
        tiers
    }
}
