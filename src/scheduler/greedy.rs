//! Greedy first-fit round allocation.
//!
//! # Algorithm
//!
//! For each fixture in the given order:
//! 1. Scan rounds `1..=R` in ascending order.
//! 2. Skip rounds where the fixture is forbidden, where either participant
//!    already plays, or where a participant already home lists the new
//!    home participant as a clash.
//! 3. Commit the fixture to the first remaining round.
//! 4. If no round qualifies, abandon the attempt immediately.
//!
//! There is no backtracking: an earlier placement is never revisited. A
//! completed pass is valid only if every round holds exactly `F / R`
//! fixtures, because first-fit can leave late rounds short.
//!
//! # Complexity
//! O(F * R * q) where q is the per-round quota (clash scan).

use tracing::trace;

use crate::models::{Constraints, Fixture, Schedule};

/// Result of a single allocation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// Every fixture placed and every round holds exactly the quota.
    Valid(Schedule),
    /// Every fixture placed but rounds are unevenly filled.
    Invalid(Schedule),
    /// A fixture had no eligible round; later fixtures were not tried.
    Abandoned {
        /// Partial schedule at the point of failure.
        schedule: Schedule,
        /// The fixture that could not be placed.
        unplaced: Fixture,
        /// Number of fixtures placed before the failure.
        placed: usize,
    },
}

impl Attempt {
    /// Whether the attempt produced a usable schedule.
    pub fn is_valid(&self) -> bool {
        matches!(self, Attempt::Valid(_))
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Attempt::Valid(_) => "valid",
            Attempt::Invalid(_) => "uneven",
            Attempt::Abandoned { .. } => "abandoned",
        }
    }

    /// The schedule, if the attempt is valid.
    pub fn into_valid(self) -> Option<Schedule> {
        match self {
            Attempt::Valid(schedule) => Some(schedule),
            _ => None,
        }
    }
}

/// First-fit allocator over a fixed number of rounds.
///
/// # Example
///
/// ```
/// use u_league::models::{Constraints, Fixture};
/// use u_league::scheduler::{Attempt, GreedyAllocator};
///
/// let constraints = Constraints::new();
/// let allocator = GreedyAllocator::new(&constraints, 2);
/// let order = vec![Fixture::new("A", "B"), Fixture::new("B", "A")];
///
/// match allocator.allocate(&order) {
///     Attempt::Valid(schedule) => assert_eq!(schedule.round_of(&order[1]), Some(2)),
///     other => panic!("unexpected {}", other.label()),
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyAllocator<'a> {
    constraints: &'a Constraints,
    round_count: usize,
}

impl<'a> GreedyAllocator<'a> {
    /// Creates an allocator.
    pub fn new(constraints: &'a Constraints, round_count: usize) -> Self {
        Self {
            constraints,
            round_count,
        }
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.round_count
    }

    /// Exclusion tables consulted on every placement.
    pub fn constraints(&self) -> &'a Constraints {
        self.constraints
    }

    /// Fixtures each round must hold for `fixture_count` fixtures in total.
    pub fn quota(&self, fixture_count: usize) -> usize {
        fixture_count.checked_div(self.round_count).unwrap_or(0)
    }

    /// Runs one pass over `order`, building a fresh schedule.
    pub fn allocate(&self, order: &[Fixture]) -> Attempt {
        let mut schedule = Schedule::new(self.round_count);

        for (placed, fixture) in order.iter().enumerate() {
            let slot = schedule
                .rounds
                .iter()
                .position(|round| round.can_host(fixture, self.constraints));
            let Some(slot) = slot else {
                return Attempt::Abandoned {
                    schedule,
                    unplaced: fixture.clone(),
                    placed,
                };
            };
            let round = &mut schedule.rounds[slot];
            trace!(fixture = %fixture, round = round.index, "placed");
            round.commit(fixture.clone());
        }

        if schedule.is_uniform(self.quota(order.len())) {
            Attempt::Valid(schedule)
        } else {
            Attempt::Invalid(schedule)
        }
    }
}
