//! Context for priority rule evaluation.

use crate::models::Constraints;

/// Read-only problem data passed to priority rules.
#[derive(Debug, Clone, Copy)]
pub struct PriorityContext<'a> {
    /// Number of rounds in the season.
    pub round_count: usize,
    /// Exclusion tables.
    pub constraints: &'a Constraints,
}

impl<'a> PriorityContext<'a> {
    /// Creates a context.
    pub fn new(round_count: usize, constraints: &'a Constraints) -> Self {
        Self {
            round_count,
            constraints,
        }
    }
}
