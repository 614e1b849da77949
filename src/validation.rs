//! Input validation and schedule verification.
//!
//! The search itself never diagnoses a bad configuration; an infeasible
//! one simply exhausts its trials. These checks run separately, before
//! the search (`validate_input`) or after it (`verify_schedule`).
//!
//! `validate_input` detects:
//! - Empty or duplicate roster entries
//! - Zero rounds
//! - A fixture count that does not divide evenly into rounds
//! - A per-round quota larger than the roster can field
//! - Exclusion entries naming unknown participants, self-pairings, or
//!   rounds outside `[1, R]`
//!
//! `verify_schedule` re-checks every property a returned schedule must
//! have.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Constraints, Fixture, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The roster has no participants.
    EmptyRoster,
    /// A participant appears twice in the roster.
    DuplicateParticipant,
    /// The round count is zero.
    NoRounds,
    /// Fixtures cannot be split evenly across rounds.
    UnevenRounds,
    /// A round would need more participants than the roster has.
    RoundOverCapacity,
    /// An exclusion names a participant outside the roster.
    UnknownParticipant,
    /// An exclusion pairs a participant with itself.
    SelfPairing,
    /// A forbidden round lies outside `[1, R]`.
    RoundOutOfRange,
    /// A schedule has a round with the wrong number of fixtures.
    WrongRoundSize,
    /// A fixture is missing from, or repeated in, a schedule.
    FixtureCoverage,
    /// A participant plays more than once in a round.
    DoubleBooked,
    /// A fixture is placed in a forbidden round.
    ForbiddenRound,
    /// Two clashing participants are both home in a round.
    HomeClash,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a league configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input<S: AsRef<str>>(
    participants: &[S],
    round_count: usize,
    constraints: &Constraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    if participants.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no participants",
        ));
    }

    let mut roster = HashSet::new();
    for p in participants {
        if !roster.insert(p.as_ref()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateParticipant,
                format!("Duplicate participant: {}", p.as_ref()),
            ));
        }
    }

    let n = roster.len();
    let fixture_count = n * n.saturating_sub(1);
    if round_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRounds,
            "Round count must be at least 1",
        ));
    } else {
        if fixture_count % round_count != 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnevenRounds,
                format!("{fixture_count} fixtures cannot be split evenly into {round_count} rounds"),
            ));
        }
        let quota = fixture_count / round_count;
        if quota > n / 2 {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoundOverCapacity,
                format!("{quota} fixtures per round need {} participants, roster has {n}", quota * 2),
            ));
        }
    }

    let mut exclusions: Vec<_> = constraints.round_exclusions.iter().collect();
    exclusions.sort_by(|a, b| a.0.cmp(b.0));
    for (fixture, rounds) in exclusions {
        check_pair(&roster, &fixture.home, &fixture.away, "Round exclusion", &mut errors);
        for &r in rounds {
            if r == 0 || r > round_count {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoundOutOfRange,
                    format!("Round exclusion for '{fixture}' names round {r} outside 1..={round_count}"),
                ));
            }
        }
    }

    let mut clashes: Vec<_> = constraints.home_clashes.iter().collect();
    clashes.sort_by(|a, b| a.0.cmp(b.0));
    for (participant, others) in clashes {
        for other in others {
            check_pair(&roster, participant, other, "Home clash", &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_pair(
    roster: &HashSet<&str>,
    a: &str,
    b: &str,
    what: &str,
    errors: &mut Vec<ValidationError>,
) {
    for p in [a, b] {
        if !roster.contains(p) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownParticipant,
                format!("{what} '{a}'/'{b}' references unknown participant '{p}'"),
            ));
        }
    }
    if a == b {
        errors.push(ValidationError::new(
            ValidationErrorKind::SelfPairing,
            format!("{what} pairs '{a}' with itself"),
        ));
    }
}

/// Verifies a schedule against its fixture set and exclusion tables.
///
/// Checks:
/// 1. Every round holds exactly `F / R` fixtures
/// 2. Every fixture appears exactly once, and nothing else appears
/// 3. No participant plays twice in a round
/// 4. No fixture sits in a forbidden round
/// 5. No two home participants of a round clash (either direction)
pub fn verify_schedule(
    schedule: &Schedule,
    fixtures: &[Fixture],
    constraints: &Constraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    let quota = fixtures
        .len()
        .checked_div(schedule.round_count())
        .unwrap_or(0);
    for round in &schedule.rounds {
        if round.len() != quota {
            errors.push(ValidationError::new(
                ValidationErrorKind::WrongRoundSize,
                format!("Round {} has {} fixtures, expected {quota}", round.index, round.len()),
            ));
        }
    }

    let mut seen: HashMap<&Fixture, usize> = HashMap::new();
    for (_, fixture) in schedule.iter() {
        *seen.entry(fixture).or_insert(0) += 1;
    }
    for fixture in fixtures {
        match seen.remove(fixture) {
            Some(1) => {}
            Some(n) => errors.push(ValidationError::new(
                ValidationErrorKind::FixtureCoverage,
                format!("Fixture '{fixture}' scheduled {n} times"),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::FixtureCoverage,
                format!("Fixture '{fixture}' is not scheduled"),
            )),
        }
    }
    let mut extra: Vec<_> = seen.into_keys().collect();
    extra.sort();
    for fixture in extra {
        errors.push(ValidationError::new(
            ValidationErrorKind::FixtureCoverage,
            format!("Fixture '{fixture}' is not part of the fixture set"),
        ));
    }

    for round in &schedule.rounds {
        let mut playing = HashSet::new();
        for fixture in &round.fixtures {
            for p in [&fixture.home, &fixture.away] {
                if !playing.insert(p.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DoubleBooked,
                        format!("'{p}' plays more than once in round {}", round.index),
                    ));
                }
            }
            if constraints.is_forbidden(fixture, round.index) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ForbiddenRound,
                    format!("Fixture '{fixture}' is forbidden in round {}", round.index),
                ));
            }
        }

        let homes: Vec<&str> = round.fixtures.iter().map(|f| f.home.as_str()).collect();
        for (i, a) in homes.iter().enumerate() {
            for b in &homes[i + 1..] {
                if constraints.home_clash(a, b) || constraints.home_clash(b, a) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::HomeClash,
                        format!("'{a}' and '{b}' are both home in round {}", round.index),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
