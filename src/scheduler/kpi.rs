//! Schedule quality metrics (KPIs).
//!
//! The search stops at the first valid schedule and does not optimize, but
//! the reporter shows how balanced the result is.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Home / Away | Fixtures played in each role |
//! | Byes | Rounds without a fixture |
//! | Breaks | Consecutive rounds played in the same role |
//! | Imbalance | \|home − away\| per participant |
//!
//! # Reference
//! de Werra (1981), "Scheduling in sports", breaks in round-robin schedules

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Role, Schedule};

/// Per-participant counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParticipantKpi {
    /// Fixtures played at home.
    pub home: usize,
    /// Fixtures played away.
    pub away: usize,
    /// Rounds without a fixture.
    pub byes: usize,
    /// Pairs of consecutive rounds played in the same role.
    pub breaks: usize,
}

impl ParticipantKpi {
    /// |home − away|.
    pub fn imbalance(&self) -> usize {
        self.home.abs_diff(self.away)
    }
}

/// Schedule balance indicators.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleKpi {
    /// Counters keyed by participant id.
    pub by_participant: BTreeMap<String, ParticipantKpi>,
    /// Sum of breaks across participants.
    pub total_breaks: usize,
    /// Largest single break count.
    pub max_breaks: usize,
    /// Largest home/away imbalance.
    pub max_imbalance: usize,
}

impl ScheduleKpi {
    /// Computes KPIs for every roster participant.
    pub fn calculate<S: AsRef<str>>(schedule: &Schedule, roster: &[S]) -> Self {
        let mut by_participant = BTreeMap::new();

        for participant in roster {
            let participant = participant.as_ref();
            let mut kpi = ParticipantKpi::default();
            let mut previous: Option<Role> = None;

            for round in &schedule.rounds {
                let role = round.role_of(participant);
                match role {
                    Some(Role::Home) => kpi.home += 1,
                    Some(Role::Away) => kpi.away += 1,
                    None => kpi.byes += 1,
                }
                if role.is_some() && role == previous {
                    kpi.breaks += 1;
                }
                previous = role;
            }

            by_participant.insert(participant.to_string(), kpi);
        }

        let total_breaks = by_participant.values().map(|k| k.breaks).sum();
        let max_breaks = by_participant.values().map(|k| k.breaks).max().unwrap_or(0);
        let max_imbalance = by_participant
            .values()
            .map(ParticipantKpi::imbalance)
            .max()
            .unwrap_or(0);

        Self {
            by_participant,
            total_breaks,
            max_breaks,
            max_imbalance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fixture;

    fn schedule_of(rounds: &[&[(&str, &str)]]) -> Schedule {
        let mut s = Schedule::new(rounds.len());
        for (i, fixtures) in rounds.iter().enumerate() {
            let round = s.round_mut(i + 1).unwrap();
            for (h, a) in fixtures.iter() {
                round.commit(Fixture::new(*h, *a));
            }
        }
        s
    }

    #[test]
    fn test_kpi_counts() {
        let s = schedule_of(&[&[("A", "B")], &[("B", "C")], &[("C", "A")]]);
        let kpi = ScheduleKpi::calculate(&s, &["A", "B", "C"]);

        let a = &kpi.by_participant["A"];
        assert_eq!((a.home, a.away, a.byes), (1, 1, 1));
        let b = &kpi.by_participant["B"];
        assert_eq!((b.home, b.away, b.byes), (1, 1, 1));
    }

    #[test]
    fn test_kpi_breaks() {
        // A: home, home, away, away → breaks at rounds 2 and 4
        let s = schedule_of(&[
            &[("A", "B")],
            &[("A", "C")],
            &[("B", "A")],
            &[("C", "A")],
        ]);
        let kpi = ScheduleKpi::calculate(&s, &["A", "B", "C"]);
        assert_eq!(kpi.by_participant["A"].breaks, 2);
        assert_eq!(kpi.by_participant["A"].imbalance(), 0);
        // B: away, bye, home, bye → no breaks
        assert_eq!(kpi.by_participant["B"].breaks, 0);
        assert_eq!(kpi.max_breaks, 2);
    }

    #[test]
    fn test_bye_resets_break_run() {
        let s = schedule_of(&[&[("A", "B")], &[("C", "B")], &[("A", "C")]]);
        let kpi = ScheduleKpi::calculate(&s, &["A", "B", "C"]);
        // A: home, bye, home
        assert_eq!(kpi.by_participant["A"].breaks, 0);
        // B: away, away
        assert_eq!(kpi.by_participant["B"].breaks, 1);
    }

    #[test]
    fn test_kpi_imbalance() {
        let s = schedule_of(&[&[("A", "B")], &[("A", "C")]]);
        let kpi = ScheduleKpi::calculate(&s, &["A", "B", "C"]);
        assert_eq!(kpi.by_participant["A"].imbalance(), 2);
        assert_eq!(kpi.max_imbalance, 2);
        assert_eq!(kpi.max_breaks, 1);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate::<&str>(&Schedule::new(0), &[]);
        assert!(kpi.by_participant.is_empty());
        assert_eq!(kpi.total_breaks, 0);
        assert_eq!((kpi.max_breaks, kpi.max_imbalance), (0, 0));
    }
}
