//! Rendering of search outcomes.
//!
//! Three formats:
//!
//! | Format | Content |
//! |--------|---------|
//! | `text` | Attempt count, fixtures per round, home/away balance table |
//! | `json` | Outcome, schedule and KPIs as pretty-printed JSON |
//! | `dot`  | Graphviz digraph, one edge per fixture, colored by round |

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::models::Schedule;
use crate::scheduler::{ScheduleKpi, SearchOutcome};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Rounds and balance table for a terminal.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Graphviz DOT source.
    Dot,
}

/// Unrecognized format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format '{0}' (expected text, json or dot)")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "dot" => Ok(ReportFormat::Dot),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Report over a search outcome and the roster it was run for.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_league::report::ScheduleReport;
/// use u_league::scheduler::{LeagueScheduler, ScheduleRequest};
///
/// let request = ScheduleRequest::new(["A", "B", "C", "D"], 6);
/// let outcome = LeagueScheduler::new().schedule(&request, &mut StdRng::seed_from_u64(3));
///
/// let text = ScheduleReport::new(&outcome, &request.participants).to_string();
/// assert!(text.starts_with("Solution found after 1 attempts"));
/// assert!(text.contains("Round 6:"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleReport<'a> {
    outcome: &'a SearchOutcome,
    roster: &'a [String],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    found: bool,
    attempts: usize,
    schedule: Option<&'a Schedule>,
    kpi: Option<ScheduleKpi>,
}

impl<'a> ScheduleReport<'a> {
    /// Creates a report; `roster` orders the balance table.
    pub fn new(outcome: &'a SearchOutcome, roster: &'a [String]) -> Self {
        Self { outcome, roster }
    }

    /// KPIs of the found schedule.
    pub fn kpi(&self) -> Option<ScheduleKpi> {
        self.outcome
            .schedule()
            .map(|s| ScheduleKpi::calculate(s, self.roster))
    }

    /// Renders in the given format.
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Dot => Ok(self.to_dot()),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonReport {
            found: self.outcome.is_found(),
            attempts: self.outcome.attempts(),
            schedule: self.outcome.schedule(),
            kpi: self.kpi(),
        })
    }

    /// Graphviz DOT source.
    pub fn to_dot(&self) -> String {
        Dot(self).to_string()
    }

    fn write_kpi_table(&self, f: &mut fmt::Formatter<'_>, kpi: &ScheduleKpi) -> fmt::Result {
        let width = self.roster.iter().map(String::len).max().unwrap_or(0).max(11);
        writeln!(
            f,
            "{:<width$} {:>5} {:>5} {:>5} {:>6}",
            "Participant", "Home", "Away", "Byes", "Breaks"
        )?;
        for participant in self.roster {
            if let Some(k) = kpi.by_participant.get(participant) {
                writeln!(
                    f,
                    "{:<width$} {:>5} {:>5} {:>5} {:>6}",
                    participant, k.home, k.away, k.byes, k.breaks
                )?;
            }
        }
        writeln!(
            f,
            "Total breaks: {}, max breaks: {}, max imbalance: {}",
            kpi.total_breaks, kpi.max_breaks, kpi.max_imbalance
        )
    }
}

impl Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = match self.outcome {
            SearchOutcome::Found { schedule, attempts } => {
                writeln!(f, "Solution found after {attempts} attempts")?;
                schedule
            }
            SearchOutcome::NotFound { trials } => {
                return writeln!(f, "No valid schedule found after {trials} attempts.");
            }
        };
        writeln!(f)?;

        for round in &schedule.rounds {
            writeln!(f, "Round {}:", round.index)?;
            for fixture in &round.fixtures {
                writeln!(f, "  {} (home) vs {} (away)", fixture.home, fixture.away)?;
            }
            writeln!(f)?;
        }

        self.write_kpi_table(f, &ScheduleKpi::calculate(schedule, self.roster))
    }
}

struct Dot<'r, 'a>(&'r ScheduleReport<'a>);

fn quoted(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Evenly spaced hue per round in Graphviz HSV notation.
fn round_color(index: usize, round_count: usize) -> String {
    let hue = (index.saturating_sub(1)) as f64 / round_count.max(1) as f64;
    format!("{hue:.3} 0.850 0.750")
}

impl Display for Dot<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "digraph league {{")?;
        writeln!(f, "    node [shape=circle, style=filled, fillcolor=lightblue];")?;
        for participant in report.roster {
            writeln!(f, "    {};", quoted(participant))?;
        }

        match report.outcome {
            SearchOutcome::Found { schedule, .. } => {
                let round_count = schedule.round_count();
                for round in &schedule.rounds {
                    let color = round_color(round.index, round_count);
                    for fixture in &round.fixtures {
                        writeln!(
                            f,
                            "    {} -> {} [label=\"{}\", color=\"{color}\", fontcolor=darkred];",
                            quoted(&fixture.home),
                            quoted(&fixture.away),
                            round.index
                        )?;
                    }
                }
            }
            SearchOutcome::NotFound { trials } => {
                writeln!(f, "    // no valid schedule after {trials} attempts")?;
            }
        }

        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fixture;

    fn roster() -> Vec<String> {
        ["A", "B", "C"].iter().map(|s| s.to_string()).collect()
    }

    fn found() -> SearchOutcome {
        let mut schedule = Schedule::new(3);
        schedule.round_mut(1).unwrap().commit(Fixture::new("A", "B"));
        schedule.round_mut(2).unwrap().commit(Fixture::new("B", "C"));
        schedule.round_mut(3).unwrap().commit(Fixture::new("C", "A"));
        SearchOutcome::Found {
            schedule,
            attempts: 4,
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("dot".parse::<ReportFormat>().unwrap(), ReportFormat::Dot);
        let err = "svg".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err, UnknownFormat("svg".into()));
        assert!(err.to_string().contains("svg"));
    }

    #[test]
    fn test_text_found() {
        let outcome = found();
        let roster = roster();
        let text = ScheduleReport::new(&outcome, &roster).to_string();

        assert!(text.starts_with("Solution found after 4 attempts\n"));
        assert!(text.contains("Round 1:\n  A (home) vs B (away)\n"));
        assert!(text.contains("Round 3:\n  C (home) vs A (away)\n"));
        assert!(text.contains("Participant"));
        assert!(text.contains("Total breaks: 0, max breaks: 0, max imbalance: 0"));
    }

    #[test]
    fn test_text_not_found() {
        let outcome = SearchOutcome::NotFound { trials: 500 };
        let roster = roster();
        let report = ScheduleReport::new(&outcome, &roster);
        assert_eq!(report.to_string(), "No valid schedule found after 500 attempts.\n");
        assert!(report.kpi().is_none());
    }

    #[test]
    fn test_json() {
        let outcome = found();
        let roster = roster();
        let json = ScheduleReport::new(&outcome, &roster).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["found"], true);
        assert_eq!(value["attempts"], 4);
        assert_eq!(value["schedule"]["rounds"][0]["index"], 1);
        assert_eq!(value["schedule"]["rounds"][0]["fixtures"][0]["home"], "A");
        assert_eq!(value["kpi"]["by_participant"]["A"]["home"], 1);
    }

    #[test]
    fn test_json_not_found() {
        let outcome = SearchOutcome::NotFound { trials: 9 };
        let roster = roster();
        let json = ScheduleReport::new(&outcome, &roster)
            .render(ReportFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["found"], false);
        assert_eq!(value["attempts"], 9);
        assert!(value["schedule"].is_null());
    }

    #[test]
    fn test_dot() {
        let outcome = found();
        let roster = roster();
        let dot = ScheduleReport::new(&outcome, &roster).render(ReportFormat::Dot).unwrap();

        assert!(dot.starts_with("digraph league {\n"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(dot.contains("    \"A\";\n"));
        assert!(dot.contains("\"A\" -> \"B\" [label=\"1\", color=\"0.000 0.850 0.750\""));
        assert!(dot.contains("\"B\" -> \"C\" [label=\"2\", color=\"0.333 0.850 0.750\""));
        assert_eq!(dot.matches(" -> ").count(), 3);
    }

    #[test]
    fn test_dot_escapes_quotes() {
        assert_eq!(quoted("A\"B"), "\"A\\\"B\"");
    }
}
