//! League configuration.
//!
//! Loads the roster, round count, exclusion tables and search settings
//! from TOML, so a season can be re-planned without code changes.
//!
//! # Examples
//!
//! ```
//! use u_league::config::LeagueConfig;
//! use u_league::models::Fixture;
//!
//! let config = LeagueConfig::from_toml_str(r#"
//!     participants = ["A", "B", "C", "D"]
//!     rounds = 6
//!     max_trials = 100
//!     random_seed = 7
//!
//!     [[round_exclusions]]
//!     home = "A"
//!     away = "B"
//!     rounds = [1, 2]
//!
//!     [home_clashes]
//!     A = ["C"]
//!     C = ["A"]
//! "#).unwrap();
//!
//! assert_eq!(config.fixtures().len(), 12);
//! assert!(config.constraints().is_forbidden(&Fixture::new("A", "B"), 2));
//! ```
//!
//! Use the reference league when no file is given:
//!
//! ```
//! use u_league::config::LeagueConfig;
//!
//! let config = LeagueConfig::load("league.toml").unwrap_or_else(|_| LeagueConfig::reference());
//! assert_eq!(config.participants.len(), 7);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Constraints, Fixture, HomeClashes, RoundExclusions};
use crate::priority::{rules, RuleEngine};
use crate::scheduler::{ScheduleRequest, ShuffleMode, DEFAULT_MAX_TRIALS};
use crate::validation::{validate_input, ValidationError};

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the schema.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration parsed but failed validation.
    #[error("Invalid configuration: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// One round-exclusion entry: `home vs away` may not be played in `rounds`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoundExclusionEntry {
    /// Home participant of the fixture.
    pub home: String,
    /// Away participant of the fixture.
    pub away: String,
    /// Forbidden round indices, 1-based.
    pub rounds: Vec<usize>,
}

/// Main league configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LeagueConfig {
    /// Roster, in a fixed order.
    pub participants: Vec<String>,

    /// Number of rounds.
    pub rounds: usize,

    /// Trial cap for the retry driver.
    #[serde(default = "default_max_trials")]
    pub max_trials: usize,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Shuffle strategy between trials.
    #[serde(default)]
    pub shuffle: ShuffleMode,

    /// Among fixtures with equal legal rounds, place those whose home
    /// participant has more clash entries first.
    #[serde(default)]
    pub prioritize_clashes: bool,

    /// Fixtures barred from specific rounds.
    #[serde(default)]
    pub round_exclusions: Vec<RoundExclusionEntry>,

    /// Participant → participants that may not be home in the same round.
    #[serde(default)]
    pub home_clashes: BTreeMap<String, Vec<String>>,
}

fn default_max_trials() -> usize {
    DEFAULT_MAX_TRIALS
}

impl LeagueConfig {
    /// Seven clubs over fourteen rounds with five round exclusions and two
    /// mutual home clashes.
    pub fn reference() -> Self {
        let exclusion = |home: &str, away: &str, rounds: [usize; 2]| RoundExclusionEntry {
            home: home.to_string(),
            away: away.to_string(),
            rounds: rounds.to_vec(),
        };
        let clash = |p: &str, q: &str| (p.to_string(), vec![q.to_string()]);

        Self {
            participants: ["DFC", "TFC", "AFC", "LFC", "FFC", "OFC", "CFC"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rounds: 14,
            max_trials: DEFAULT_MAX_TRIALS,
            random_seed: None,
            shuffle: ShuffleMode::Full,
            prioritize_clashes: false,
            round_exclusions: vec![
                exclusion("DFC", "CFC", [1, 14]),
                exclusion("LFC", "FFC", [7, 13]),
                exclusion("OFC", "LFC", [10, 11]),
                exclusion("AFC", "FFC", [12, 13]),
                exclusion("CFC", "TFC", [2, 3]),
            ],
            home_clashes: BTreeMap::from([
                clash("TFC", "OFC"),
                clash("OFC", "TFC"),
                clash("AFC", "FFC"),
                clash("FFC", "AFC"),
            ]),
        }
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate_input`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from a TOML file without validating it.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a configuration from a TOML string without validating it.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the trial cap.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Runs [`validate_input`] on the roster and tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_input(&self.participants, self.rounds, &self.constraints())
            .map_err(ConfigError::Invalid)
    }

    /// Builds the exclusion tables.
    pub fn constraints(&self) -> Constraints {
        let mut exclusions = RoundExclusions::new();
        for entry in &self.round_exclusions {
            exclusions.forbid(
                Fixture::new(&entry.home, &entry.away),
                entry.rounds.iter().copied(),
            );
        }

        let mut clashes = HomeClashes::new();
        for (participant, others) in &self.home_clashes {
            for other in others {
                clashes.insert(participant, other);
            }
        }

        Constraints::new()
            .with_round_exclusions(exclusions)
            .with_home_clashes(clashes)
    }

    /// All fixtures of the double round-robin.
    pub fn fixtures(&self) -> Vec<Fixture> {
        Fixture::round_robin(&self.participants)
    }

    /// Builds a scheduling request.
    pub fn request(&self) -> ScheduleRequest {
        ScheduleRequest::new(self.participants.iter().cloned(), self.rounds)
            .with_constraints(self.constraints())
            .with_max_trials(self.max_trials)
            .with_shuffle(self.shuffle)
    }

    /// Fixture ordering: fewest legal rounds, then optionally most home
    /// clashes.
    pub fn rule_engine(&self) -> RuleEngine {
        let engine = RuleEngine::fewest_legal_rounds();
        if self.prioritize_clashes {
            engine.with_rule(rules::MostHomeClashes)
        } else {
            engine
        }
    }

    /// Seeded RNG if a seed is configured, OS-seeded otherwise.
    pub fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
