//! Double round-robin league scheduling.
//!
//! Assigns every ordered pairing of a roster to a round so that each round
//! holds the same number of fixtures, no participant plays twice in a
//! round, and per-fixture round exclusions and home-clash rules hold.
//! Search is randomized greedy first-fit with restarts: fast, bounded by a
//! trial cap, and not guaranteed to find a schedule even when one exists.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Fixture`, `Round`, `Schedule`, `Constraints`
//! - **`priority`**: Rule engine ordering fixtures most-constrained first
//! - **`scheduler`**: Greedy allocator, retry driver, KPIs
//! - **`validation`**: Input integrity checks and schedule verification
//! - **`config`**: TOML configuration and the built-in reference league
//! - **`report`**: Text, JSON and Graphviz rendering
//!
//! # Example
//!
//! ```
//! use u_league::config::LeagueConfig;
//! use u_league::scheduler::LeagueScheduler;
//! use u_league::validation::verify_schedule;
//!
//! let config = LeagueConfig::reference().with_seed(2024).with_max_trials(10_000);
//! let outcome = LeagueScheduler::new().schedule(&config.request(), &mut config.rng());
//!
//! let schedule = outcome.schedule().unwrap();
//! assert!(verify_schedule(schedule, &config.fixtures(), &config.constraints()).is_ok());
//! ```
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod config;
pub mod models;
pub mod priority;
pub mod report;
pub mod scheduler;
pub mod validation;
