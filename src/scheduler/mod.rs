//! Round allocation, randomized restarts and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyAllocator` places fixtures first-fit into rounds and abandons the
//! pass on the first fixture that fits nowhere. `RetryDriver` repeats such
//! passes over reshuffled orders until one yields a schedule where every
//! round is exactly full, or the trial cap runs out. Neither backtracks:
//! the search is fast but incomplete, so an infeasible configuration and
//! an unlucky run look the same from outside.
//!
//! # KPI
//!
//! `ScheduleKpi` reports home/away balance and breaks of a found schedule.
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"
//! - de Werra (1981), "Scheduling in sports"

mod greedy;
mod kpi;
mod league;
mod retry;

pub use greedy::{Attempt, GreedyAllocator};
pub use kpi::{ParticipantKpi, ScheduleKpi};
pub use league::{LeagueScheduler, ScheduleRequest};
pub use retry::{RetryDriver, SearchOutcome, ShuffleMode, DEFAULT_MAX_TRIALS};
