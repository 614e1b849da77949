//! League scheduling domain models.
//!
//! Provides the data types for a double round-robin: fixtures, the
//! exclusion tables that restrict them, rounds, and complete schedules.
//!
//! # Domain Mappings
//!
//! | u-league | Football | Chess | Esports |
//! |----------|----------|-------|---------|
//! | Participant | Club | Player | Team |
//! | Fixture | Match (home/away) | Game (white/black) | Series (host/guest) |
//! | Round | Matchday | Round | Week |
//! | Schedule | Season calendar | Pairing table | Split schedule |

mod constraint;
mod fixture;
mod round;
mod schedule;

pub use constraint::{Constraints, HomeClashes, RoundExclusions};
pub use fixture::Fixture;
pub use round::{Role, Round};
pub use schedule::Schedule;
