//! # Resident Scheduler
//! Assigns residents to hourly duty slots such that a fixed set of labour-safety rules holds
//! simultaneously (see [`Rule`]). The problem is described by [`SchedulingParams`], translated
//! into a boolean model with one variable per (resident, hour), and handed to a [`SearchEngine`]
//! which minimises the total number of worked hours. By default the search is performed by the
//! Pumpkin solver through [`PumpkinEngine`].
//!
//! Every schedule which is returned has been re-checked by [`verify`], which works directly on
//! the produced grid and does not share any code with the encoding.
//!
//! # Solving an instance
//! ```rust
//! # use std::time::Duration;
//! # use resident_scheduler::RawParameters;
//! # use resident_scheduler::SchedulingParams;
//! # use resident_scheduler::solve;
//! # use resident_scheduler::verify;
//! // One resident who has to be on duty, and attend teaching, during a single hour.
//! let params = SchedulingParams::try_from(RawParameters {
//!     residents: 1,
//!     horizon_hours: 1,
//!     min_on_duty: 1,
//!     min_rest_hours: 0,
//!     max_consecutive_hours: 1,
//!     max_weekly_hours: 168,
//!     teaching_hours: vec![0],
//!     min_teaching_hours: 1,
//!     min_shift_length: 1,
//!     min_days_off_per_week: 0,
//! })
//! .expect("valid parameters");
//!
//! let schedule = solve(&params, Duration::from_secs(10))
//!     .expect("the engine is consistent with the verifier")
//!     .expect("the instance is feasible");
//!
//! assert_eq!(schedule.grid(), &[vec![1_u8]]);
//! assert!(verify(&schedule).is_empty());
//! ```
//!
//! # Infeasible instances
//! If no schedule exists, or none is found within the time budget, the result is `Ok(None)`:
//! ```rust
//! # use std::time::Duration;
//! # use resident_scheduler::RawParameters;
//! # use resident_scheduler::SchedulingParams;
//! # use resident_scheduler::solve;
//! // Three residents on duty every hour, but only two available.
//! let params = SchedulingParams::try_from(RawParameters {
//!     residents: 2,
//!     horizon_hours: 24,
//!     min_on_duty: 3,
//!     min_rest_hours: 4,
//!     max_consecutive_hours: 8,
//!     max_weekly_hours: 80,
//!     teaching_hours: vec![],
//!     min_teaching_hours: 0,
//!     min_shift_length: 24,
//!     min_days_off_per_week: 0,
//! })
//! .expect("valid parameters");
//!
//! assert!(solve(&params, Duration::from_secs(10)).expect("consistent").is_none());
//! ```
mod assembly;
mod encoding;
pub mod engine;
pub mod model;
mod params;
mod rule;
mod schedule;
mod solve;
mod verification;

pub use assembly::ScheduleModel;
pub use encoding::DecisionGrid;
pub use engine::PumpkinEngine;
pub use engine::SearchEngine;
pub use engine::Verdict;
pub use params::ParameterError;
pub use params::RawParameters;
pub use params::SchedulingParams;
pub use params::HOURS_PER_DAY;
pub use params::HOURS_PER_WEEK;
pub use rule::Rule;
pub use schedule::GridError;
pub use schedule::Schedule;
pub use solve::solve;
pub use solve::solve_with;
pub use solve::SchedulingError;
pub use verification::verify;
pub use verification::Location;
pub use verification::Violation;
