//! Cost evaluation for nurse shift schedules.
//!
//! This crate scores a candidate schedule; it never generates or repairs one:
//! - [`ScheduleModel`] holds the roster, preferences and staffing constants
//! - [`decode`](ScheduleModel::decode) slices the flat bit sequence per staff member
//! - [`counters`] holds the five independent violation counters
//! - [`cost`](ScheduleModel::cost) folds the counts into one weighted [`Cost`]
//! - [`explain`](ScheduleModel::explain) keeps every count and diagnostic for reporting
//!
//! # Architecture
//!
//! The model is immutable after construction and `Send + Sync`, so many
//! threads may score candidates against one shared model. Each evaluation
//! borrows the schedule, allocates only its diagnostics, and keeps no state.
//!
//! # Example
//!
//! ```
//! use nurseforge_scoring::ScheduleModel;
//!
//! let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
//! let schedule: Vec<u8> = [1, 0, 0].repeat(7);
//!
//! let counts = model.counts(&schedule).unwrap();
//! assert_eq!(counts.weekly_overwork, 2);
//! assert_eq!(counts.staffing_bounds, 56);
//! assert_eq!(model.cost(&schedule).unwrap().to_string(), "123.54");
//! ```

pub mod aggregator;
pub mod analysis;
pub mod counters;
pub mod decoder;
pub mod model;

pub use aggregator::ViolationCounts;
pub use analysis::{ConstraintAnalysis, ScoreExplanation, StaffIndictment};
pub use counters::{
    count_consecutive_shifts, count_preference_mismatches, count_same_day_double_shifts,
    count_staffing_bounds, count_weekly_overwork, ConsecutiveShifts, PreferenceMismatches,
    SameDayDoubleShifts, StaffingBounds, Violations, WeeklyOverwork,
};
pub use decoder::{DecodedSchedule, StaffShifts};
pub use model::{Preference, ScheduleModel};

pub use nurseforge_core::{Cost, HardSoftScore, NurseForgeError, Result};
