//! NurseForge - cost evaluation for nurse shift schedules
//!
//! Build a [`ScheduleModel`] once, then score as many candidate schedules as
//! the search needs.
//!
//! # Example
//!
//! ```rust
//! use nurseforge::prelude::*;
//!
//! let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
//! let schedule: Vec<u8> = [1, 0, 0].repeat(7);
//!
//! let cost = model.cost(&schedule).unwrap();
//! assert_eq!(cost.to_string(), "123.54");
//! assert!(cost.is_worse_than(&Cost::ZERO));
//! ```

// Score types
pub use nurseforge_core::{
    ConstraintKind, ConstraintRef, Cost, DayCode, HardSoftScore, NurseForgeError, Result, Score,
    ScoreLevel, ShiftOfDay, DAYS_PER_WEEK, SHIFTS_PER_DAY, SHIFTS_PER_WEEK,
};

// Configuration
pub use nurseforge_config::{ConfigError, RosterConfig, StaffMember, StaffingConfig};

// Evaluation
pub use nurseforge_scoring::{
    count_consecutive_shifts, count_preference_mismatches, count_same_day_double_shifts,
    count_staffing_bounds, count_weekly_overwork, counters, ConsecutiveShifts,
    ConstraintAnalysis, DecodedSchedule, Preference, PreferenceMismatches, SameDayDoubleShifts,
    ScheduleModel, ScoreExplanation, StaffIndictment, StaffShifts, StaffingBounds,
    ViolationCounts, Violations, WeeklyOverwork,
};

#[cfg(feature = "console")]
pub use nurseforge_console as console;
#[cfg(feature = "console")]
pub use nurseforge_console::Report;

pub mod files;

pub mod prelude {
    pub use super::{
        Cost, HardSoftScore, NurseForgeError, RosterConfig, ScheduleModel, Score,
        ScoreExplanation, ShiftOfDay, StaffingConfig, ViolationCounts,
    };
}
