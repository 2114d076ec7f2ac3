//! The five violation counters.
//!
//! Each counter is a pure function over a [`DecodedSchedule`] and the
//! [`ScheduleModel`]. They do not depend on each other and may run in any
//! order. Every result type reports its total through [`Violations`] and
//! keeps whatever per-unit detail the report needs.
//!
//! | counter | level | detail |
//! |---|---|---|
//! | [`count_consecutive_shifts`] | hard | per staff member |
//! | [`count_same_day_double_shifts`] | hard | per staff member |
//! | [`count_weekly_overwork`] | hard | shifts per staff member per week |
//! | [`count_staffing_bounds`] | hard | staff per slot |
//! | [`count_preference_mismatches`] | soft | per staff member |
//!
//! [`DecodedSchedule`]: crate::DecodedSchedule
//! [`ScheduleModel`]: crate::ScheduleModel

mod consecutive;
mod preference;
mod same_day;
mod staffing;
mod weekly;


use nurseforge_core::ConstraintKind;

pub use consecutive::{count_consecutive_shifts, ConsecutiveShifts};
pub use preference::{count_preference_mismatches, PreferenceMismatches};
pub use same_day::{count_same_day_double_shifts, SameDayDoubleShifts};
pub use staffing::{count_staffing_bounds, StaffingBounds};
pub use weekly::{count_weekly_overwork, WeeklyOverwork};

/// Common view over the result of a violation counter.
pub trait Violations {
    /// The rule this result belongs to.
    const KIND: ConstraintKind;

    /// Total violation count.
    fn violations(&self) -> u64;
}
