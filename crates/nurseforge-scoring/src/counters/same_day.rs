//! Morning and night on the same day.

use nurseforge_core::{ConstraintKind, ShiftOfDay};

use super::Violations;
use crate::decoder::DecodedSchedule;
use crate::model::ScheduleModel;

/// Result of [`count_same_day_double_shifts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameDayDoubleShifts {
    /// Violations per staff member, in roster order.
    pub per_staff: Vec<u64>,
    /// Total violations.
    pub violations: u64,
}

impl Violations for SameDayDoubleShifts {
    const KIND: ConstraintKind = ConstraintKind::SameDayDoubleShift;

    fn violations(&self) -> u64 {
        self.violations
    }
}

/// Counts days where a staff member has both the morning and the night shift.
///
/// The afternoon bit is ignored. Both bits must equal exactly 1.
pub fn count_same_day_double_shifts(
    _model: &ScheduleModel,
    schedule: &DecodedSchedule<'_>,
) -> SameDayDoubleShifts {
    let morning = ShiftOfDay::Morning.index();
    let night = ShiftOfDay::Night.index();

    let per_staff: Vec<u64> = schedule
        .iter()
        .map(|staff| {
            staff
                .days()
                .filter(|day| day[morning] == 1 && day[night] == 1)
                .count() as u64
        })
        .collect();

    SameDayDoubleShifts {
        violations: per_staff.iter().sum(),
        per_staff,
    }
}
