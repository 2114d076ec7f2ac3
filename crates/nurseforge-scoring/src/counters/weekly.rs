//! Weekly shift cap.

use nurseforge_core::ConstraintKind;

use super::Violations;
use crate::decoder::DecodedSchedule;
use crate::model::ScheduleModel;

/// Result of [`count_weekly_overwork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyOverwork {
    /// Shifts worked per staff member per week, staff-major then week-minor.
    pub weekly_totals: Vec<u64>,
    /// Number of weeks per staff member in `weekly_totals`.
    pub weeks: usize,
    /// Total shifts above the cap.
    pub violations: u64,
}

impl WeeklyOverwork {
    /// Returns the weekly totals of the staff member at a roster position.
    pub fn totals_for(&self, staff_index: usize) -> &[u64] {
        let start = staff_index * self.weeks;
        self.weekly_totals
            .get(start..start + self.weeks)
            .unwrap_or(&[])
    }
}

impl Violations for WeeklyOverwork {
    const KIND: ConstraintKind = ConstraintKind::WeeklyShiftCap;

    fn violations(&self) -> u64 {
        self.violations
    }
}

/// Sums each staff member's shifts per week and adds the excess over the
/// weekly cap.
///
/// A week with `cap + 2` shifts adds 2, not 1.
pub fn count_weekly_overwork(
    model: &ScheduleModel,
    schedule: &DecodedSchedule<'_>,
) -> WeeklyOverwork {
    let cap = model.max_shifts_per_week();
    let mut weekly_totals = Vec::with_capacity(schedule.len() * model.weeks());
    let mut violations = 0;

    for staff in schedule {
        for week in staff.weeks() {
            let total: u64 = week.iter().map(|&bit| u64::from(bit)).sum();
            weekly_totals.push(total);
            violations += total.saturating_sub(cap);
        }
    }

    WeeklyOverwork {
        weekly_totals,
        weeks: model.weeks(),
        violations,
    }
}
