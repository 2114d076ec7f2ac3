//! Shift preferences.

use nurseforge_core::{ConstraintKind, SHIFTS_PER_DAY};

use super::Violations;
use crate::decoder::DecodedSchedule;
use crate::model::ScheduleModel;

/// Result of [`count_preference_mismatches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMismatches {
    /// Unwanted shifts per staff member, in roster order.
    pub per_staff: Vec<u64>,
    /// Total unwanted shifts.
    pub violations: u64,
}

impl Violations for PreferenceMismatches {
    const KIND: ConstraintKind = ConstraintKind::ShiftPreference;

    fn violations(&self) -> u64 {
        self.violations
    }
}

/// Counts assigned shifts the staff member did not ask for.
///
/// Each staff member's 3-flag preference is repeated for every day of the
/// schedule. A slot counts when its preference flag is 0 and its bit is 1.
/// A wanted shift left unassigned costs nothing.
pub fn count_preference_mismatches(
    model: &ScheduleModel,
    schedule: &DecodedSchedule<'_>,
) -> PreferenceMismatches {
    let per_staff: Vec<u64> = schedule
        .iter()
        .map(|staff| {
            let preference = &model.preferences()[staff.index];
            staff
                .shifts
                .iter()
                .enumerate()
                .filter(|&(slot, &bit)| preference[slot % SHIFTS_PER_DAY] == 0 && bit == 1)
                .count() as u64
        })
        .collect();

    PreferenceMismatches {
        violations: per_staff.iter().sum(),
        per_staff,
    }
}
