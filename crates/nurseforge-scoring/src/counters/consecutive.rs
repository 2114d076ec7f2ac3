//! Back-to-back shift assignments.

use nurseforge_core::ConstraintKind;

use super::Violations;
use crate::decoder::DecodedSchedule;
use crate::model::ScheduleModel;

/// Result of [`count_consecutive_shifts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsecutiveShifts {
    /// Violations per staff member, in roster order.
    pub per_staff: Vec<u64>,
    /// Total violations.
    pub violations: u64,
}

impl Violations for ConsecutiveShifts {
    const KIND: ConstraintKind = ConstraintKind::ConsecutiveShifts;

    fn violations(&self) -> u64 {
        self.violations
    }
}

/// Counts adjacent pairs of assigned slots in each staff member's chunk.
///
/// Pairs overlap: three assigned slots in a row are two violations. The
/// chunk is scanned as one flat run, so a night shift followed by the next
/// day's morning shift is a violation too.
pub fn count_consecutive_shifts(
    _model: &ScheduleModel,
    schedule: &DecodedSchedule<'_>,
) -> ConsecutiveShifts {
    let per_staff: Vec<u64> = schedule
        .iter()
        .map(|staff| {
            staff
                .shifts
                .windows(2)
                .filter(|pair| pair[0] == 1 && pair[1] == 1)
                .count() as u64
        })
        .collect();

    ConsecutiveShifts {
        violations: per_staff.iter().sum(),
        per_staff,
    }
}
