//! Daily staffing bounds per shift.

use nurseforge_core::{ConstraintKind, ShiftOfDay};

use super::Violations;
use crate::decoder::DecodedSchedule;
use crate::model::ScheduleModel;

/// Result of [`count_staffing_bounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffingBounds {
    /// Staff assigned to each slot, summed over all staff members.
    /// Slot `i` is day `i / 3`, shift-of-day `i % 3`.
    pub staffed_per_slot: Vec<u64>,
    /// Total understaffing plus overstaffing.
    pub violations: u64,
}

impl StaffingBounds {
    /// Iterates `(slot, shift, staffed)` for every slot.
    pub fn slots(&self) -> impl Iterator<Item = (usize, ShiftOfDay, u64)> + '_ {
        self.staffed_per_slot
            .iter()
            .enumerate()
            .map(|(slot, &staffed)| (slot, ShiftOfDay::from_slot(slot), staffed))
    }
}

impl Violations for StaffingBounds {
    const KIND: ConstraintKind = ConstraintKind::StaffingBounds;

    fn violations(&self) -> u64 {
        self.violations
    }
}

/// Sums the chunks element-wise and checks every slot against the bounds of
/// its shift-of-day.
///
/// A slot above its maximum adds the excess, a slot below its minimum adds
/// the deficit.
pub fn count_staffing_bounds(
    model: &ScheduleModel,
    schedule: &DecodedSchedule<'_>,
) -> StaffingBounds {
    let mut staffed_per_slot = vec![0u64; schedule.slots_per_staff()];
    for staff in schedule {
        for (count, &bit) in staffed_per_slot.iter_mut().zip(staff.shifts) {
            *count += u64::from(bit);
        }
    }

    let violations = staffed_per_slot
        .iter()
        .enumerate()
        .map(|(slot, &staffed)| {
            let shift = ShiftOfDay::from_slot(slot);
            let (min, max) = (model.min_per_shift(shift), model.max_per_shift(shift));
            if staffed > max {
                staffed - max
            } else if staffed < min {
                min - staffed
            } else {
                0
            }
        })
        .sum();

    StaffingBounds {
        staffed_per_slot,
        violations,
    }
}
