//! Folding the five counts into one cost.

use nurseforge_core::{ConstraintKind, Cost, HardSoftScore, Result};
use tracing::trace;

use crate::counters::{
    count_consecutive_shifts, count_preference_mismatches, count_same_day_double_shifts,
    count_staffing_bounds, count_weekly_overwork,
};
use crate::decoder::DecodedSchedule;
use crate::model::ScheduleModel;

/// The raw violation count of every rule for one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViolationCounts {
    pub consecutive_shifts: u64,
    pub same_day_double_shifts: u64,
    pub weekly_overwork: u64,
    pub staffing_bounds: u64,
    pub preference_mismatches: u64,
}

impl ViolationCounts {
    /// Sum of the four hard counts.
    pub fn hard(&self) -> u64 {
        self.consecutive_shifts
            + self.same_day_double_shifts
            + self.weekly_overwork
            + self.staffing_bounds
    }

    /// The soft count.
    pub fn soft(&self) -> u64 {
        self.preference_mismatches
    }

    /// The counts as a two-level score.
    pub fn score(&self) -> HardSoftScore {
        HardSoftScore::of(self.hard() as i64, self.soft() as i64)
    }

    /// Returns the count of one rule.
    pub fn get(&self, kind: ConstraintKind) -> u64 {
        match kind {
            ConstraintKind::ConsecutiveShifts => self.consecutive_shifts,
            ConstraintKind::SameDayDoubleShift => self.same_day_double_shifts,
            ConstraintKind::WeeklyShiftCap => self.weekly_overwork,
            ConstraintKind::StaffingBounds => self.staffing_bounds,
            ConstraintKind::ShiftPreference => self.preference_mismatches,
        }
    }

    /// Returns the weighted cost: `hard_weight * hard + soft`.
    pub fn weighted(&self, hard_weight: Cost) -> Cost {
        self.score().weighted(hard_weight)
    }

    pub(crate) fn tally(model: &ScheduleModel, schedule: &DecodedSchedule<'_>) -> Self {
        ViolationCounts {
            consecutive_shifts: count_consecutive_shifts(model, schedule).violations,
            same_day_double_shifts: count_same_day_double_shifts(model, schedule).violations,
            weekly_overwork: count_weekly_overwork(model, schedule).violations,
            staffing_bounds: count_staffing_bounds(model, schedule).violations,
            preference_mismatches: count_preference_mismatches(model, schedule).violations,
        }
    }
}

impl ScheduleModel {
    /// Scores a flat schedule.
    ///
    /// Returns `hard_penalty_weight * (a + b + c + d) + e` where `a..d` are
    /// the hard counts and `e` the preference mismatches. Lower is better;
    /// the cost is never negative.
    ///
    /// # Errors
    ///
    /// Returns [`NurseForgeError::Validation`](nurseforge_core::NurseForgeError::Validation)
    /// if the schedule has the wrong length.
    pub fn cost(&self, schedule: &[u8]) -> Result<Cost> {
        let counts = self.counts(schedule)?;
        let cost = counts.weighted(self.hard_penalty_weight());

        trace!(
            event = "cost_evaluated",
            hard = counts.hard(),
            soft = counts.soft(),
            cost = %cost,
        );

        Ok(cost)
    }

    /// Returns the raw count of every rule.
    pub fn counts(&self, schedule: &[u8]) -> Result<ViolationCounts> {
        let decoded = self.decode(schedule)?;
        Ok(ViolationCounts::tally(self, &decoded))
    }

    /// Returns the cost of an already decoded schedule.
    pub fn cost_decoded(&self, schedule: &DecodedSchedule<'_>) -> Cost {
        ViolationCounts::tally(self, schedule).weighted(self.hard_penalty_weight())
    }
}

#[cfg(test)]
mod tests {
    use nurseforge_core::NurseForgeError;
    use nurseforge_test::ScheduleBuilder;

    use super::*;

    #[test]
    fn test_single_nurse_mornings() {
        let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
        let schedule = ScheduleBuilder::new(1, 1).every_day(0, [1, 0, 0]).build();

        let counts = model.counts(&schedule).unwrap();
        assert_eq!(
            counts,
            ViolationCounts {
                consecutive_shifts: 0,
                same_day_double_shifts: 0,
                weekly_overwork: 2,
                staffing_bounds: 56,
                preference_mismatches: 0,
            }
        );
        assert_eq!(counts.score(), HardSoftScore::of(58, 0));
        assert_eq!(model.cost(&schedule).unwrap(), Cost::of_scaled(12_354_000));
    }

    #[test]
    fn test_soft_count_has_unit_weight() {
        let model = ScheduleModel::new(["ana"], vec![[0, 0, 0]]).unwrap();
        let schedule = ScheduleBuilder::new(1, 1).set_day(0, 0, [0, 1, 0]).build();

        let counts = model.counts(&schedule).unwrap();
        assert_eq!(counts.soft(), 1);
        // 9 * 7 - 1 staffing deficits plus the mismatch
        assert_eq!(
            model.cost(&schedule).unwrap(),
            Cost::from_f64(2.13).times(62) + Cost::ONE
        );
    }

    #[test]
    fn test_get_by_kind() {
        let counts = ViolationCounts {
            consecutive_shifts: 1,
            same_day_double_shifts: 2,
            weekly_overwork: 3,
            staffing_bounds: 4,
            preference_mismatches: 5,
        };
        let by_kind: Vec<u64> = ConstraintKind::ALL.iter().map(|&k| counts.get(k)).collect();
        assert_eq!(by_kind, vec![1, 2, 3, 4, 5]);
        assert_eq!(counts.hard(), 10);
    }

    #[test]
    fn test_wrong_length_propagates() {
        let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
        assert_eq!(
            model.cost(&[0; 20]).unwrap_err(),
            NurseForgeError::Validation {
                expected: 21,
                actual: 20
            }
        );
    }

    #[test]
    fn test_cost_decoded_matches_cost() {
        let model = ScheduleModel::new(["ana", "luis"], vec![[1, 0, 0], [0, 1, 0]]).unwrap();
        let schedule = nurseforge_test::random_schedule(model.total_length(), 11);
        let decoded = model.decode(&schedule).unwrap();

        assert_eq!(model.cost_decoded(&decoded), model.cost(&schedule).unwrap());
    }
}
