//! Score analysis types for reporting.
//!
//! A [`ScoreExplanation`] keeps the full result of every counter for one
//! schedule: the per-constraint breakdown, the diagnostics the report
//! prints, and per-staff indictments.

use nurseforge_core::{ConstraintKind, ConstraintRef, Cost, HardSoftScore, Result, Score};
use tracing::debug;

use crate::aggregator::ViolationCounts;
use crate::counters::{
    count_consecutive_shifts, count_preference_mismatches, count_same_day_double_shifts,
    count_staffing_bounds, count_weekly_overwork, ConsecutiveShifts, PreferenceMismatches,
    SameDayDoubleShifts, StaffingBounds, WeeklyOverwork,
};
use crate::model::ScheduleModel;

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintAnalysis {
    /// Constraint reference.
    pub constraint_ref: ConstraintRef,
    /// The rule.
    pub kind: ConstraintKind,
    /// Cost per violation.
    pub weight: Cost,
    /// Number of violations.
    pub violations: u64,
    /// Total cost from this constraint.
    pub score: Cost,
    /// Whether this is a hard constraint.
    pub is_hard: bool,
}

impl ConstraintAnalysis {
    /// Creates the analysis of one rule from its count and weight.
    pub fn new(kind: ConstraintKind, weight: Cost, violations: u64) -> Self {
        Self {
            constraint_ref: kind.constraint_ref(),
            kind,
            weight,
            violations,
            score: weight.times(violations as i64),
            is_hard: kind.is_hard(),
        }
    }

    /// Returns the constraint name.
    pub fn name(&self) -> &str {
        &self.constraint_ref.name
    }
}

/// How one staff member contributes to the cost.
///
/// Staffing bounds are a property of the whole roster and are not charged to
/// anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffIndictment {
    pub staff_id: String,
    pub index: usize,
    pub consecutive_shifts: u64,
    pub same_day_double_shifts: u64,
    /// Shifts above the cap, summed over all weeks.
    pub weekly_overwork: u64,
    pub preference_mismatches: u64,
    /// Weighted cost of the violations above.
    pub cost: Cost,
}

impl StaffIndictment {
    /// Sum of the hard violations charged to this staff member.
    pub fn hard(&self) -> u64 {
        self.consecutive_shifts + self.same_day_double_shifts + self.weekly_overwork
    }

    /// Returns true if nothing is charged to this staff member.
    pub fn is_clean(&self) -> bool {
        self.hard() == 0 && self.preference_mismatches == 0
    }
}

/// Complete score explanation with per-constraint breakdown and diagnostics.
#[derive(Debug, Clone)]
pub struct ScoreExplanation {
    /// Hard and soft totals.
    pub score: HardSoftScore,
    /// The weighted cost, equal to [`ScheduleModel::cost`].
    pub cost: Cost,
    /// Per-constraint breakdown, in [`ConstraintKind::ALL`] order.
    pub constraint_analyses: Vec<ConstraintAnalysis>,
    /// Staff identifiers in roster order.
    pub staff: Vec<String>,
    pub consecutive: ConsecutiveShifts,
    pub same_day: SameDayDoubleShifts,
    pub weekly: WeeklyOverwork,
    pub staffing: StaffingBounds,
    pub preferences: PreferenceMismatches,
    hard_penalty_weight: Cost,
    weekly_cap: u64,
}

impl ScoreExplanation {
    /// Returns the analysis of one rule.
    pub fn analysis(&self, kind: ConstraintKind) -> Option<&ConstraintAnalysis> {
        self.constraint_analyses.iter().find(|a| a.kind == kind)
    }

    /// Returns constraints with at least one violation.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != Cost::zero())
            .collect()
    }

    /// Returns the total violation count across all constraints.
    pub fn total_violations(&self) -> u64 {
        self.constraint_analyses.iter().map(|a| a.violations).sum()
    }

    /// Returns the raw counts.
    pub fn counts(&self) -> ViolationCounts {
        ViolationCounts {
            consecutive_shifts: self.consecutive.violations,
            same_day_double_shifts: self.same_day.violations,
            weekly_overwork: self.weekly.violations,
            staffing_bounds: self.staffing.violations,
            preference_mismatches: self.preferences.violations,
        }
    }

    /// Returns true if no hard rule is violated.
    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }

    /// Charges the per-staff violations to each staff member, in roster order.
    pub fn indictments(&self) -> Vec<StaffIndictment> {
        let cap = self.weekly_cap;
        self.staff
            .iter()
            .enumerate()
            .map(|(index, staff_id)| {
                let consecutive_shifts = self.consecutive.per_staff[index];
                let same_day_double_shifts = self.same_day.per_staff[index];
                let weekly_overwork = self
                    .weekly
                    .totals_for(index)
                    .iter()
                    .map(|total| total.saturating_sub(cap))
                    .sum();
                let preference_mismatches = self.preferences.per_staff[index];
                let hard = consecutive_shifts + same_day_double_shifts + weekly_overwork;

                StaffIndictment {
                    staff_id: staff_id.clone(),
                    index,
                    consecutive_shifts,
                    same_day_double_shifts,
                    weekly_overwork,
                    preference_mismatches,
                    cost: HardSoftScore::of(hard as i64, preference_mismatches as i64)
                        .weighted(self.hard_penalty_weight),
                }
            })
            .collect()
    }

    /// Returns the indictments sorted by cost, worst first.
    pub fn worst_staff(&self) -> Vec<StaffIndictment> {
        let mut indictments = self.indictments();
        indictments.sort_by(|a, b| b.cost.cmp(&a.cost).then(a.index.cmp(&b.index)));
        indictments
    }

    /// Returns the weekly shift cap the schedule was checked against.
    pub fn weekly_cap(&self) -> u64 {
        self.weekly_cap
    }

    /// Returns the weight applied to hard violations.
    pub fn hard_penalty_weight(&self) -> Cost {
        self.hard_penalty_weight
    }
}

impl ScheduleModel {
    /// Scores a schedule and keeps every count and diagnostic.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`cost`](ScheduleModel::cost) fails.
    pub fn explain(&self, schedule: &[u8]) -> Result<ScoreExplanation> {
        let decoded = self.decode(schedule)?;

        let consecutive = count_consecutive_shifts(self, &decoded);
        let same_day = count_same_day_double_shifts(self, &decoded);
        let weekly = count_weekly_overwork(self, &decoded);
        let staffing = count_staffing_bounds(self, &decoded);
        let preferences = count_preference_mismatches(self, &decoded);

        let hard_weight = self.hard_penalty_weight();
        let counts = ViolationCounts {
            consecutive_shifts: consecutive.violations,
            same_day_double_shifts: same_day.violations,
            weekly_overwork: weekly.violations,
            staffing_bounds: staffing.violations,
            preference_mismatches: preferences.violations,
        };
        let constraint_analyses = ConstraintKind::ALL
            .iter()
            .map(|&kind| {
                let weight = if kind.is_hard() { hard_weight } else { Cost::ONE };
                ConstraintAnalysis::new(kind, weight, counts.get(kind))
            })
            .collect();

        let score = counts.score();
        let cost = counts.weighted(hard_weight);

        debug!(
            event = "score_explained",
            hard = score.hard(),
            soft = score.soft(),
            cost = %cost,
        );

        Ok(ScoreExplanation {
            score,
            cost,
            constraint_analyses,
            staff: self.staff().to_vec(),
            consecutive,
            same_day,
            weekly,
            staffing,
            preferences,
            hard_penalty_weight: hard_weight,
            weekly_cap: self.max_shifts_per_week(),
        })
    }
}

#[cfg(test)]
mod tests {
    use nurseforge_core::ShiftOfDay;
    use nurseforge_test::ScheduleBuilder;

    use super::*;

    fn ward() -> ScheduleModel {
        ScheduleModel::new(["ana", "luis", "marta"], vec![[1, 0, 0], [0, 1, 0], [0, 0, 1]])
            .unwrap()
    }

    #[test]
    fn test_explanation_matches_cost() {
        let model = ward();
        let schedule = nurseforge_test::random_schedule(model.total_length(), 42);

        let explanation = model.explain(&schedule).unwrap();
        assert_eq!(explanation.cost, model.cost(&schedule).unwrap());
        assert_eq!(explanation.counts(), model.counts(&schedule).unwrap());
        assert_eq!(explanation.constraint_analyses.len(), 5);

        let summed = explanation
            .constraint_analyses
            .iter()
            .map(|a| a.score)
            .sum::<Cost>();
        assert_eq!(summed, explanation.cost);
    }

    #[test]
    fn test_analysis_weights() {
        let model = ward();
        let schedule = ScheduleBuilder::new(3, 1).build();

        let explanation = model.explain(&schedule).unwrap();
        let staffing = explanation.analysis(ConstraintKind::StaffingBounds).unwrap();
        assert!(staffing.is_hard);
        assert_eq!(staffing.violations, 63);
        assert_eq!(staffing.weight, Cost::from_f64(2.13));
        assert_eq!(staffing.name(), "Staffing per shift");

        let preference = explanation.analysis(ConstraintKind::ShiftPreference).unwrap();
        assert!(!preference.is_hard);
        assert_eq!(preference.weight, Cost::ONE);

        assert_eq!(explanation.non_zero_constraints().len(), 1);
        assert_eq!(explanation.total_violations(), 63);
        assert!(!explanation.is_feasible());
    }

    #[test]
    fn test_indictments_charge_staff() {
        let model = ward();
        let schedule = ScheduleBuilder::new(3, 1)
            .every_day(0, [1, 0, 0])
            .set_day(1, 0, [1, 0, 1])
            .assign(2, 3, ShiftOfDay::Night)
            .build();

        let explanation = model.explain(&schedule).unwrap();
        assert_eq!(explanation.weekly_cap(), 5);

        let indictments = explanation.indictments();
        assert_eq!(indictments.len(), 3);

        let ana = &indictments[0];
        assert_eq!(ana.staff_id, "ana");
        assert_eq!(ana.weekly_overwork, 2);
        assert_eq!(ana.preference_mismatches, 0);
        assert_eq!(ana.cost, Cost::from_f64(4.26));

        let luis = &indictments[1];
        assert_eq!(luis.same_day_double_shifts, 1);
        assert_eq!(luis.preference_mismatches, 2);
        assert_eq!(luis.hard(), 1);

        assert!(indictments[2].is_clean());

        let worst = explanation.worst_staff();
        assert_eq!(worst[0].staff_id, "ana");
        assert_eq!(worst[2].staff_id, "marta");
    }

    #[test]
    fn test_explain_rejects_wrong_length() {
        let model = ward();
        assert!(model.explain(&[0; 62]).unwrap_err().is_validation());
    }
}
