//! Schedule model: roster, preferences and staffing constants.

use std::collections::HashSet;

use nurseforge_config::{RosterConfig, StaffingConfig};
use nurseforge_core::{
    Cost, NurseForgeError, Result, ShiftOfDay, DAYS_PER_WEEK, SHIFTS_PER_DAY, SHIFTS_PER_WEEK,
};
use tracing::info;

/// Shift preference flags of one staff member: [morning, afternoon, night].
///
/// A 1 means the shift is wanted on every day of the schedule.
pub type Preference = [u8; SHIFTS_PER_DAY];

/// Static configuration shared by every evaluation.
///
/// Built once per optimization run and reused for every candidate; it is
/// never mutated after construction.
///
/// # Example
///
/// ```
/// use nurseforge_config::StaffingConfig;
/// use nurseforge_scoring::ScheduleModel;
///
/// let model = ScheduleModel::with_config(
///     ["ana", "luis", "marta"],
///     vec![[1, 0, 0], [0, 1, 0], [0, 0, 1]],
///     StaffingConfig::default().with_weeks(2),
/// )
/// .unwrap();
///
/// assert_eq!(model.slots_per_staff(), 42);
/// assert_eq!(model.total_length(), 126);
/// assert_eq!(model.days(), 14);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    staff: Vec<String>,
    preferences: Vec<Preference>,
    config: StaffingConfig,
    hard_penalty_weight: Cost,
}

impl ScheduleModel {
    /// Creates a one-week model with the default staffing constants.
    pub fn new<I, S>(staff: I, preferences: Vec<Preference>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(staff, preferences, StaffingConfig::default())
    }

    /// Creates a model spanning `weeks` weeks with the default staffing constants.
    pub fn with_weeks<I, S>(staff: I, preferences: Vec<Preference>, weeks: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(
            staff,
            preferences,
            StaffingConfig::default().with_weeks(weeks),
        )
    }

    /// Creates a model from explicit staffing constants.
    ///
    /// # Errors
    ///
    /// Returns [`NurseForgeError::Config`] if the roster is empty, has
    /// duplicate ids, does not line up with the preference table, has a
    /// preference flag other than 0 or 1, or if the staffing constants are
    /// invalid.
    pub fn with_config<I, S>(
        staff: I,
        preferences: Vec<Preference>,
        config: StaffingConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let staff: Vec<String> = staff.into_iter().map(Into::into).collect();

        if staff.is_empty() {
            return Err(NurseForgeError::config("roster has no staff"));
        }
        if preferences.len() != staff.len() {
            return Err(NurseForgeError::config(format!(
                "preference table has {} entries but roster has {} staff",
                preferences.len(),
                staff.len()
            )));
        }
        let mut seen = HashSet::with_capacity(staff.len());
        if let Some(duplicate) = staff.iter().find(|id| !seen.insert(id.as_str())) {
            return Err(NurseForgeError::config(format!(
                "duplicate staff id '{}'",
                duplicate
            )));
        }
        for (id, preference) in staff.iter().zip(&preferences) {
            if preference.iter().any(|&flag| flag > 1) {
                return Err(NurseForgeError::config(format!(
                    "preference flags of '{}' must be 0 or 1, got {:?}",
                    id, preference
                )));
            }
        }
        config.validate()?;

        let model = ScheduleModel {
            hard_penalty_weight: config.hard_penalty_cost(),
            staff,
            preferences,
            config,
        };

        info!(
            event = "model_built",
            staff_count = model.staff.len(),
            weeks = model.config.weeks,
            schedule_length = model.total_length(),
        );

        Ok(model)
    }

    /// Creates a model from a roster file, using the staffing constants it
    /// carries or the defaults.
    pub fn from_roster(roster: &RosterConfig) -> Result<Self> {
        let staffing = roster.staffing.clone().unwrap_or_default();
        Self::from_roster_with(roster, staffing)
    }

    /// Creates a model from a roster file with explicit staffing constants.
    pub fn from_roster_with(roster: &RosterConfig, staffing: StaffingConfig) -> Result<Self> {
        roster.validate_staff()?;
        Self::with_config(roster.ids(), roster.preferences(), staffing)
    }

    /// Returns the number of bits a schedule must have.
    #[inline]
    pub fn total_length(&self) -> usize {
        self.staff.len() * self.slots_per_staff()
    }

    /// Alias of [`total_length`](Self::total_length).
    #[inline]
    pub fn len(&self) -> usize {
        self.total_length()
    }

    /// Always false: a model has at least one staff member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// Returns the number of bits owned by each staff member.
    #[inline]
    pub fn slots_per_staff(&self) -> usize {
        SHIFTS_PER_WEEK * self.config.weeks
    }

    /// Returns the number of weeks.
    #[inline]
    pub fn weeks(&self) -> usize {
        self.config.weeks
    }

    /// Returns the number of days.
    #[inline]
    pub fn days(&self) -> usize {
        DAYS_PER_WEEK * self.config.weeks
    }

    /// Returns the staff identifiers in roster order.
    pub fn staff(&self) -> &[String] {
        &self.staff
    }

    /// Returns the number of staff members.
    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    /// Returns the preference table in roster order.
    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    /// Returns the staffing constants.
    pub fn config(&self) -> &StaffingConfig {
        &self.config
    }

    /// Returns the weight applied to hard violations.
    pub fn hard_penalty_weight(&self) -> Cost {
        self.hard_penalty_weight
    }

    /// Returns the weekly shift cap.
    pub fn max_shifts_per_week(&self) -> u64 {
        u64::from(self.config.max_shifts_per_week)
    }

    /// Returns the minimum staff for a shift-of-day.
    pub fn min_per_shift(&self, shift: ShiftOfDay) -> u64 {
        u64::from(self.config.min_for(shift))
    }

    /// Returns the maximum staff for a shift-of-day.
    pub fn max_per_shift(&self, shift: ShiftOfDay) -> u64 {
        u64::from(self.config.max_for(shift))
    }

    /// Returns the roster position of a staff member.
    pub fn staff_index(&self, staff_id: &str) -> Option<usize> {
        self.staff.iter().position(|id| id == staff_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_staff() -> (Vec<&'static str>, Vec<Preference>) {
        (
            vec!["ana", "luis", "marta"],
            vec![[1, 0, 0], [0, 1, 0], [0, 0, 1]],
        )
    }

    #[test]
    fn test_sizing_one_week() {
        let (staff, prefs) = three_staff();
        let model = ScheduleModel::new(staff, prefs).unwrap();

        assert_eq!(model.weeks(), 1);
        assert_eq!(model.days(), 7);
        assert_eq!(model.slots_per_staff(), 21);
        assert_eq!(model.total_length(), 63);
        assert_eq!(model.len(), 63);
        assert!(!model.is_empty());
    }

    #[test]
    fn test_sizing_several_weeks() {
        let (staff, prefs) = three_staff();
        let model = ScheduleModel::with_weeks(staff, prefs, 4).unwrap();

        assert_eq!(model.slots_per_staff(), 84);
        assert_eq!(model.total_length(), 252);
    }

    #[test]
    fn test_default_constants() {
        let (staff, prefs) = three_staff();
        let model = ScheduleModel::new(staff, prefs).unwrap();

        assert_eq!(model.hard_penalty_weight(), Cost::from_f64(2.13));
        assert_eq!(model.max_shifts_per_week(), 5);
        assert_eq!(model.min_per_shift(ShiftOfDay::Morning), 4);
        assert_eq!(model.max_per_shift(ShiftOfDay::Night), 4);
    }

    #[test]
    fn test_preference_length_mismatch() {
        let err = ScheduleModel::new(["ana", "luis"], vec![[1, 0, 0]]).unwrap_err();
        assert_eq!(
            err,
            NurseForgeError::Config(
                "preference table has 1 entries but roster has 2 staff".to_string()
            )
        );
    }

    #[test]
    fn test_empty_roster() {
        let staff: Vec<String> = Vec::new();
        assert!(ScheduleModel::new(staff, Vec::new()).is_err());
    }

    #[test]
    fn test_duplicate_staff() {
        let err = ScheduleModel::new(["ana", "ana"], vec![[0; 3], [0; 3]]).unwrap_err();
        assert_eq!(
            err,
            NurseForgeError::Config("duplicate staff id 'ana'".to_string())
        );
    }

    #[test]
    fn test_non_binary_preference() {
        let err = ScheduleModel::new(["ana", "luis"], vec![[0, 0, 1], [2, 0, 0]]).unwrap_err();
        assert_eq!(
            err,
            NurseForgeError::Config(
                "preference flags of 'luis' must be 0 or 1, got [2, 0, 0]".to_string()
            )
        );
    }

    #[test]
    fn test_explicit_staffing_replaces_invalid_embedded_staffing() {
        let roster = RosterConfig::new()
            .with_member("ana", [1, 0, 0])
            .with_staffing(StaffingConfig::default().with_weeks(0));

        assert!(ScheduleModel::from_roster(&roster).is_err());
        let model =
            ScheduleModel::from_roster_with(&roster, StaffingConfig::default().with_weeks(1))
                .unwrap();
        assert_eq!(model.weeks(), 1);
    }

    #[test]
    fn test_zero_weeks() {
        let (staff, prefs) = three_staff();
        assert!(ScheduleModel::with_weeks(staff, prefs, 0).is_err());
    }

    #[test]
    fn test_inverted_bounds() {
        let (staff, prefs) = three_staff();
        let config = StaffingConfig::default().with_bounds([5, 3, 2], [4, 5, 4]);
        assert!(ScheduleModel::with_config(staff, prefs, config).is_err());
    }

    #[test]
    fn test_from_roster_uses_embedded_staffing() {
        let roster = RosterConfig::new()
            .with_member("ana", [1, 0, 0])
            .with_member("luis", [0, 0, 1])
            .with_staffing(StaffingConfig::default().with_weeks(2));

        let model = ScheduleModel::from_roster(&roster).unwrap();
        assert_eq!(model.staff(), &["ana".to_string(), "luis".to_string()]);
        assert_eq!(model.weeks(), 2);
        assert_eq!(model.staff_index("luis"), Some(1));
        assert_eq!(model.staff_index("pepe"), None);
    }

    #[test]
    fn test_model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScheduleModel>();
    }
}
