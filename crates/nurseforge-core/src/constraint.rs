//! Core constraint types.
//!
//! This module provides identification and classification of the five
//! scoring rules.

use std::fmt;

use crate::score::ScoreLevel;

/// Package under which all built-in rules are registered.
pub const CONSTRAINT_PACKAGE: &str = "nurseforge";

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use nurseforge_core::ConstraintRef;
///
/// let cr = ConstraintRef::new("nurseforge", "Weekly shift cap");
/// assert_eq!(cr.full_name(), "nurseforge/Weekly shift cap");
///
/// let simple = ConstraintRef::new("", "Simple");
/// assert_eq!(simple.full_name(), "Simple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    /// Package/module containing the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
}

impl ConstraintRef {
    /// Creates a new constraint reference.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }
}

/// The five scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConstraintKind {
    /// Two adjacent shift slots both assigned.
    ConsecutiveShifts,
    /// Morning and night on the same day.
    SameDayDoubleShift,
    /// More shifts in a week than the weekly cap.
    WeeklyShiftCap,
    /// A slot staffed below its minimum or above its maximum.
    StaffingBounds,
    /// A shift assigned that the staff member did not ask for.
    ShiftPreference,
}

impl ConstraintKind {
    /// All rules, in reporting order.
    pub const ALL: [ConstraintKind; 5] = [
        ConstraintKind::ConsecutiveShifts,
        ConstraintKind::SameDayDoubleShift,
        ConstraintKind::WeeklyShiftCap,
        ConstraintKind::StaffingBounds,
        ConstraintKind::ShiftPreference,
    ];

    /// Returns the constraint name.
    pub const fn name(&self) -> &'static str {
        match self {
            ConstraintKind::ConsecutiveShifts => "Consecutive shifts",
            ConstraintKind::SameDayDoubleShift => "Same-day double shift",
            ConstraintKind::WeeklyShiftCap => "Weekly shift cap",
            ConstraintKind::StaffingBounds => "Staffing per shift",
            ConstraintKind::ShiftPreference => "Shift preference",
        }
    }

    /// Returns the score level this rule contributes to.
    pub const fn level(&self) -> ScoreLevel {
        match self {
            ConstraintKind::ShiftPreference => ScoreLevel::Soft,
            _ => ScoreLevel::Hard,
        }
    }

    /// Returns true if violations are weighted by the hard penalty factor.
    pub const fn is_hard(&self) -> bool {
        matches!(self.level(), ScoreLevel::Hard)
    }

    /// Returns the reference used in score explanations.
    pub fn constraint_ref(&self) -> ConstraintRef {
        ConstraintRef::new(CONSTRAINT_PACKAGE, self.name())
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_ref_full_name() {
        let cr = ConstraintKind::WeeklyShiftCap.constraint_ref();
        assert_eq!(cr.full_name(), "nurseforge/Weekly shift cap");
    }

    #[test]
    fn test_constraint_ref_empty_package() {
        let cr = ConstraintRef::new("", "Simple");
        assert_eq!(cr.full_name(), "Simple");
    }

    #[test]
    fn test_only_preference_is_soft() {
        let soft: Vec<_> = ConstraintKind::ALL
            .iter()
            .filter(|kind| !kind.is_hard())
            .collect();
        assert_eq!(soft, vec![&ConstraintKind::ShiftPreference]);
    }
}
