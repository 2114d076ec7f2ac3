//! HardSoftScore - Two-level violation count with hard and soft constraints

use std::cmp::Ordering;
use std::fmt;

use super::cost::{Cost, SCALE};
use super::traits::Score;

/// Violation totals split into hard and soft constraint levels.
///
/// Hard constraints are the staffing and workload rules, soft constraints
/// are shift preferences. Both components count violations, so a schedule
/// with `0hard/0soft` is perfect.
///
/// When comparing scores:
/// 1. Hard scores are compared first
/// 2. Soft scores are only compared when hard scores are equal
///
/// # Examples
///
/// ```
/// use nurseforge_core::{Cost, HardSoftScore, Score};
///
/// let score1 = HardSoftScore::of(1, 0);   // 1 hard violation
/// let score2 = HardSoftScore::of(0, 20);  // feasible but many unmet preferences
///
/// // Feasible schedules are always better than infeasible ones
/// assert!(score2.is_better_than(&score1));
///
/// // The scalar cost applies the hard penalty weight
/// let cost = HardSoftScore::of(58, 3).weighted(Cost::from_f64(2.13));
/// assert_eq!(cost.to_string(), "126.54");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore { hard: 0, soft: 0 };

    /// One hard constraint violation.
    pub const ONE_HARD: HardSoftScore = HardSoftScore { hard: 1, soft: 0 };

    /// One soft constraint violation.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore { hard: 0, soft: 1 };

    /// Creates a new HardSoftScore.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore { hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore { hard, soft: 0 }
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore { hard: 0, soft }
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns true if no hard constraint is violated.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard <= 0
    }

    /// Collapses both levels into a scalar cost:
    /// `hard_weight * hard + soft`.
    ///
    /// Saturates at the bounds of the scaled range.
    pub const fn weighted(&self, hard_weight: Cost) -> Cost {
        let hard = hard_weight.scaled().saturating_mul(self.hard);
        Cost::of_scaled(hard.saturating_add(self.soft.saturating_mul(SCALE)))
    }
}

impl Score for HardSoftScore {
    #[inline]
    fn zero() -> Self {
        HardSoftScore::ZERO
    }
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl_score_ops!(HardSoftScore { hard, soft } => of);

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}
