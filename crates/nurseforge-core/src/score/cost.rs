//! Cost - Single-level decimal score with i64 precision and ×100000 scaling
//!
//! The cost of a schedule is `hard_penalty_weight * hard + soft`. With a
//! fractional weight such as `2.13` the result is a decimal, so the value is
//! stored pre-scaled to keep five exact fractional digits without floats.

use std::cmp::Ordering;
use std::fmt;

use super::traits::Score;

/// Scale factor for 5 decimal places of precision.
pub(crate) const SCALE: i64 = 100_000;

/// The scalar cost of a candidate schedule.
///
/// A tagged single-value result: optimizers that follow the fitness-tuple
/// convention can call [`as_fitness`](Self::as_fitness) to get a
/// one-element tuple. This does not make the cost multi-objective.
///
/// # Examples
///
/// ```
/// use nurseforge_core::{Cost, Score};
///
/// let weight = Cost::from_f64(2.13);
/// assert_eq!(weight.scaled(), 213_000);
///
/// // 58 hard violations at weight 2.13, no soft violations
/// let cost = weight.times(58);
/// assert_eq!(format!("{}", cost), "123.54");
/// assert_eq!(cost.as_fitness(), (123.54,));
///
/// assert!(Cost::ZERO.is_better_than(&cost));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    scaled: i64,
}

impl Cost {
    /// The zero cost.
    pub const ZERO: Cost = Cost { scaled: 0 };

    /// A cost of exactly one unit.
    pub const ONE: Cost = Cost { scaled: SCALE };

    /// Largest magnitude, in unscaled units, a cost can represent.
    pub const MAX_UNSCALED: f64 = 92_233_720_368_547.0;

    /// Creates a cost from an unscaled integer value.
    #[inline]
    pub const fn of(value: i64) -> Self {
        Cost {
            scaled: value * SCALE,
        }
    }

    /// Creates a cost from a pre-scaled value.
    #[inline]
    pub const fn of_scaled(scaled: i64) -> Self {
        Cost { scaled }
    }

    /// Creates a cost from a float, rounded to five decimal places.
    ///
    /// Out-of-range values saturate; use [`try_from_f64`](Self::try_from_f64)
    /// to reject them instead.
    pub fn from_f64(value: f64) -> Self {
        Cost {
            scaled: (value * SCALE as f64).round() as i64,
        }
    }

    /// Creates a cost from a float, or `None` if it is not finite or does
    /// not fit the scaled range.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > Self::MAX_UNSCALED {
            return None;
        }
        Some(Self::from_f64(value))
    }

    /// Returns the scaled value.
    #[inline]
    pub const fn scaled(&self) -> i64 {
        self.scaled
    }

    /// Returns the value as a float.
    pub fn to_f64(&self) -> f64 {
        self.scaled as f64 / SCALE as f64
    }

    /// Multiplies this cost by a violation count, exactly.
    ///
    /// Saturates at the bounds of the scaled range.
    #[inline]
    pub const fn times(&self, count: i64) -> Self {
        Cost {
            scaled: self.scaled.saturating_mul(count),
        }
    }

    /// Returns the cost as a one-element fitness tuple.
    pub fn as_fitness(&self) -> (f64,) {
        (self.to_f64(),)
    }
}

impl Score for Cost {
    #[inline]
    fn zero() -> Self {
        Cost::ZERO
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scaled.cmp(&other.scaled)
    }
}

impl_score_ops!(Cost { scaled } => of_scaled);

impl From<Cost> for f64 {
    fn from(cost: Cost) -> f64 {
        cost.to_f64()
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cost({})", self)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.scaled < 0 { "-" } else { "" };
        let magnitude = self.scaled.unsigned_abs();
        let scale = SCALE as u64;
        let (whole, fraction) = (magnitude / scale, magnitude % scale);
        if fraction == 0 {
            write!(f, "{}{}", sign, whole)
        } else {
            let digits = format!("{:05}", fraction);
            write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
        }
    }
}
