//! Core Score trait definition

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

/// Core trait for all score types in NurseForge.
///
/// Scores represent the cost of a candidate schedule. They are used to:
/// - Compare schedules (better/worse/equal)
/// - Feed the objective of an external optimizer
///
/// All score implementations must be:
/// - Immutable (operations return new instances)
/// - Thread-safe (Send + Sync)
/// - Comparable (total ordering)
///
/// Unlike reward-style scores, every NurseForge score is a penalty:
/// a schedule is better when its score is *lower*.
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns true if this score is the zero score.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Compares two scores, returning the ordering.
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Returns true if this score is better (lower) than the other score.
    fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this score is worse (higher) than the other score.
    fn is_worse_than(&self, other: &Self) -> bool {
        self > other
    }
}
